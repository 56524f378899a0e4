use crossbeam::channel;

use crate::{Id, ParameterSlot};

/// Sent to observers after an element has written a new value to the
/// backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementEvent {
    element_id: Id,
    parameter: ParameterSlot,
    value: f64,
}

impl ElementEvent {
    pub(crate) fn new(element_id: Id, parameter: ParameterSlot, value: f64) -> Self {
        Self {
            element_id,
            parameter,
            value,
        }
    }

    /// The element that changed
    pub fn element_id(&self) -> Id {
        self.element_id
    }

    /// The control that changed
    pub fn parameter(&self) -> ParameterSlot {
        self.parameter
    }

    /// The new value, in dB for volume changes
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The new volume in dB, if this is a volume change
    pub fn volume_db(&self) -> Option<f64> {
        (self.parameter == ParameterSlot::Volume).then_some(self.value)
    }

    /// The new balance, if this is a balance change
    pub fn balance(&self) -> Option<f64> {
        (self.parameter == ParameterSlot::Balance).then_some(self.value)
    }
}

/// Returned by an observer to stay subscribed or to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierStatus {
    /// Keep receiving events
    Continue,

    /// Stop receiving events
    Remove,
}

/// A callback that is run synchronously for every event
pub type ElementObserver = Box<dyn FnMut(&ElementEvent) -> NotifierStatus>;

/// The receiving end of [crate::Element::subscribe]
pub type EventReceiver = channel::Receiver<ElementEvent>;

type EventTransmitter = channel::Sender<ElementEvent>;

#[derive(Default)]
pub(crate) struct EventDispatcher {
    observers: Vec<ElementObserver>,
    transmitters: Vec<EventTransmitter>,
}

impl EventDispatcher {
    pub fn add_observer(&mut self, observer: ElementObserver) {
        self.observers.push(observer);
    }

    pub fn subscribe(&mut self) -> EventReceiver {
        let (transmitter, receiver) = channel::unbounded();
        self.transmitters.push(transmitter);
        receiver
    }

    pub fn notify(&mut self, event: ElementEvent) {
        tracing::trace!(
            "{} {} changed to {}",
            event.element_id,
            event.parameter,
            event.value
        );

        self.observers
            .retain_mut(|observer| observer(&event) == NotifierStatus::Continue);

        self.transmitters
            .retain(|transmitter| transmitter.send(event).is_ok());
    }
}
