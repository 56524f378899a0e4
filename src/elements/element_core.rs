use crate::{ElementKind, Id, MidiAssignments, ParameterSlot, SharedBackend};

use super::element_event::{ElementEvent, EventDispatcher};

/// State every element kind carries alongside its gain model
pub(crate) struct ElementCore {
    pub id: Id,
    pub kind: ElementKind,
    pub backend: SharedBackend,
    pub events: EventDispatcher,
    pub midi: MidiAssignments,
}

impl ElementCore {
    pub fn new(kind: ElementKind, backend: SharedBackend) -> Self {
        Self {
            id: Id::generate(),
            kind,
            backend,
            events: EventDispatcher::default(),
            midi: MidiAssignments::new(kind),
        }
    }

    pub fn notify(&mut self, parameter: ParameterSlot, value: f64) {
        let event = ElementEvent::new(self.id, parameter, value);
        self.events.notify(event);
    }
}
