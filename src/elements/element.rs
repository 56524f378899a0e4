use crate::{
    AuxElement, ElementError, ElementKind, ElementOptions, Id, MidiAssignments, ParameterRange,
    ParameterSlot, Result, SharedBackend, StereoElement,
};

use super::{
    element_event::{ElementObserver, EventReceiver},
    midi_assignments::normalise_controller_value,
};

/// Any element, created by kind
pub enum Element {
    /// A single route
    Aux(AuxElement),

    /// A pair of routes with a balance
    Stereo(StereoElement),
}

impl Element {
    /// Create an element of `kind` for the selected channels
    ///
    /// Fails if `kind` cannot control that many inputs and outputs, or if
    /// the backend cannot resolve one of the routes
    pub fn create<I, O>(
        kind: ElementKind,
        inputs: &[I],
        outputs: &[O],
        backend: SharedBackend,
        options: &ElementOptions,
    ) -> Result<Self>
    where
        I: AsRef<str>,
        O: AsRef<str>,
    {
        kind.validate(inputs.len(), outputs.len())?;

        let element = match kind {
            ElementKind::Aux(style) => Element::Aux(AuxElement::new(
                inputs[0].as_ref(),
                outputs[0].as_ref(),
                style,
                backend,
                options,
            )?),
            ElementKind::MonoToStereo => Element::Stereo(StereoElement::mono_to_stereo(
                inputs[0].as_ref(),
                [outputs[0].as_ref(), outputs[1].as_ref()],
                backend,
                options,
            )?),
            ElementKind::StereoToStereo => Element::Stereo(StereoElement::stereo_to_stereo(
                [inputs[0].as_ref(), inputs[1].as_ref()],
                [outputs[0].as_ref(), outputs[1].as_ref()],
                backend,
                options,
            )?),
        };

        Ok(element)
    }

    /// The identity carried by this element's events
    pub fn id(&self) -> Id {
        match self {
            Element::Aux(element) => element.id(),
            Element::Stereo(element) => element.id(),
        }
    }

    /// The kind of this element
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Aux(element) => element.kind(),
            Element::Stereo(element) => element.kind(),
        }
    }

    /// Describes the routing
    pub fn caption(&self) -> String {
        match self {
            Element::Aux(element) => element.caption(),
            Element::Stereo(element) => element.caption(),
        }
    }

    /// The current volume in dB
    pub fn volume_db(&self) -> f64 {
        match self {
            Element::Aux(element) => element.volume_db(),
            Element::Stereo(element) => element.volume_db(),
        }
    }

    /// The current balance, for elements that have one
    pub fn balance(&self) -> Option<f64> {
        match self {
            Element::Aux(_) => None,
            Element::Stereo(element) => Some(element.balance()),
        }
    }

    /// Set the volume in dB
    pub fn set_volume(&mut self, volume_db: f64) -> Result<()> {
        match self {
            Element::Aux(element) => element.set_volume(volume_db),
            Element::Stereo(element) => element.set_volume(volume_db),
        }
    }

    /// Set the balance
    pub fn set_balance(&mut self, balance: f64) -> Result<()> {
        match self {
            Element::Aux(element) => Err(ElementError::UnsupportedParameter {
                kind: element.kind(),
                parameter: ParameterSlot::Balance,
            }),
            Element::Stereo(element) => element.set_balance(balance),
        }
    }

    /// The current value of a control
    pub fn parameter(&self, slot: ParameterSlot) -> Option<f64> {
        match slot {
            ParameterSlot::Volume => Some(self.volume_db()),
            ParameterSlot::Balance => self.balance(),
        }
    }

    /// Set a control by slot
    pub fn set_parameter(&mut self, slot: ParameterSlot, value: f64) -> Result<()> {
        match slot {
            ParameterSlot::Volume => self.set_volume(value),
            ParameterSlot::Balance => self.set_balance(value),
        }
    }

    /// The range of a control, if this element has it
    pub fn parameter_range(&self, slot: ParameterSlot) -> Option<ParameterRange> {
        match (self, slot) {
            (Element::Aux(element), ParameterSlot::Volume) => {
                Some(*element.decibel_scale().range())
            }
            (Element::Aux(_), ParameterSlot::Balance) => None,
            (Element::Stereo(element), ParameterSlot::Volume) => {
                Some(*element.decibel_scale().range())
            }
            (Element::Stereo(element), ParameterSlot::Balance) => Some(*element.balance_range()),
        }
    }

    /// Apply a controller change to every control assigned to `controller`
    ///
    /// `value` is a 7-bit controller value spread linearly across each
    /// control's range. Returns whether any control was assigned.
    pub fn handle_controller(&mut self, controller: u8, value: u8) -> Result<bool> {
        let slots: Vec<ParameterSlot> = self.midi_assignments().slots_for(controller).collect();

        for slot in &slots {
            let Some(range) = self.parameter_range(*slot) else {
                continue;
            };

            let target = range.from_normalised(normalise_controller_value(value));
            tracing::trace!("controller {controller} = {value} sets {slot} to {target}");

            self.set_parameter(*slot, target)?;
        }

        Ok(!slots.is_empty())
    }

    /// Run `observer` after every change
    pub fn add_observer(&mut self, observer: ElementObserver) {
        match self {
            Element::Aux(element) => element.add_observer(observer),
            Element::Stereo(element) => element.add_observer(observer),
        }
    }

    /// Receive every change on a channel
    pub fn subscribe(&mut self) -> EventReceiver {
        match self {
            Element::Aux(element) => element.subscribe(),
            Element::Stereo(element) => element.subscribe(),
        }
    }

    /// The MIDI controllers driving this element
    pub fn midi_assignments(&self) -> &MidiAssignments {
        match self {
            Element::Aux(element) => element.midi_assignments(),
            Element::Stereo(element) => element.midi_assignments(),
        }
    }

    /// Change the MIDI controllers driving this element
    pub fn midi_assignments_mut(&mut self) -> &mut MidiAssignments {
        match self {
            Element::Aux(element) => element.midi_assignments_mut(),
            Element::Stereo(element) => element.midi_assignments_mut(),
        }
    }
}
