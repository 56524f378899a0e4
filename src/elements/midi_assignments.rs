use std::collections::BTreeMap;

use crate::{ElementError, ElementKind, ParameterSlot, Result};

/// The highest 7-bit controller number or value
pub const MAX_CONTROLLER: u8 = 127;

/// Which MIDI continuous controller drives each control of an element
#[derive(Debug, Clone, PartialEq)]
pub struct MidiAssignments {
    kind: ElementKind,
    controllers: BTreeMap<ParameterSlot, u8>,
}

impl MidiAssignments {
    /// No controls assigned
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            controllers: BTreeMap::new(),
        }
    }

    /// Drive `slot` from `controller`, replacing any earlier assignment
    pub fn assign(&mut self, slot: ParameterSlot, controller: u8) -> Result<()> {
        if controller > MAX_CONTROLLER {
            return Err(ElementError::InvalidController(controller));
        }

        if !self.kind.has_parameter(slot) {
            return Err(ElementError::UnsupportedParameter {
                kind: self.kind,
                parameter: slot,
            });
        }

        self.controllers.insert(slot, controller);
        Ok(())
    }

    /// Remove the assignment of `slot`, returning the controller it had
    pub fn unassign(&mut self, slot: ParameterSlot) -> Option<u8> {
        self.controllers.remove(&slot)
    }

    /// The controller assigned to `slot`
    pub fn controller(&self, slot: ParameterSlot) -> Option<u8> {
        self.controllers.get(&slot).copied()
    }

    /// The controls driven by `controller`
    pub fn slots_for(&self, controller: u8) -> impl Iterator<Item = ParameterSlot> + '_ {
        self.controllers
            .iter()
            .filter(move |(_, assigned)| **assigned == controller)
            .map(|(slot, _)| *slot)
    }

    /// All assignments, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterSlot, u8)> + '_ {
        self.controllers
            .iter()
            .map(|(slot, controller)| (*slot, *controller))
    }
}

/// Map a 7-bit controller value onto `[0, 1]`
pub fn normalise_controller_value(value: u8) -> f64 {
    f64::from(value.min(MAX_CONTROLLER)) / f64::from(MAX_CONTROLLER)
}
