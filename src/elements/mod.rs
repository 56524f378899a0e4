mod aux_element;
mod element;
mod element_core;
mod element_event;
mod element_kind;
mod element_options;
mod midi_assignments;
mod pan_law;
mod stereo_element;

pub use aux_element::AuxElement;
pub use element::Element;
pub use element_event::{ElementEvent, ElementObserver, EventReceiver, NotifierStatus};
pub use element_kind::{ControlStyle, ElementKind};
pub use element_options::ElementOptions;
pub use midi_assignments::{normalise_controller_value, MidiAssignments, MAX_CONTROLLER};
pub use pan_law::{
    balance_range, distribute, reconstruct, StereoLevels, MAX_BALANCE, MIN_BALANCE,
};
pub use stereo_element::StereoElement;
