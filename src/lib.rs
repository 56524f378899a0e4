#![warn(missing_docs)]

//! gainstage provides the control elements of a channel mixing matrix
//!
//! Each element binds one or two input to output routes of a matrix and
//! turns user-facing controls into the linear amplitudes the matrix stores:
//! - A single route gets a volume in dB
//! - One input feeding a left and right output gets a volume and a pan
//! - A stereo input feeding a stereo output gets a volume and a cross-fade
//!
//! Elements read their initial values from the matrix, write both routes on
//! every change, and report each change to observers. Controls can also be
//! driven from MIDI continuous controllers.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use gainstage::{Element, ElementKind, ElementOptions, MatrixBackend};
//!
//! # fn main() -> gainstage::Result<()> {
//! let backend = Rc::new(MatrixBackend::new(["mic"], ["main_l", "main_r"]));
//!
//! let mut element = Element::create(
//!     ElementKind::MonoToStereo,
//!     &["mic"],
//!     &["main_l", "main_r"],
//!     backend.clone(),
//!     &ElementOptions::default(),
//! )?;
//!
//! let changes = element.subscribe();
//!
//! element.set_volume(-6.0)?;
//! element.set_balance(0.25)?;
//!
//! // `changes` now holds a volume event and a balance event
//! # let _ = changes;
//! # Ok(())
//! # }
//! ```
//!
//! Elements hold their backend in an `Rc` and are not `Send`. Use one element
//! from one thread, or put it behind a single lock that covers both of its
//! route writes.

mod backend;
mod elements;
mod error;
mod parameter;
mod utility;

pub use backend::ChannelPair;
pub use backend::MatrixBackend;
pub use backend::MixingBackend;
pub use backend::SharedBackend;

pub use elements::balance_range;
pub use elements::distribute;
pub use elements::normalise_controller_value;
pub use elements::reconstruct;
pub use elements::AuxElement;
pub use elements::ControlStyle;
pub use elements::Element;
pub use elements::ElementEvent;
pub use elements::ElementKind;
pub use elements::ElementObserver;
pub use elements::ElementOptions;
pub use elements::EventReceiver;
pub use elements::MidiAssignments;
pub use elements::NotifierStatus;
pub use elements::StereoElement;
pub use elements::StereoLevels;
pub use elements::{MAX_BALANCE, MAX_CONTROLLER, MIN_BALANCE};

pub use error::{BackendError, ElementError, Result};

pub use parameter::DecibelScale;
pub use parameter::ParameterRange;
pub use parameter::ParameterSlot;
pub use parameter::{DEFAULT_MAXIMUM_DB, DEFAULT_MINIMUM_DB};

pub use utility::Id;
pub use utility::Level;
