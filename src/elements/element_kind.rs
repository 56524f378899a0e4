use std::{fmt, str::FromStr};

use crate::{ElementError, ParameterSlot, Result};

/// How a single-channel element should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlStyle {
    /// A rotary control
    Knob,

    /// A linear fader
    Slider,
}

/// The kinds of element that can be placed on a mixing matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// One input to one output, volume only
    Aux(ControlStyle),

    /// One input to a left and right output, volume and pan
    MonoToStereo,

    /// A left and right input to the matching outputs, volume and
    /// cross-fade
    StereoToStereo,
}

const ALL_KINDS: [ElementKind; 4] = [
    ElementKind::Aux(ControlStyle::Knob),
    ElementKind::Aux(ControlStyle::Slider),
    ElementKind::MonoToStereo,
    ElementKind::StereoToStereo,
];

const AUX_PARAMETERS: [(ParameterSlot, &str); 1] = [(ParameterSlot::Volume, "Gain")];

const MONO_TO_STEREO_PARAMETERS: [(ParameterSlot, &str); 2] = [
    (ParameterSlot::Volume, "Gain"),
    (ParameterSlot::Balance, "Pan"),
];

const STEREO_TO_STEREO_PARAMETERS: [(ParameterSlot, &str); 2] = [
    (ParameterSlot::Volume, "Gain"),
    (ParameterSlot::Balance, "Cross-fade"),
];

impl ElementKind {
    /// Every element kind, in order of preference
    pub fn all() -> &'static [ElementKind] {
        &ALL_KINDS
    }

    /// Stable name, accepted by [ElementKind::from_str]
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Aux(ControlStyle::Knob) => "aux-knob",
            ElementKind::Aux(ControlStyle::Slider) => "aux-slider",
            ElementKind::MonoToStereo => "mono-to-stereo",
            ElementKind::StereoToStereo => "stereo-to-stereo",
        }
    }

    /// The number of inputs and outputs this kind controls
    pub fn channel_counts(&self) -> (usize, usize) {
        match self {
            ElementKind::Aux(_) => (1, 1),
            ElementKind::MonoToStereo => (1, 2),
            ElementKind::StereoToStereo => (2, 2),
        }
    }

    /// Check if this kind can control the given channels
    pub fn supports(&self, input_count: usize, output_count: usize) -> bool {
        self.channel_counts() == (input_count, output_count)
    }

    /// Fail unless this kind can control the given channels
    pub fn validate(&self, input_count: usize, output_count: usize) -> Result<()> {
        if self.supports(input_count, output_count) {
            return Ok(());
        }

        Err(ElementError::UnsupportedChannelCount {
            kind: *self,
            input_count,
            output_count,
        })
    }

    /// The kinds that can control a selection of channels
    pub fn candidates(input_count: usize, output_count: usize) -> Vec<ElementKind> {
        ALL_KINDS
            .iter()
            .copied()
            .filter(|kind| kind.supports(input_count, output_count))
            .collect()
    }

    /// The other kinds that could take this element's place
    pub fn replacements(&self) -> Vec<ElementKind> {
        let (input_count, output_count) = self.channel_counts();

        Self::candidates(input_count, output_count)
            .into_iter()
            .filter(|kind| kind != self)
            .collect()
    }

    /// The controls of this kind, with the label shown when assigning them
    pub fn parameters(&self) -> &'static [(ParameterSlot, &'static str)] {
        match self {
            ElementKind::Aux(_) => &AUX_PARAMETERS,
            ElementKind::MonoToStereo => &MONO_TO_STEREO_PARAMETERS,
            ElementKind::StereoToStereo => &STEREO_TO_STEREO_PARAMETERS,
        }
    }

    /// Check if this kind has a control for `slot`
    pub fn has_parameter(&self, slot: ParameterSlot) -> bool {
        self.parameters()
            .iter()
            .any(|(parameter, _)| *parameter == slot)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = ElementError;

    fn from_str(name: &str) -> Result<Self> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ElementError::UnknownKind(name.to_string()))
    }
}
