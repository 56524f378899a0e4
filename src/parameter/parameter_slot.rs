use std::fmt;

/// A controllable value of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterSlot {
    /// Overall volume, in dB
    Volume,

    /// Balance or cross-fade between the two routes, in `[-1, 1]`
    Balance,
}

impl ParameterSlot {
    /// The name carried by change events
    pub fn name(&self) -> &'static str {
        match self {
            ParameterSlot::Volume => "volume",
            ParameterSlot::Balance => "balance",
        }
    }
}

impl fmt::Display for ParameterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
