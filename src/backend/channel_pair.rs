use std::fmt;

/// An input to output route, addressing one entry of the mixing matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelPair {
    input: String,
    output: String,
}

impl ChannelPair {
    /// Create a route from `input` to `output`
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// The input channel name
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The output channel name
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Check if the route connects a channel to its namesake
    pub fn is_direct(&self) -> bool {
        self.input == self.output
    }
}

impl fmt::Display for ChannelPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.input, self.output)
    }
}
