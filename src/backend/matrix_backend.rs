use std::cell::RefCell;

use crate::{BackendError, Level, MixingBackend};

/// An in-memory mixing matrix addressed by channel name
///
/// Every route starts silent. Useful for hosts that apply the matrix
/// themselves, and for exercising elements without an audio graph.
pub struct MatrixBackend {
    inputs: Vec<String>,
    outputs: Vec<String>,
    matrix: RefCell<Vec<Level>>,
}

impl MatrixBackend {
    /// Create a matrix for the named inputs and outputs
    pub fn new<I, O>(inputs: I, outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let inputs: Vec<String> = inputs.into_iter().map(Into::into).collect();
        let outputs: Vec<String> = outputs.into_iter().map(Into::into).collect();
        let matrix = vec![Level::zero(); inputs.len() * outputs.len()];

        Self {
            inputs,
            outputs,
            matrix: RefCell::new(matrix),
        }
    }

    /// The input channel names, in order
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// The output channel names, in order
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    fn get_index(&self, input: &str, output: &str) -> Result<usize, BackendError> {
        let input_channel = self.inputs.iter().position(|name| name == input);
        let output_channel = self.outputs.iter().position(|name| name == output);

        match (input_channel, output_channel) {
            (Some(input_channel), Some(output_channel)) => {
                Ok(output_channel * self.inputs.len() + input_channel)
            }
            _ => Err(BackendError::InvalidChannelPair {
                input: input.to_string(),
                output: output.to_string(),
            }),
        }
    }
}

impl MixingBackend for MatrixBackend {
    fn get_volume(&self, input: &str, output: &str) -> Result<Level, BackendError> {
        let index = self.get_index(input, output)?;
        Ok(self.matrix.borrow()[index])
    }

    fn set_volume(&self, input: &str, output: &str, level: Level) -> Result<(), BackendError> {
        let index = self.get_index(input, output)?;
        self.matrix.borrow_mut()[index] = level;
        Ok(())
    }
}
