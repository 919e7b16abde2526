use std::io::Write;

use ndarray::Array3;

use crate::band_pipeline::common::error::Result;

pub trait StackWriter {
    /// Write one assembled `(scene, row, col)` stack to the output.
    fn write_stack(&self, stack: &Array3<f32>, output: &mut dyn Write) -> Result<()>;
}
