use std::io::Write;

use ndarray::Array3;
use ndarray_npy::WriteNpyExt;
use tracing::debug;

use crate::band_pipeline::common::error::{BandError, Result};
use crate::band_pipeline::stack::writer::StackWriter;

/// Writes stacks as NumPy `.npy` files, float32, C order.
pub struct NpyStackWriter;

impl StackWriter for NpyStackWriter {
    fn write_stack(&self, stack: &Array3<f32>, output: &mut dyn Write) -> Result<()> {
        let shape = stack.shape();
        debug!(
            "Encoding npy stack: {} scenes of {}x{}",
            shape[0], shape[1], shape[2]
        );

        stack
            .write_npy(&mut *output)
            .map_err(|e| BandError::EncodeError(e.to_string()))?;

        debug!("npy encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_npy_magic_and_payload() {
        let stack = Array3::<f32>::zeros((2, 3, 4));
        let mut output = Cursor::new(Vec::new());
        NpyStackWriter.write_stack(&stack, &mut output).unwrap();

        let bytes = output.into_inner();
        assert_eq!(&bytes[..6], b"\x93NUMPY");
        // header + 24 little-endian f32 zeros
        assert!(bytes.len() > 24 * 4);
    }
}
