//! Band stack assembly module
//!
//! Stacks decoded bands from a time series of products into a 3-D array
//! and writes it in NumPy `.npy` form for downstream numeric toolchains.

mod npy_writer;
pub mod types;
mod writer;

pub use npy_writer::NpyStackWriter;
pub use types::{StackConfig, StackConfigBuilder};
pub use writer::StackWriter;
