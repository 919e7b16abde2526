//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning decoded bands into
//! downstream artifacts: npy time-series stacks and quicklook TIFFs.

mod band_to_quicklook;
mod band_to_stack;

pub use band_to_quicklook::BandQuicklookPipeline;
pub use band_to_stack::BandStackPipeline;
