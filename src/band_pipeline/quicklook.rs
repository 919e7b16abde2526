//! Quicklook export module
//!
//! Renders a decoded band as a grayscale TIFF for visual inspection, with
//! the usual SAR display transforms (log scaling, n-sigma clipping).

mod gray_tiff_writer;
pub mod types;
mod writer;

pub use gray_tiff_writer::GrayTiffWriter;
pub use types::{QuicklookConfig, QuicklookConfigBuilder, TiffCompression};
pub use writer::QuicklookWriter;
