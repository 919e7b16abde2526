//! SAR band processing pipeline module
//!
//! This module provides a structured approach to Sentinel-1 band handling,
//! with separate modules for ENVI band decoding, npy stack assembly,
//! quicklook export, and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod envi;
pub mod quicklook;
pub mod stack;

pub use common::{BandError, Result};

pub use envi::{BandHeader, BandReader, ByteOrder, DecodedBand, ElementType, EnviBandReader};

pub use stack::{NpyStackWriter, StackConfig, StackConfigBuilder, StackWriter};

pub use quicklook::{
    GrayTiffWriter, QuicklookConfig, QuicklookConfigBuilder, QuicklookWriter, TiffCompression,
};

pub use conversions::{BandQuicklookPipeline, BandStackPipeline};
