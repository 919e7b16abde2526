//! ENVI band reading module
//!
//! Decodes one band of a Sentinel-1 product from its ENVI sidecar pair:
//! a `.hdr` text header describing geometry and encoding, and a raw
//! headerless `.img` pixel payload.

pub mod decoder;
pub mod header;
mod reader;
pub mod types;

pub use header::parse_header;
pub use reader::{BandReader, EnviBandReader};
pub use types::{BandHeader, ByteOrder, DecodedBand, ElementType};
