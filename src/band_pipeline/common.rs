//! Common utilities module
//!
//! This module contains shared utilities used across the band pipeline.

pub mod error;

pub use error::{BandError, Result};
