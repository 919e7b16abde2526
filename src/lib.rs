pub mod band_pipeline;
pub mod logger;
