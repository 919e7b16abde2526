//! Quicklook configuration types

/// TIFF compression methods
#[derive(Debug, Clone, Copy)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression (good speed/size balance)
    Deflate,
}

/// Configuration for quicklook rendering
#[derive(Debug, Clone)]
pub struct QuicklookConfig {
    /// Clip intensities to mean +/- n standard deviations before scaling
    pub sigma: Option<u32>,
    /// Apply log10 before normalization; zero pixels stay at zero
    pub log_scale: bool,
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to validate band dimensions before rendering
    pub validate_dimensions: bool,
}

impl Default for QuicklookConfig {
    fn default() -> Self {
        Self {
            sigma: None,
            log_scale: false,
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
        }
    }
}

impl QuicklookConfig {
    pub fn builder() -> QuicklookConfigBuilder {
        QuicklookConfigBuilder::default()
    }
}

/// Builder for QuicklookConfig
#[derive(Default)]
pub struct QuicklookConfigBuilder {
    sigma: Option<Option<u32>>,
    log_scale: Option<bool>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
}

impl QuicklookConfigBuilder {
    pub fn sigma(mut self, sigma: Option<u32>) -> Self {
        self.sigma = Some(sigma);
        self
    }

    pub fn log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = Some(log_scale);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> QuicklookConfig {
        let default = QuicklookConfig::default();
        QuicklookConfig {
            sigma: self.sigma.unwrap_or(default.sigma),
            log_scale: self.log_scale.unwrap_or(default.log_scale),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
