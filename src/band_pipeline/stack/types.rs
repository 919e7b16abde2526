//! Stack assembly configuration types

/// Configuration for assembling band stacks from a product time series
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Band names to assemble, one output stack per name
    pub band_names: Vec<String>,
    /// Optional square crop from the top-left corner; scenes smaller than
    /// the tile are skipped
    pub tile_size: Option<usize>,
    /// Whether to validate band dimensions before stacking
    pub validate_dimensions: bool,
    /// Upper bound on either dimension when validation is enabled
    pub max_dimension: Option<usize>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            band_names: vec!["Intensity_VV".to_string(), "Intensity_VH".to_string()],
            tile_size: None,
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl StackConfig {
    pub fn builder() -> StackConfigBuilder {
        StackConfigBuilder::default()
    }
}

/// Builder for StackConfig
#[derive(Default)]
pub struct StackConfigBuilder {
    band_names: Option<Vec<String>>,
    tile_size: Option<Option<usize>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl StackConfigBuilder {
    pub fn band_names(mut self, band_names: Vec<String>) -> Self {
        self.band_names = Some(band_names);
        self
    }

    pub fn tile_size(mut self, tile_size: Option<usize>) -> Self {
        self.tile_size = Some(tile_size);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> StackConfig {
        let default = StackConfig::default();
        StackConfig {
            band_names: self.band_names.unwrap_or(default.band_names),
            tile_size: self.tile_size.unwrap_or(default.tile_size),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
