//! Pipeline configuration types

/// Configuration for a decode → filter → encode run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Whether to reject images with a zero dimension or one above `max_dimension`
    pub validate_dimensions: bool,
    /// Upper bound for width and height when validation is enabled
    pub max_dimension: Option<usize>,
    /// Whether input and output paths must carry the `.bmp` extension
    pub require_bmp_extension: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: None,
            require_bmp_extension: true,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    require_bmp_extension: Option<bool>,
}

impl PipelineConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max_dimension: Option<usize>) -> Self {
        self.max_dimension = Some(max_dimension);
        self
    }

    pub fn require_bmp_extension(mut self, require: bool) -> Self {
        self.require_bmp_extension = Some(require);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            require_bmp_extension: self
                .require_bmp_extension
                .unwrap_or(default.require_bmp_extension),
        }
    }
}
