use std::collections::HashMap;

use crate::image_pipeline::common::error::{ProcessingError, Result};
use crate::image_pipeline::filters::{
    CropFilter, EdgeDetectionFilter, Filter, GaussianBlurFilter, GrayscaleFilter, NegativeFilter,
    SharpenFilter,
};

/// Filters keyed by their command-line alias. Built once and shared by
/// reference with whatever drives the pipeline.
pub struct FilterRegistry {
    filters: HashMap<&'static str, Box<dyn Filter>>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterRegistry {
    /// Registry holding every built-in filter.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CropFilter));
        registry.register(Box::new(GrayscaleFilter));
        registry.register(Box::new(NegativeFilter));
        registry.register(Box::new(SharpenFilter));
        registry.register(Box::new(EdgeDetectionFilter));
        registry.register(Box::new(GaussianBlurFilter));
        registry
    }

    pub fn empty() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Adds a filter, replacing any filter previously registered under the
    /// same alias.
    pub fn register(&mut self, filter: Box<dyn Filter>) {
        self.filters.insert(filter.alias(), filter);
    }

    pub fn resolve(&self, alias: &str) -> Result<&dyn Filter> {
        self.filters
            .get(alias)
            .map(Box::as_ref)
            .ok_or_else(|| ProcessingError::InvalidArguments(format!("unknown filter {}", alias)))
    }

    pub fn aliases(&self) -> Vec<&'static str> {
        let mut aliases: Vec<_> = self.filters.keys().copied().collect();
        aliases.sort_unstable();
        aliases
    }
}
