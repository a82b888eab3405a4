use std::io::Write;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    arguments::FilterInvocation,
    bmp::{
        BmpReader, BmpWriter, RasterReader, RasterWriter, create_output_file, read_input_file,
        with_input_path,
    },
    common::error::{ProcessingError, Result},
    config::PipelineConfig,
    filters::FilterRegistry,
    raster::Raster,
    timing::{PipelineTimings, Timer},
};


const BMP_EXTENSION: &str = "bmp";

/// Decodes an image, threads it through the requested filters in order and
/// encodes the result.
pub struct ImagePipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    registry: FilterRegistry,
    config: PipelineConfig,
}

impl ImagePipeline<BmpReader, BmpWriter> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: BmpReader,
            writer: BmpWriter,
            registry: FilterRegistry::new(),
            config,
        }
    }
}

impl<R: RasterReader, W: RasterWriter> ImagePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, registry: FilterRegistry, config: PipelineConfig) -> Self {
        Self {
            reader,
            writer,
            registry,
            config,
        }
    }

    fn validate_dimensions(&self, raster: &Raster) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let (height, width) = raster.shape();
        if width == 0 || height == 0 {
            return Err(ProcessingError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ProcessingError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn validate_extension(&self, path: &Path) -> Result<()> {
        if !self.config.require_bmp_extension {
            return Ok(());
        }

        let is_bmp = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(BMP_EXTENSION));
        if !is_bmp {
            return Err(ProcessingError::UnsupportedFormat(format!(
                "not .bmp: {}",
                path.display()
            )));
        }
        Ok(())
    }

    /// Resolves every alias before running anything, so an unknown filter
    /// late in the chain fails before any work is done.
    fn check_filters(&self, filters: &[FilterInvocation]) -> Result<()> {
        for invocation in filters {
            self.registry.resolve(&invocation.alias)?;
        }
        Ok(())
    }

    /// Applies `filters` to `raster` in order, recording one step per filter.
    pub fn apply_filters(
        &self,
        raster: &mut Raster,
        filters: &[FilterInvocation],
        timings: &mut PipelineTimings,
    ) -> Result<()> {
        for invocation in filters {
            let filter = self.registry.resolve(&invocation.alias)?;
            let _span = tracing::info_span!("filter", alias = %invocation.alias).entered();

            let timer = Timer::start(invocation.alias.as_str());
            filter.apply(raster, &invocation.parameters)?;
            timer.stop_into(timings);

            debug!(
                "{} applied, image is now {}x{}",
                filter.name(),
                raster.width(),
                raster.height()
            );
        }
        Ok(())
    }

    pub fn process(
        &self,
        input_data: &[u8],
        filters: &[FilterInvocation],
        output: &mut dyn Write,
    ) -> Result<()> {
        self.process_with_timings(input_data, filters, output)
            .map(|_| ())
    }

    #[instrument(skip_all, fields(input_size = input_data.len(), filters = filters.len()))]
    pub fn process_with_timings(
        &self,
        input_data: &[u8],
        filters: &[FilterInvocation],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        self.check_filters(filters)?;

        let timer = Timer::start("decode");
        let mut raster = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_raster(input_data)?
        };
        timer.stop_into(&mut timings);

        self.validate_dimensions(&raster)?;
        info!(
            width = raster.width(),
            height = raster.height(),
            "Image decoded"
        );

        self.apply_filters(&mut raster, filters, &mut timings)?;

        let timer = Timer::start("encode");
        {
            let _span = tracing::info_span!("encode").entered();
            self.writer.write_raster(&raster, output)?;
        }
        timer.stop_into(&mut timings);

        info!(
            width = raster.width(),
            height = raster.height(),
            "Processing complete"
        );
        Ok(timings)
    }

    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        filters: &[FilterInvocation],
    ) -> Result<()> {
        self.process_file_with_timings(input_path, output_path, filters)
            .map(|_| ())
    }

    /// Reads `input_path`, processes it and writes `output_path`. The output
    /// file is only created once decoding and filtering have succeeded.
    #[instrument(skip_all)]
    pub fn process_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        filters: &[FilterInvocation],
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Processing file"
        );

        self.validate_extension(input_path)?;
        self.validate_extension(output_path)?;

        let mut timings = PipelineTimings::new();

        let timer = Timer::start("read_input");
        let input_data = read_input_file(input_path)?;
        timer.stop_into(&mut timings);

        let mut encoded = Vec::new();
        let processing = self
            .process_with_timings(&input_data, filters, &mut encoded)
            .map_err(|e| with_input_path(e, input_path))?;
        for step in processing.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        let timer = Timer::start("write_output");
        let mut output_file = create_output_file(output_path)?;
        output_file.write_all(&encoded)?;
        output_file.flush()?;
        timer.stop_into(&mut timings);

        Ok(timings)
    }

    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
