use std::path::PathBuf;
use std::time::{Duration, Instant};

use equirect_resample::{Downsampler, ResampleStrategy};

use crate::codec::{load_ppm, save_ppm};
use crate::error::PanoramaError;
use crate::models::{DimensionSpec, PanoramaConfig};

/// One input file reduced to one output file
#[derive(Debug, Clone)]
pub struct DownsampleJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub size: DimensionSpec,
}

/// Summary of a finished job
#[derive(Debug, Clone)]
pub struct DownsampleReport {
    pub input_size: (usize, usize),
    pub output_size: (usize, usize),
    pub strategy: ResampleStrategy,
    pub elapsed: Duration,
}

/// Pipeline that orchestrates load → downsample → save
pub struct DownsamplePipeline {
    downsampler: Downsampler,
}

impl DownsamplePipeline {
    pub fn new(downsampler: Downsampler) -> Self {
        Self { downsampler }
    }

    pub fn from_config(config: &PanoramaConfig) -> Self {
        Self::new(Downsampler::new(config.strategy).max_stretch(config.max_stretch))
    }

    /// Run a job. Nothing is written unless the whole image was computed.
    pub fn run(&self, job: &DownsampleJob) -> Result<DownsampleReport, PanoramaError> {
        let start = Instant::now();

        let input = load_ppm(&job.input)?;
        tracing::debug!(
            input = %job.input.display(),
            width = input.width(),
            height = input.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Input loaded"
        );

        let resample_start = Instant::now();
        let output = self
            .downsampler
            .downsample(
                &input,
                job.output.display().to_string(),
                job.size.width,
                job.size.height,
            )
            .map_err(|source| PanoramaError::Geometry {
                name: input.name().to_string(),
                source,
            })?;
        tracing::debug!(
            strategy = %self.downsampler.strategy(),
            size = %job.size,
            elapsed_ms = resample_start.elapsed().as_millis() as u64,
            "Resampled"
        );

        let save_start = Instant::now();
        save_ppm(&output, &job.output)?;
        tracing::debug!(
            output = %job.output.display(),
            elapsed_ms = save_start.elapsed().as_millis() as u64,
            "Output saved"
        );

        let report = DownsampleReport {
            input_size: (input.width(), input.height()),
            output_size: (output.width(), output.height()),
            strategy: self.downsampler.strategy(),
            elapsed: start.elapsed(),
        };
        tracing::info!(
            input = %job.input.display(),
            output = %job.output.display(),
            from = %DimensionSpec::new(input.width(), input.height()),
            to = %job.size,
            strategy = %report.strategy,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Panorama downsampled"
        );
        Ok(report)
    }

    pub fn downsampler(&self) -> &Downsampler {
        &self.downsampler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PpmError;
    use std::path::Path;
    use equirect_resample::{Image, LinearRgb};

    fn job(dir: &Path, size: DimensionSpec) -> DownsampleJob {
        DownsampleJob {
            input: dir.join("in.ppm"),
            output: dir.join("out.ppm"),
            size,
        }
    }

    #[test]
    fn test_run_writes_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(dir.path(), DimensionSpec::new(4, 2));
        save_ppm(
            &Image::filled("in", 16, 8, LinearRgb::new(0.2, 0.4, 0.6)),
            &job.input,
        )
        .unwrap();

        let report = DownsamplePipeline::new(Downsampler::default())
            .run(&job)
            .unwrap();

        assert_eq!(report.input_size, (16, 8));
        assert_eq!(report.output_size, (4, 2));
        assert_eq!(report.strategy, ResampleStrategy::Geodesic);
        let written = load_ppm(&job.output).unwrap();
        assert_eq!((written.width(), written.height()), (4, 2));
    }

    #[test]
    fn test_upsampling_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(dir.path(), DimensionSpec::new(32, 16));
        save_ppm(&Image::new("in", 16, 8), &job.input).unwrap();

        let err = DownsamplePipeline::new(Downsampler::default())
            .run(&job)
            .unwrap_err();

        assert!(matches!(err, PanoramaError::Geometry { .. }), "{err}");
        assert!(!job.output.exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(dir.path(), DimensionSpec::new(1, 1));

        let err = DownsamplePipeline::new(Downsampler::default())
            .run(&job)
            .unwrap_err();

        assert!(
            matches!(err, PanoramaError::Ppm(PpmError::Open { .. })),
            "{err}"
        );
        assert!(!job.output.exists());
    }

    #[test]
    fn test_from_config() {
        let config = PanoramaConfig {
            strategy: ResampleStrategy::Nearest,
            max_stretch: 2.0,
            ..Default::default()
        };
        let pipeline = DownsamplePipeline::from_config(&config);
        assert_eq!(pipeline.downsampler().strategy(), ResampleStrategy::Nearest);
        assert_eq!(pipeline.downsampler().resample_options().max_stretch, 2.0);
    }
}
