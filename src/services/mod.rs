mod downsample_pipeline;

pub use downsample_pipeline::{DownsampleJob, DownsamplePipeline, DownsampleReport};
