pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{
    process_bytes, process_bytes_reported, process_file, process_file_reported, process_image,
    process_image_reported, render_to_sink,
};
pub use types::{PipelineStage, ProgressReporter};
