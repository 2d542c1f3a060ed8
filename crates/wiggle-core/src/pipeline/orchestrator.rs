use std::io::Write;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tempfile::NamedTempFile;
use tracing::info;

use crate::align::align_to_reference_with_progress;
use crate::error::{Result, WiggleError};
use crate::frame::Frame;
use crate::io::gif::GifSink;
use crate::io::paths::wiggle_output_path;
use crate::postprocess::{postprocess_frames, scaled_dimensions};
use crate::sequence::{emit, ping_pong, AnimationSink};
use crate::slice::slice_frames;

use super::config::WiggleConfig;
use super::types::{NoOpReporter, PipelineStage, ProgressReporter};

/// Fail early when the sliced frame size cannot survive cropping and
/// scaling, before spending time on alignment.
fn check_frame_size(frame: &Frame, config: &WiggleConfig) -> Result<()> {
    let (w, h) = (frame.width(), frame.height());
    let margin = config.crop_margin;
    if 2 * margin >= w || 2 * margin >= h {
        return Err(WiggleError::InvalidInput(format!(
            "Slices of {w}x{h} are too small for a crop margin of {margin}"
        )));
    }
    scaled_dimensions(w - 2 * margin, h - 2 * margin, config.scale_factor)?;
    Ok(())
}

/// Slice, order, align, crop and scale one source image.
///
/// Returns the final animation frames in playback order.
pub fn process_image_reported(
    image: &DynamicImage,
    config: &WiggleConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<Frame>> {
    config.validate()?;

    reporter.begin_stage(PipelineStage::Slicing, Some(config.slice_count));
    let slices = slice_frames(image, config.slice_count)?;
    reporter.finish_stage();
    if let Some(first) = slices.first() {
        check_frame_size(first, config)?;
    }

    let sequence = ping_pong(slices);
    info!(
        frames = sequence.len(),
        width = sequence[0].width(),
        height = sequence[0].height(),
        "Sliced source image"
    );

    reporter.begin_stage(PipelineStage::Alignment, Some(sequence.len()));
    let aligned = align_to_reference_with_progress(&sequence, |done| reporter.advance(done))?;
    reporter.finish_stage();
    drop(sequence);

    reporter.begin_stage(PipelineStage::PostProcessing, Some(aligned.len()));
    let frames = postprocess_frames(
        &aligned,
        config.crop_margin,
        config.scale_factor,
        config.filter,
    )?;
    reporter.finish_stage();

    Ok(frames)
}

pub fn process_image(image: &DynamicImage, config: &WiggleConfig) -> Result<Vec<Frame>> {
    process_image_reported(image, config, &NoOpReporter)
}

/// Run the pipeline on one image and hand the result to `sink`.
pub fn render_to_sink(
    image: &DynamicImage,
    config: &WiggleConfig,
    sink: &mut dyn AnimationSink,
    reporter: &dyn ProgressReporter,
) -> Result<()> {
    let frames = process_image_reported(image, config, reporter)?;

    reporter.begin_stage(PipelineStage::Encoding, Some(frames.len()));
    emit(&frames, &config.animation_settings(), sink)?;
    reporter.finish_stage();
    Ok(())
}

/// Decode an encoded image, run the pipeline, and return GIF bytes.
pub fn process_bytes_reported(
    input: &[u8],
    config: &WiggleConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<u8>> {
    reporter.begin_stage(PipelineStage::Decoding, None);
    let image = image::load_from_memory(input).map_err(WiggleError::Decode)?;
    reporter.finish_stage();

    let mut sink = GifSink::new(Vec::new());
    render_to_sink(&image, config, &mut sink, reporter)?;
    Ok(sink.into_inner())
}

pub fn process_bytes(input: &[u8], config: &WiggleConfig) -> Result<Vec<u8>> {
    process_bytes_reported(input, config, &NoOpReporter)
}

/// Turn one image file into `<stem>_wiggle.gif` next to it.
///
/// The animation is written to a temporary file in the destination
/// directory and renamed into place only once complete.
pub fn process_file_reported(
    input: &Path,
    config: &WiggleConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PathBuf> {
    if !input.exists() {
        return Err(WiggleError::MissingFile(input.to_path_buf()));
    }

    let bytes = std::fs::read(input)?;
    let output = wiggle_output_path(input);
    info!(input = %input.display(), output = %output.display(), "Processing image");

    let gif = process_bytes_reported(&bytes, config, reporter)?;

    reporter.begin_stage(PipelineStage::Writing, None);
    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(&gif)?;
    tmp.flush()?;
    tmp.persist(&output).map_err(|e| WiggleError::Io(e.error))?;
    reporter.finish_stage();

    info!(output = %output.display(), bytes = gif.len(), "Wrote wiggle animation");
    Ok(output)
}

pub fn process_file(input: &Path, config: &WiggleConfig) -> Result<PathBuf> {
    process_file_reported(input, config, &NoOpReporter)
}
