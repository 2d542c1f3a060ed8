use image::imageops;
use ndarray::s;

use crate::error::{Result, WiggleError};
use crate::frame::Frame;
use crate::pipeline::config::ResampleFilter;

/// Remove `margin` pixels from each of the four edges.
///
/// The result spans rows `[margin, h - margin)` and columns
/// `[margin, w - margin)`.
pub fn crop_frame(frame: &Frame, margin: usize) -> Result<Frame> {
    let (w, h) = (frame.width(), frame.height());
    if 2 * margin >= w || 2 * margin >= h {
        return Err(WiggleError::InvalidInput(format!(
            "Crop margin {margin} leaves no pixels in a {w}x{h} frame"
        )));
    }

    Ok(Frame {
        data: frame
            .data
            .slice(s![margin..h - margin, margin..w - margin, ..])
            .to_owned(),
    })
}

/// Target size for scaling `(w, h)` by `factor`, truncated toward zero.
pub fn scaled_dimensions(w: usize, h: usize, factor: f64) -> Result<(u32, u32)> {
    if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
        return Err(WiggleError::InvalidInput(format!(
            "Scale factor {factor} must be in (0, 1]"
        )));
    }

    let new_w = (w as f64 * factor).floor() as u32;
    let new_h = (h as f64 * factor).floor() as u32;
    if new_w == 0 || new_h == 0 {
        return Err(WiggleError::InvalidInput(format!(
            "Scaling {w}x{h} by {factor} produces an empty frame"
        )));
    }

    Ok((new_w, new_h))
}

/// Resize a frame by `factor` with the given resampling filter.
pub fn scale_frame(frame: &Frame, factor: f64, filter: ResampleFilter) -> Result<Frame> {
    let (new_w, new_h) = scaled_dimensions(frame.width(), frame.height(), factor)?;
    if new_w as usize == frame.width() && new_h as usize == frame.height() {
        return Ok(frame.clone());
    }

    let img = frame.to_rgb_image()?;
    let resized = imageops::resize(&img, new_w, new_h, filter.into());
    Frame::from_rgb_image(&resized)
}

/// Crop then scale every frame with the same parameters.
pub fn postprocess_frames(
    frames: &[Frame],
    margin: usize,
    factor: f64,
    filter: ResampleFilter,
) -> Result<Vec<Frame>> {
    frames
        .iter()
        .map(|frame| {
            let cropped = crop_frame(frame, margin)?;
            scale_frame(&cropped, factor, filter)
        })
        .collect()
}
