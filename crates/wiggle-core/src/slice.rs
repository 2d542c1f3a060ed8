use image::DynamicImage;
use ndarray::s;
use tracing::debug;

use crate::error::{Result, WiggleError};
use crate::frame::Frame;

/// Cut an image into `count` equal-width vertical bands.
///
/// Every band is `width / count` columns wide and spans the full height.
/// Leftover columns at the right edge (when the width is not a multiple of
/// `count`) are dropped so all frames share the same dimensions.
pub fn slice_frames(image: &DynamicImage, count: usize) -> Result<Vec<Frame>> {
    let rgb = image.to_rgb8();
    let full = Frame::from_rgb_image(&rgb)?;
    slice_frame(&full, count)
}

/// Cut an already-decoded frame into `count` equal-width vertical bands.
pub fn slice_frame(frame: &Frame, count: usize) -> Result<Vec<Frame>> {
    if count == 0 {
        return Err(WiggleError::InvalidInput(
            "Slice count must be at least 1".into(),
        ));
    }

    let (w, h) = (frame.width(), frame.height());
    if w < count || h == 0 {
        return Err(WiggleError::InvalidInput(format!(
            "Image {w}x{h} is too small to slice into {count} frames"
        )));
    }

    let band = w / count;
    debug!(
        width = w,
        height = h,
        band,
        dropped = w - band * count,
        "Slicing image"
    );

    let frames = (0..count)
        .map(|i| {
            let x0 = i * band;
            Frame {
                data: frame.data.slice(s![.., x0..x0 + band, ..]).to_owned(),
            }
        })
        .collect();

    Ok(frames)
}
