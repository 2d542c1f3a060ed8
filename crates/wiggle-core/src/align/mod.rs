pub mod phase_correlation;
mod roll;

use tracing::debug;

use crate::error::{Result, WiggleError};
use crate::frame::{Frame, ShiftVector};

pub use phase_correlation::{estimate_shift, estimate_shift_array};
pub use roll::roll_frame;

/// Align every frame to the first one.
///
/// The first frame is passed through unchanged. Each later frame is
/// registered against it independently and rolled by the estimated shift.
/// Output order matches input order.
pub fn align_to_reference(frames: &[Frame]) -> Result<Vec<Frame>> {
    align_to_reference_with_progress(frames, |_| {})
}

/// Like [`align_to_reference`], calling `on_progress` with the number of
/// frames completed after each one.
pub fn align_to_reference_with_progress(
    frames: &[Frame],
    mut on_progress: impl FnMut(usize),
) -> Result<Vec<Frame>> {
    let Some(reference) = frames.first() else {
        return Err(WiggleError::InvalidInput("No frames to align".into()));
    };

    let mut aligned = Vec::with_capacity(frames.len());
    aligned.push(reference.clone());
    on_progress(1);

    for (i, frame) in frames.iter().enumerate().skip(1) {
        let (shift, out) = align_frame(reference, frame)?;
        debug!(frame = i, %shift, "Aligned frame");
        aligned.push(out);
        on_progress(i + 1);
    }

    Ok(aligned)
}

/// Register `frame` onto `reference` and return the shift together with
/// the rolled frame.
pub fn align_frame(reference: &Frame, frame: &Frame) -> Result<(ShiftVector, Frame)> {
    let shift = estimate_shift(reference, frame)?;
    Ok((shift, roll_frame(frame, shift)))
}
