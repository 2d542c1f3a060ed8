use ndarray::Array3;

use crate::frame::{Frame, ShiftVector};

/// Cyclically roll a frame along both spatial axes.
///
/// Pixel `(r, c)` lands at `((r + dy) mod h, (c + dx) mod w)`; nothing is
/// padded or interpolated, so rolling by `shift.negated()` restores the
/// original exactly.
pub fn roll_frame(frame: &Frame, shift: ShiftVector) -> Frame {
    let (h, w, ch) = frame.data.dim();
    if h == 0 || w == 0 || shift.is_zero() {
        return frame.clone();
    }

    let dy = shift.dy.rem_euclid(h as i64) as usize;
    let dx = shift.dx.rem_euclid(w as i64) as usize;

    let data = Array3::from_shape_fn((h, w, ch), |(row, col, c)| {
        let src_row = (row + h - dy) % h;
        let src_col = (col + w - dx) % w;
        frame.data[[src_row, src_col, c]]
    });

    Frame { data }
}
