use ndarray::Array2;
use num_complex::Complex;
use rustfft::FftPlanner;
use tracing::warn;

use crate::consts::{CROSS_POWER_EPSILON, FLAT_FRAME_EPSILON};
use crate::error::{Result, WiggleError};
use crate::frame::{Frame, ShiftVector};

/// Estimate the integer shift that registers `target` onto `reference`.
///
/// Rolling `target` by the returned vector lines it up with `reference`.
/// Flat inputs or a non-finite correlation peak yield a zero shift.
pub fn estimate_shift_array(reference: &Array2<f64>, target: &Array2<f64>) -> Result<ShiftVector> {
    let (h, w) = reference.dim();
    let (th, tw) = target.dim();
    if h != th || w != tw {
        return Err(WiggleError::InvalidInput(format!(
            "Frame size mismatch: {}x{} vs {}x{}",
            w, h, tw, th
        )));
    }
    if h == 0 || w == 0 {
        return Err(WiggleError::InvalidInput("Cannot align an empty frame".into()));
    }

    if is_flat(reference) || is_flat(target) {
        warn!("Flat frame has no features to correlate, using zero shift");
        return Ok(ShiftVector::ZERO);
    }

    let ref_fft = fft2d(reference);
    let tgt_fft = fft2d(target);
    let cross_power = normalized_cross_power(&ref_fft, &tgt_fft);
    let correlation = ifft2d(&cross_power);

    let (peak_row, peak_col, peak_val) = find_peak(&correlation);
    if !peak_val.is_finite() {
        warn!("Correlation peak is not finite, using zero shift");
        return Ok(ShiftVector::ZERO);
    }

    Ok(ShiftVector {
        dy: wrap_signed(peak_row, h),
        dx: wrap_signed(peak_col, w),
    })
}

/// Estimate the shift between two frames from their channel-mean luminance.
pub fn estimate_shift(reference: &Frame, target: &Frame) -> Result<ShiftVector> {
    estimate_shift_array(&reference.luminance(), &target.luminance())
}

/// Peaks past the half-size of an axis stand for negative shifts.
fn wrap_signed(peak: usize, len: usize) -> i64 {
    if peak > len / 2 {
        peak as i64 - len as i64
    } else {
        peak as i64
    }
}

fn is_flat(data: &Array2<f64>) -> bool {
    let (min, max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    !(max - min).is_finite() || max - min < FLAT_FRAME_EPSILON
}

/// 2D FFT: row-wise FFT, then column-wise FFT.
fn fft2d(data: &Array2<f64>) -> Array2<Complex<f64>> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let fft_row = planner.plan_fft_forward(w);
    let fft_col = planner.plan_fft_forward(h);

    let mut result = data.mapv(|v| Complex::new(v, 0.0));

    for mut row in result.rows_mut() {
        let mut buf: Vec<Complex<f64>> = row.to_vec();
        fft_row.process(&mut buf);
        row.iter_mut().zip(buf).for_each(|(dst, src)| *dst = src);
    }

    for mut col in result.columns_mut() {
        let mut buf: Vec<Complex<f64>> = col.to_vec();
        fft_col.process(&mut buf);
        col.iter_mut().zip(buf).for_each(|(dst, src)| *dst = src);
    }

    result
}

/// Inverse 2D FFT, returning the normalized real part.
fn ifft2d(data: &Array2<Complex<f64>>) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let ifft_row = planner.plan_fft_inverse(w);
    let ifft_col = planner.plan_fft_inverse(h);

    let mut work = data.clone();

    for mut col in work.columns_mut() {
        let mut buf: Vec<Complex<f64>> = col.to_vec();
        ifft_col.process(&mut buf);
        col.iter_mut().zip(buf).for_each(|(dst, src)| *dst = src);
    }

    for mut row in work.rows_mut() {
        let mut buf: Vec<Complex<f64>> = row.to_vec();
        ifft_row.process(&mut buf);
        row.iter_mut().zip(buf).for_each(|(dst, src)| *dst = src);
    }

    let scale = 1.0 / (h * w) as f64;
    work.mapv(|c| c.re * scale)
}

fn normalized_cross_power(
    ref_fft: &Array2<Complex<f64>>,
    tgt_fft: &Array2<Complex<f64>>,
) -> Array2<Complex<f64>> {
    let mut result = Array2::<Complex<f64>>::zeros(ref_fft.raw_dim());

    ndarray::Zip::from(&mut result)
        .and(ref_fft)
        .and(tgt_fft)
        .for_each(|out, &r, &t| {
            let cross = r * t.conj();
            let mag = cross.norm();
            *out = if mag > CROSS_POWER_EPSILON {
                cross / mag
            } else {
                Complex::new(0.0, 0.0)
            };
        });

    result
}

/// First maximum in row-major order, so ties resolve toward the origin.
fn find_peak(data: &Array2<f64>) -> (usize, usize, f64) {
    let mut best = (0, 0, f64::NEG_INFINITY);

    for ((row, col), &val) in data.indexed_iter() {
        if val > best.2 {
            best = (row, col, val);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_signed_maps_upper_half_to_negative() {
        assert_eq!(wrap_signed(0, 8), 0);
        assert_eq!(wrap_signed(4, 8), 4);
        assert_eq!(wrap_signed(5, 8), -3);
        assert_eq!(wrap_signed(7, 8), -1);
        assert_eq!(wrap_signed(3, 7), 3);
        assert_eq!(wrap_signed(4, 7), -3);
    }

    #[test]
    fn fft_roundtrip_recovers_input() {
        let data = Array2::from_shape_fn((6, 10), |(r, c)| (r * 10 + c) as f64 * 0.37);
        let back = ifft2d(&fft2d(&data));
        for (a, b) in data.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn find_peak_prefers_first_maximum() {
        let mut data = Array2::<f64>::zeros((4, 4));
        data[[1, 2]] = 5.0;
        data[[3, 0]] = 5.0;
        assert_eq!(find_peak(&data), (1, 2, 5.0));
    }

    #[test]
    fn flat_detection() {
        assert!(is_flat(&Array2::from_elem((5, 5), 42.0)));
        let mut data = Array2::from_elem((5, 5), 42.0);
        data[[2, 2]] = 43.0;
        assert!(!is_flat(&data));
    }
}
