use image::RgbImage;
use ndarray::{Array2, Array3, Axis};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, WiggleError};

/// A single 8-bit RGB image frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width, 3)
    pub data: Array3<u8>,
}

impl Frame {
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let channels = data.dim().2;
        if channels != COLOR_CHANNEL_COUNT {
            return Err(WiggleError::InvalidInput(format!(
                "Expected {COLOR_CHANNEL_COUNT} color channels, got {channels}"
            )));
        }
        Ok(Self { data })
    }

    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        let data = Array3::from_shape_vec(
            (h as usize, w as usize, COLOR_CHANNEL_COUNT),
            img.as_raw().clone(),
        )?;
        Ok(Self { data })
    }

    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let pixels: Vec<u8> = self.data.iter().copied().collect();
        RgbImage::from_raw(self.width() as u32, self.height() as u32, pixels).ok_or_else(|| {
            WiggleError::InvalidInput(format!(
                "Frame buffer does not match {}x{}",
                self.width(),
                self.height()
            ))
        })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Single-channel intensity: the mean across the color axis.
    pub fn luminance(&self) -> Array2<f64> {
        self.data
            .mapv(f64::from)
            .mean_axis(Axis(2))
            .unwrap_or_else(|| Array2::zeros((self.height(), self.width())))
    }
}

/// Integer translation between two frames, in pixels.
///
/// Applying it with [`crate::align::roll_frame`] moves content `dy` rows down
/// and `dx` columns right, wrapping at the edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShiftVector {
    pub dy: i64,
    pub dx: i64,
}

impl ShiftVector {
    pub const ZERO: ShiftVector = ShiftVector { dy: 0, dx: 0 };

    pub fn new(dy: i64, dx: i64) -> Self {
        Self { dy, dx }
    }

    pub fn is_zero(&self) -> bool {
        self.dy == 0 && self.dx == 0
    }

    pub fn negated(&self) -> Self {
        Self {
            dy: -self.dy,
            dx: -self.dx,
        }
    }
}

impl std::fmt::Display for ShiftVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(dy={}, dx={})", self.dy, self.dx)
    }
}
