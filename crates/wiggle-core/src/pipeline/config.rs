use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CROP_MARGIN, DEFAULT_FRAME_DELAY_CS, DEFAULT_SCALE_FACTOR, DEFAULT_SLICE_COUNT,
};
use crate::error::{Result, WiggleError};
use crate::sequence::AnimationSettings;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiggleConfig {
    /// Number of vertical bands in the source image.
    pub slice_count: usize,
    /// Pixels removed from every edge after alignment.
    pub crop_margin: usize,
    /// Uniform downscale factor, in (0, 1].
    pub scale_factor: f64,
    /// Per-frame display time in hundredths of a second.
    pub frame_delay_cs: u16,
    pub filter: ResampleFilter,
}

impl Default for WiggleConfig {
    fn default() -> Self {
        Self {
            slice_count: DEFAULT_SLICE_COUNT,
            crop_margin: DEFAULT_CROP_MARGIN,
            scale_factor: DEFAULT_SCALE_FACTOR,
            frame_delay_cs: DEFAULT_FRAME_DELAY_CS,
            filter: ResampleFilter::default(),
        }
    }
}

impl WiggleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.slice_count == 0 {
            return Err(WiggleError::InvalidInput(
                "slice_count must be at least 1".into(),
            ));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 || self.scale_factor > 1.0 {
            return Err(WiggleError::InvalidInput(format!(
                "scale_factor {} must be in (0, 1]",
                self.scale_factor
            )));
        }
        if self.frame_delay_cs == 0 {
            return Err(WiggleError::InvalidInput(
                "frame_delay_cs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Playback settings for the encoder: configured delay, infinite loop.
    pub fn animation_settings(&self) -> AnimationSettings {
        AnimationSettings::looping(self.frame_delay_cs)
    }
}

/// Resampling filter used when downscaling frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    /// Bilinear.
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Bilinear"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Gaussian => write!(f, "Gaussian"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
