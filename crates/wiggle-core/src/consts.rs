/// Number of vertical bands a wiggle source image is cut into.
pub const DEFAULT_SLICE_COUNT: usize = 3;

/// Border (in pixels) removed from every edge after alignment to hide
/// roll wrap-around.
pub const DEFAULT_CROP_MARGIN: usize = 200;

/// Uniform downscale factor applied after cropping.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.2;

/// Per-frame display time in hundredths of a second (GIF delay units).
pub const DEFAULT_FRAME_DELAY_CS: u16 = 3;

/// Number of channels in a frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Cross-power bins with a magnitude below this are zeroed.
pub const CROSS_POWER_EPSILON: f64 = 1e-12;

/// Luminance range below which a frame is treated as flat.
pub const FLAT_FRAME_EPSILON: f64 = 1e-9;

/// Suffix appended to the input file stem for the output animation.
pub const OUTPUT_SUFFIX: &str = "_wiggle";

/// Extension of the output animation container.
pub const OUTPUT_EXTENSION: &str = "gif";
