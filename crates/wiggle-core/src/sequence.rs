use crate::error::{Result, WiggleError};
use crate::frame::Frame;

/// Playback parameters handed to an [`AnimationSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSettings {
    /// Display time of every frame, in hundredths of a second.
    pub frame_delay_cs: u16,
    /// Number of plays; `None` loops forever.
    pub loop_count: Option<u16>,
}

impl AnimationSettings {
    pub fn looping(frame_delay_cs: u16) -> Self {
        Self {
            frame_delay_cs,
            loop_count: None,
        }
    }
}

/// Destination for a finished frame sequence.
pub trait AnimationSink {
    fn write_animation(&mut self, frames: &[Frame], settings: &AnimationSettings) -> Result<()>;
}

/// Order frames for a back-and-forth loop.
///
/// The forward run is followed by the interior frames in reverse, so
/// `[f0, f1, f2]` becomes `[f0, f1, f2, f1]` and the loop restarts at `f0`
/// without repeating an endpoint.
pub fn ping_pong(frames: Vec<Frame>) -> Vec<Frame> {
    let n = frames.len();
    if n < 3 {
        return frames;
    }

    let mut sequence = Vec::with_capacity(2 * n - 2);
    sequence.extend(frames.iter().cloned());
    sequence.extend(frames[1..n - 1].iter().rev().cloned());
    sequence
}

/// Check that every frame has the same size as the first.
pub fn ensure_uniform(frames: &[Frame]) -> Result<(usize, usize)> {
    let Some(first) = frames.first() else {
        return Err(WiggleError::InvalidInput("Empty frame sequence".into()));
    };

    let dims = (first.width(), first.height());
    if let Some((i, bad)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| (f.width(), f.height()) != dims)
    {
        return Err(WiggleError::InvalidInput(format!(
            "Frame {i} is {}x{}, expected {}x{}",
            bad.width(),
            bad.height(),
            dims.0,
            dims.1
        )));
    }

    Ok(dims)
}

/// Validate the final sequence and pass it to the sink.
pub fn emit(
    frames: &[Frame],
    settings: &AnimationSettings,
    sink: &mut dyn AnimationSink,
) -> Result<()> {
    ensure_uniform(frames)?;
    sink.write_animation(frames, settings)
}
