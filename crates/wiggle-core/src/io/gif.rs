use std::io::Write;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame as AnimationFrame};
use tracing::debug;

use crate::error::{Result, WiggleError};
use crate::frame::Frame;
use crate::sequence::{ensure_uniform, AnimationSettings, AnimationSink};

/// Writes frame sequences as animated GIF to any writer.
pub struct GifSink<W: Write> {
    writer: W,
}

impl<W: Write> GifSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AnimationSink for GifSink<W> {
    fn write_animation(&mut self, frames: &[Frame], settings: &AnimationSettings) -> Result<()> {
        let (w, h) = ensure_uniform(frames)?;
        let delay = Delay::from_numer_denom_ms(u32::from(settings.frame_delay_cs) * 10, 1);

        let animation = frames
            .iter()
            .map(|frame| -> Result<AnimationFrame> {
                let rgba = DynamicImage::ImageRgb8(frame.to_rgb_image()?).into_rgba8();
                Ok(AnimationFrame::from_parts(rgba, 0, 0, delay))
            })
            .collect::<Result<Vec<_>>>()?;

        let repeat = match settings.loop_count {
            None => Repeat::Infinite,
            Some(n) => Repeat::Finite(n),
        };

        // Dropping the encoder writes the GIF trailer.
        {
            let mut encoder = GifEncoder::new(&mut self.writer);
            encoder.set_repeat(repeat).map_err(WiggleError::Encode)?;
            encoder
                .encode_frames(animation)
                .map_err(WiggleError::Encode)?;
        }
        self.writer.flush()?;

        debug!(
            frames = frames.len(),
            width = w,
            height = h,
            delay_cs = settings.frame_delay_cs,
            "Encoded GIF"
        );
        Ok(())
    }
}

/// Encode a frame sequence to GIF bytes in memory.
pub fn encode_gif(frames: &[Frame], settings: &AnimationSettings) -> Result<Vec<u8>> {
    let mut sink = GifSink::new(Vec::new());
    sink.write_animation(frames, settings)?;
    Ok(sink.into_inner())
}
