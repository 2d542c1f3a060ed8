#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};
use ndarray::{s, Array3};

use wiggle_core::align::roll_frame;
use wiggle_core::frame::{Frame, ShiftVector};

/// Deterministic per-pixel noise in 0..=255.
fn noise(row: usize, col: usize, channel: usize, seed: u64) -> u8 {
    let mut x = (row as u64) << 40 ^ (col as u64) << 16 ^ (channel as u64) << 8 ^ seed;
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    (x & 0xFF) as u8
}

/// A frame filled with pseudo-random texture, good for phase correlation.
pub fn textured_frame(height: usize, width: usize, seed: u64) -> Frame {
    let data = Array3::from_shape_fn((height, width, 3), |(r, c, ch)| noise(r, c, ch, seed));
    Frame::new(data).expect("three channels")
}

/// A frame where every pixel has the same color.
pub fn flat_frame(height: usize, width: usize, value: u8) -> Frame {
    Frame::new(Array3::from_elem((height, width, 3), value)).expect("three channels")
}

/// Place frames side by side into one image.
pub fn side_by_side(frames: &[Frame]) -> DynamicImage {
    let h = frames[0].height();
    let w: usize = frames.iter().map(|f| f.width()).sum();
    let mut data = Array3::<u8>::zeros((h, w, 3));
    let mut x = 0;
    for frame in frames {
        data.slice_mut(s![.., x..x + frame.width(), ..])
            .assign(&frame.data);
        x += frame.width();
    }
    let img = Frame::new(data)
        .and_then(|f| f.to_rgb_image())
        .expect("valid frame");
    DynamicImage::ImageRgb8(img)
}

/// A stereo source whose bands are one texture rolled by each shift.
pub fn shifted_stereo_image(
    height: usize,
    slice_width: usize,
    shifts: &[ShiftVector],
) -> DynamicImage {
    let base = textured_frame(height, slice_width, 7);
    let bands: Vec<Frame> = shifts.iter().map(|&s| roll_frame(&base, s)).collect();
    side_by_side(&bands)
}

pub fn blank_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
}

pub fn encode_png(image: &DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .expect("encode png");
    buf.into_inner()
}

pub fn write_png(dir: &Path, name: &str, image: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(image)).expect("write png");
    path
}

/// Decode a GIF and return its frames.
pub fn decode_gif(bytes: &[u8]) -> Vec<image::Frame> {
    use image::AnimationDecoder;
    let decoder = image::codecs::gif::GifDecoder::new(Cursor::new(bytes)).expect("gif header");
    decoder
        .into_frames()
        .collect_frames()
        .expect("gif frames")
}
