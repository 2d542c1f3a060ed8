mod common;

use std::sync::Mutex;

use wiggle_core::error::WiggleError;
use wiggle_core::frame::ShiftVector;
use wiggle_core::pipeline::config::{ResampleFilter, WiggleConfig};
use wiggle_core::pipeline::{
    process_bytes, process_file, process_image, process_image_reported, PipelineStage,
    ProgressReporter,
};

use common::{blank_image, decode_gif, encode_png, shifted_stereo_image, write_png};

fn small_config() -> WiggleConfig {
    WiggleConfig {
        crop_margin: 4,
        scale_factor: 0.5,
        ..Default::default()
    }
}

fn stereo() -> image::DynamicImage {
    shifted_stereo_image(
        48,
        64,
        &[
            ShiftVector::ZERO,
            ShiftVector::new(2, 3),
            ShiftVector::new(-4, 1),
        ],
    )
}

#[derive(Default)]
struct StageLog(Mutex<Vec<PipelineStage>>);

impl ProgressReporter for StageLog {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.0.lock().unwrap().push(stage);
    }
}

#[test]
fn test_four_frames_of_equal_size() {
    let frames = process_image(&stereo(), &small_config()).unwrap();

    assert_eq!(frames.len(), 4);
    for frame in &frames {
        assert_eq!((frame.width(), frame.height()), (28, 20));
    }
    assert_eq!(frames[1], frames[3]);
}

#[test]
fn test_alignment_removes_parallax_shift() {
    let config = WiggleConfig {
        crop_margin: 6,
        scale_factor: 1.0,
        filter: ResampleFilter::Nearest,
        ..Default::default()
    };
    let frames = process_image(&stereo(), &config).unwrap();

    for frame in &frames[1..] {
        assert_eq!(*frame, frames[0]);
    }
}

#[test]
fn test_stages_run_in_order() {
    let log = StageLog::default();
    process_image_reported(&stereo(), &small_config(), &log).unwrap();

    assert_eq!(
        *log.0.lock().unwrap(),
        vec![
            PipelineStage::Slicing,
            PipelineStage::Alignment,
            PipelineStage::PostProcessing
        ]
    );
}

#[test]
fn test_image_too_short_for_default_margin() {
    let image = blank_image(900, 300);
    let err = process_image(&image, &WiggleConfig::default());
    assert!(matches!(err, Err(WiggleError::InvalidInput(_))));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = WiggleConfig {
        scale_factor: 0.0,
        ..small_config()
    };
    assert!(matches!(
        process_image(&stereo(), &config),
        Err(WiggleError::InvalidInput(_))
    ));
}

#[test]
fn test_process_bytes_produces_looping_gif() {
    let png = encode_png(&stereo());
    let gif = process_bytes(&png, &small_config()).unwrap();

    let frames = decode_gif(&gif);
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0].buffer().dimensions(), (28, 20));
}

#[test]
fn test_process_bytes_is_deterministic() {
    let png = encode_png(&stereo());
    let a = process_bytes(&png, &small_config()).unwrap();
    let b = process_bytes(&png, &small_config()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_garbage_bytes_are_decode_errors() {
    let err = process_bytes(b"definitely not an image", &small_config());
    assert!(matches!(err, Err(WiggleError::Decode(_))));
}

#[test]
fn test_process_file_writes_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(dir.path(), "pier.png", &stereo());

    let output = process_file(&input, &small_config()).unwrap();
    assert_eq!(output, dir.path().join("pier_wiggle.gif"));
    assert_eq!(decode_gif(&std::fs::read(&output).unwrap()).len(), 4);
}

#[test]
fn test_missing_file_then_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.png");
    let valid = write_png(dir.path(), "ok.png", &stereo());

    let results: Vec<_> = [missing.clone(), valid]
        .iter()
        .map(|p| process_file(p, &small_config()))
        .collect();

    match &results[0] {
        Err(WiggleError::MissingFile(path)) => assert_eq!(path, &missing),
        other => panic!("expected MissingFile, got {other:?}"),
    }
    assert!(results[1].is_ok());
    assert!(!dir.path().join("nope_wiggle.gif").exists());
    assert!(dir.path().join("ok_wiggle.gif").exists());
}

#[test]
fn test_failed_file_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(dir.path(), "small.png", &blank_image(900, 300));

    let err = process_file(&input, &WiggleConfig::default());
    assert!(matches!(err, Err(WiggleError::InvalidInput(_))));

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("small.png")]);
}
