use std::path::{Path, PathBuf};

use crate::consts::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};

/// Output path for an input image: same directory, `<stem>_wiggle.gif`.
pub fn wiggle_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!("{stem}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}");

    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
