use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use wiggle_core::pipeline::{PipelineStage, ProgressReporter};

/// Spinner showing the current stage of one input file.
pub struct SpinnerReporter {
    bar: ProgressBar,
    label: String,
    current_total: AtomicUsize,
}

impl SpinnerReporter {
    pub fn new(input: &Path) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {prefix} {msg}") {
            bar.set_style(style);
        }
        let label = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        bar.set_prefix(label.clone());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            bar,
            label,
            current_total: AtomicUsize::new(0),
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.current_total
            .store(total_items.unwrap_or(0), Ordering::Relaxed);
        self.bar.set_message(stage.to_string());
        tracing::debug!(input = %self.label, %stage, "Stage started");
    }

    fn advance(&self, items_done: usize) {
        let total = self.current_total.load(Ordering::Relaxed);
        if total > 0 {
            self.bar.set_prefix(format!("{} [{items_done}/{total}]", self.label));
        }
    }

    fn finish_stage(&self) {
        self.bar.set_prefix(self.label.clone());
    }
}
