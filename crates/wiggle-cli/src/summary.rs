use std::path::Path;

use console::Style;
use wiggle_core::error::WiggleError;
use wiggle_core::pipeline::config::WiggleConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    ok: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            ok: Style::new().green().bold(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &WiggleConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Wiggle Pipeline"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Slices"),
        s.value.apply_to(config.slice_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Crop margin"),
        s.value.apply_to(format!("{} px", config.crop_margin))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value
            .apply_to(format!("{} ({})", config.scale_factor, config.filter))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frame delay"),
        s.value
            .apply_to(format!("{} ms", u32::from(config.frame_delay_cs) * 10))
    );
    println!();
}

pub fn print_success(input: &Path, output: &Path) {
    let s = Styles::new();
    println!(
        "{} {} -> {}",
        s.ok.apply_to("Saved"),
        input.display(),
        s.path.apply_to(output.display())
    );
}

pub fn print_failure(input: &Path, err: &WiggleError) {
    let s = Styles::new();
    let kind = match err {
        WiggleError::MissingFile(_) => "Missing file",
        WiggleError::InvalidInput(_) => "Invalid input",
        WiggleError::Decode(_) => "Decode error",
        WiggleError::Encode(_) => "Encode error",
        WiggleError::Io(_) | WiggleError::Shape(_) => "Error",
    };
    eprintln!(
        "{} {}: {}",
        s.error.apply_to(format!("{kind}:")),
        s.path.apply_to(input.display()),
        err
    );
}
