use std::path::PathBuf;

use clap::Parser;
use log::{info, warn, LevelFilter};
use otsu_mix::core::mix_with_threshold;
use otsu_mix::files::{gray_view, load_gray, mix_gray_images, save_gray};
use otsu_mix::{write_report, MixReport};

#[cfg(feature = "tracing")]
use otsu_mix::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use otsu_mix::core::init_with_level;

/// Threshold the white image with Otsu's method and composite it over the black image.
#[derive(Parser, Debug)]
#[command(name = "otsu-mix", version, about)]
struct Cli {
    /// Image that is segmented and supplies pixels above the threshold.
    #[arg(long, default_value = "a.jpg")]
    white: PathBuf,
    /// Image that supplies pixels at or below the threshold.
    #[arg(long, default_value = "b.jpg")]
    black: PathBuf,
    /// Where to write the composited image.
    #[arg(short, long, default_value = "mix.png")]
    output: PathBuf,
    /// Also write the binary mask here.
    #[arg(long)]
    mask: Option<PathBuf>,
    /// Use this threshold instead of Otsu's.
    #[arg(long)]
    threshold: Option<u8>,
    /// Write a JSON run report here.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Log level (off, error, warn, info, debug, trace); `RUST_LOG` overrides it in tracing builds.
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    init_with_level(cli.log_level)?;
    #[cfg(feature = "tracing")]
    init_tracing(false, cli.log_level);

    run(&cli)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let white = load_gray(&cli.white)?;
    let black = load_gray(&cli.black)?;
    info!(
        "white {}x{}, black {}x{}",
        white.width(),
        white.height(),
        black.width(),
        black.height()
    );

    let out = match cli.threshold {
        Some(t) => mix_with_threshold(&gray_view(&white)?, &gray_view(&black)?, t)?,
        None => mix_gray_images(&white, &black)?,
    };
    if out.threshold.degenerate {
        warn!(
            "{} has a single intensity level; threshold defaults to {}",
            cli.white.display(),
            out.threshold.threshold
        );
    }
    info!(
        "threshold {} ({:.1}% white)",
        out.threshold.threshold,
        out.white_fraction * 100.0
    );

    save_gray(&cli.output, &out.mixed)?;
    info!("wrote {}", cli.output.display());
    if let Some(mask_path) = &cli.mask {
        save_gray(mask_path, &out.mask)?;
        info!("wrote mask {}", mask_path.display());
    }

    if let Some(report_path) = &cli.report {
        let report = MixReport {
            white_path: cli.white.display().to_string(),
            black_path: cli.black.display().to_string(),
            output_path: cli.output.display().to_string(),
            mask_path: cli.mask.as_ref().map(|p| p.display().to_string()),
            manual_threshold: cli.threshold.is_some(),
            ..MixReport::from_output(&out)
        };
        write_report(report_path, &report)?;
        info!("wrote report {}", report_path.display());
    }
    Ok(())
}
