mod date;
mod naming;
mod process;
mod rename;
mod scan;

use std::path::PathBuf;

use clap::Parser;

/// Receives one status line per event. The binary forwards these to the
/// `log` facade; tests capture them.
pub type DiagnosticSink<'a> = dyn Fn(log::Level, &str) + 'a;

#[derive(Parser)]
#[command(
    name = "jpeg-rename",
    version,
    about = "Rename JPEG files to YYYY-MM-DD-HHmmss-<md5>.jpg using the EXIF capture time"
)]
struct Cli {
    /// JPEG files to rename (only names ending in .jpg, any case)
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let result = process::process(&cli.paths, &|level: log::Level, message: &str| {
        log::log!(level, "{}", message);
    });
    log::debug!(
        "{} renamed, {} skipped, {} failed",
        result.renamed.len(),
        result.skipped,
        result.failed
    );

    Ok(())
}
