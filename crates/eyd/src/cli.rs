use clap::Parser;
use eyd_lib::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eyd")]
#[command(about = "Move everything under a root into a timestamped quarantine, except kept paths", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(help = "Absolute root directory to prune")]
    pub root: PathBuf,

    #[arg(help = "JSON arrays of paths to keep, relative to the root (e.g. '[\"/etc/ssh\"]')")]
    pub keep: Vec<String>,

    #[arg(long, help = "Root-relative directory for quarantines [env: EYD_QUARANTINE_BASE, default: /oldroot]")]
    pub quarantine_base: Option<PathBuf>,

    #[arg(long, help = "Descend through symlinked directories that lead to kept paths")]
    pub follow_symlinks: bool,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, short = 'q', help = "Suppress non-error log output")]
    pub quiet: bool,
}

/// Decodes each argument as a JSON array of strings and concatenates them in order.
pub fn parse_keep_args(args: &[String]) -> Result<Vec<String>> {
    let mut keep = Vec::new();
    for arg in args {
        let fragments: Vec<String> = serde_json::from_str(arg)?;
        keep.extend(fragments);
    }
    Ok(keep)
}
