//! File logging for the dashboard. Stderr belongs to the terminal UI.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Route `log` records to `path`, filtered by `RUST_LOG` or `level`.
pub fn init(path: &Path, level: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()?;
    Ok(())
}
