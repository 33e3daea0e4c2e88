//! Setup command implementation

use std::path::PathBuf;

use crate::bootstrap::{self, BootstrapOptions};
use crate::cli::SetupArgs;
use crate::config::SetupConfig;
use crate::error::{Result, io_error};
use crate::ui::Reporter;

/// Run the full bootstrap sequence
pub fn run(project: Option<PathBuf>, verbose: bool, args: SetupArgs) -> Result<()> {
    let root = match project {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("cannot determine current directory: {e}")))?,
    };

    let config = SetupConfig::load(&root)?;
    let reporter = Reporter::new(verbose);
    let opts = BootstrapOptions {
        force: args.force,
        skip_corpora: args.skip_corpora,
        dry_run: args.dry_run,
    };

    bootstrap::run(&config, &opts, &reporter)
}
