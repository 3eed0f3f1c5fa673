//! Main entry point for gendata.

use anyhow::Context;
use gendata::{run, AppError};
use gendata_common::{init_default_logging, init_logging};
use gendata_config::ConfigLoader;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            // Logging settings live in the config; fall back so the failure is still reported.
            if init_default_logging().is_ok() {
                error!(error = %e, "failed to load configuration");
            }
            return Err(AppError::Config(e)).context("gendata could not start");
        }
    };

    init_logging(&config.logging.to_logging_config())
        .map_err(AppError::Config)
        .context("failed to initialize logging")?;

    info!(output = %config.output.path.display(), "starting gendata");

    match run(&config) {
        Ok(summary) => {
            info!(
                path = %summary.output_path.display(),
                points = summary.point_count,
                "scatter plot written"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, cause = %e.inner(), "gendata failed");
            Err(e).context("gendata failed")
        }
    }
}
