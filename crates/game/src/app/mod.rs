use std::process::ExitCode;

use engine::run_app;
use tracing::error;

mod bootstrap;
mod gameplay;

pub(crate) use bootstrap::build_app;

use bootstrap::AppWiring;

pub(crate) fn run(app: AppWiring) -> ExitCode {
    if let Err(err) = run_app(app.config, app.simulation) {
        error!(error = %err, "startup_failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
