use rawlink_core::logging;

mod cli;
mod shell;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; it falls back to stderr on its own.
    let sink = logging::init_logging();
    tracing::debug!("log sink: {:?}", sink);

    if let Err(err) = Cli::run_from_args() {
        eprintln!("rawlink error: {:#}", err);
        std::process::exit(1);
    }
}
