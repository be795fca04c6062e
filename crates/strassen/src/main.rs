//! Strassen-rs — square matrix multiplication with Strassen's algorithm.

use strassen_lib::config::{self, Invocation};
use strassen_lib::{app, errors};

fn main() {
    let invocation = match config::parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };

    // Initialize tracing
    let verbose = matches!(&invocation, Invocation::Run(c) if c.verbose);
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&invocation) {
        strassen_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
