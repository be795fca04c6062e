//! Application entry point and dispatch.

use anyhow::Result;
use clap::CommandFactory;
use tracing::debug;

use strassen_cli::presenter::CLIResultPresenter;
use strassen_cli::{FileSource, RandomSource};
use strassen_core::DefaultFactory;
use strassen_orchestration::multiplier_selection::get_multipliers_to_run;
use strassen_orchestration::{
    analyze_comparison_results, execute_multiplications, MatrixSource, Operands, ResultPresenter,
};

use crate::config::{validate_dim, AppConfig, Invocation, SourceMode};

/// Run the application.
pub fn run(invocation: &Invocation) -> Result<()> {
    let config = match invocation {
        Invocation::Run(config) => config,
        Invocation::Usage => return print_usage(),
    };

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = AppConfig::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let (Some(mode), Some(n)) = (config.source_mode(), config.n) else {
        return print_usage();
    };
    let dim = validate_dim(n)?;

    let operands = load_operands(config, mode, dim)?;
    run_cli(config, &operands)
}

fn load_operands(config: &AppConfig, mode: SourceMode, dim: usize) -> Result<Operands> {
    debug!(?mode, dim, "loading operands");
    let operands = match mode {
        SourceMode::File => FileSource::new(&config.a_file, &config.b_file).load(dim)?,
        SourceMode::Random => RandomSource::new(config.seed).load(dim)?,
    };
    Ok(operands)
}

fn run_cli(config: &AppConfig, operands: &Operands) -> Result<()> {
    let presenter = CLIResultPresenter::new(config.quiet);
    presenter.present_operands(operands);

    let factory = DefaultFactory::new();
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;
    let results = execute_multiplications(&multipliers, operands);

    // Overflow in any product is fatal; nothing partial is printed.
    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone().into());
    }

    for result in &results {
        presenter.present_result(result, config.details);
    }

    if results.len() > 1 {
        if config.details {
            presenter.present_comparison(&results);
        }
        analyze_comparison_results(&results)?;
    }

    Ok(())
}

fn print_usage() -> Result<()> {
    AppConfig::command().print_help()?;
    Ok(())
}
