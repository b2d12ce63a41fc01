use clap::Parser;
use numeral_calc::core::ConfigProvider;
use numeral_calc::utils::logger;
use numeral_calc::{CalcError, CliConfig, Evaluator, Repl};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!(
        "Operator scan {:?}, error policy {:?}",
        config.operator_scan(),
        config.error_policy()
    );

    if let Some(expr) = &cli.expr {
        let evaluator = Evaluator::from_config(&config);
        match evaluator.evaluate(expr) {
            Ok(result) => println!("{}", result),
            Err(e) => {
                println!("{}", e.user_friendly_message());
                exit_with(&e);
            }
        }
        return Ok(());
    }

    let repl = Repl::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let summary = match repl.run(stdin.lock(), stdout.lock()) {
        Ok(summary) => summary,
        Err(e) => exit_with(&e),
    };

    if let Some(e) = summary.stopped_on {
        io::stdout().flush()?;
        exit_with(&e);
    }

    Ok(())
}

fn exit_with(e: &CalcError) -> ! {
    tracing::error!(
        "Stopping: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Suggestion: {}", e.recovery_suggestion());

    if !e.is_input_error() {
        eprintln!("{}", e.user_friendly_message());
    }
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
