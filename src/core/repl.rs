use crate::core::evaluator::Evaluator;
use crate::domain::model::ErrorPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use std::io::{BufRead, Write};

/// Counters and the terminating error (if any) of one REPL session.
#[derive(Debug, Default)]
pub struct ReplSummary {
    pub evaluated: usize,
    pub failed: usize,
    /// Set when [`ErrorPolicy::Exit`] stopped the loop.
    pub stopped_on: Option<CalcError>,
}

pub struct Repl {
    evaluator: Evaluator,
    prompt: String,
    exit_command: String,
    error_policy: ErrorPolicy,
}

impl Repl {
    pub fn new(
        evaluator: Evaluator,
        prompt: impl Into<String>,
        exit_command: impl Into<String>,
        error_policy: ErrorPolicy,
    ) -> Self {
        Self {
            evaluator,
            prompt: prompt.into(),
            exit_command: exit_command.into(),
            error_policy,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(
            Evaluator::from_config(config),
            config.prompt(),
            config.exit_command(),
            config.error_policy(),
        )
    }

    /// Read expressions line by line until EOF, the exit command, or an
    /// error under [`ErrorPolicy::Exit`].
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<ReplSummary> {
        let mut summary = ReplSummary::default();
        let mut line = String::new();

        tracing::debug!(
            "Starting REPL (exit command '{}', error policy {:?})",
            self.exit_command,
            self.error_policy
        );

        loop {
            writeln!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input");
                break;
            }

            let entry = line.trim();
            if entry == self.exit_command {
                tracing::debug!("Exit command received");
                break;
            }
            if entry.is_empty() {
                continue;
            }

            match self.evaluator.evaluate(entry) {
                Ok(result) => {
                    summary.evaluated += 1;
                    writeln!(output, "{}", result)?;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        "Evaluation of '{}' failed: {} (Category: {:?})",
                        entry,
                        e,
                        e.category()
                    );
                    writeln!(output, "{}", e.user_friendly_message())?;

                    if self.error_policy == ErrorPolicy::Exit {
                        summary.stopped_on = Some(e);
                        break;
                    }
                }
            }
        }

        output.flush()?;
        tracing::debug!(
            "REPL finished: {} evaluated, {} failed",
            summary.evaluated,
            summary.failed
        );
        Ok(summary)
    }
}
