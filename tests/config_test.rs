use anyhow::Result;
use numeral_calc::core::ConfigProvider;
use numeral_calc::utils::validation::Validate;
use numeral_calc::{CalcError, CliConfig, ErrorPolicy, OperatorScan, Repl, TomlConfig};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_config_from_file() -> Result<()> {
    let file = config_file(
        r#"
[repl]
prompt = "roman>"
on_error = "exit"

[evaluator]
operator_scan = "scan-order"
"#,
    )?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;

    assert_eq!(config.prompt(), "roman>");
    assert_eq!(config.exit_command(), "exit");
    assert_eq!(config.error_policy(), ErrorPolicy::Exit);
    assert_eq!(config.operator_scan(), OperatorScan::ScanOrder);
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let result = TomlConfig::from_file("/nonexistent/numeral-calc.toml");
    assert!(matches!(result, Err(CalcError::ConfigError { .. })));
}

#[test]
fn test_cli_flags_override_file() -> Result<()> {
    let file = config_file("[repl]\nexit_command = \"quit\"\non_error = \"exit\"\n")?;

    let cli = CliConfig {
        config: Some(file.path().to_path_buf()),
        on_error: Some(ErrorPolicy::Continue),
        ..Default::default()
    };
    let resolved = cli.resolve()?;

    assert_eq!(resolved.exit_command(), "quit");
    assert_eq!(resolved.error_policy(), ErrorPolicy::Continue);
    assert_eq!(resolved.operator_scan(), OperatorScan::Leftmost);
    Ok(())
}

#[test]
fn test_invalid_file_value_fails_resolution() -> Result<()> {
    let file = config_file("[repl]\nexit_command = \" quit\"\n")?;

    let cli = CliConfig {
        config: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    assert!(matches!(
        cli.resolve(),
        Err(CalcError::InvalidConfigValueError { .. })
    ));
    Ok(())
}

#[test]
fn test_repl_built_from_resolved_config() -> Result<()> {
    let file = config_file("[repl]\nprompt = \">>\"\nexit_command = \"q\"\n")?;
    let cli = CliConfig {
        config: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let repl = Repl::from_config(&cli.resolve()?);

    let mut output = Vec::new();
    let summary = repl.run(Cursor::new("IV+IV\nq\n"), &mut output)?;

    assert_eq!(summary.evaluated, 1);
    assert_eq!(String::from_utf8(output)?, ">>\nVIII\n>>\n");
    Ok(())
}
