use anyhow::Result;
use msisdn_fmt::{
    read_numbers, render, BatchFormatter, FormatRecord, FormatterSettings, MsisdnFormat,
    OutputKind, TomlConfig,
};
use std::io::{BufReader, Write};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_file_config_drives_batch_from_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let config_path = temp_dir.path().join("msisdn.toml");
    std::fs::write(
        &config_path,
        r#"
[formatter]
country_code = "+44"
format = "friendly"

[output]
kind = "csv"
"#,
    )?;

    let input_path = temp_dir.path().join("numbers.txt");
    std::fs::write(&input_path, "+447911123456\n07911123456\n\n7911123456\n+44\n")?;

    let file_config = TomlConfig::from_file(&config_path)?;
    let settings = FormatterSettings::resolve(None, None, None, Some(&file_config))?;
    assert_eq!(settings.format, MsisdnFormat::Friendly);
    assert_eq!(settings.output, OutputKind::Csv);

    let numbers = read_numbers(BufReader::new(std::fs::File::open(&input_path)?))?;
    assert_eq!(numbers.len(), 4);

    let batch = BatchFormatter::new(settings.format, settings.country_code.clone());
    let report = batch.format_all(&numbers);

    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.failed(), 1);

    let csv_output = render(&report, settings.output)?;
    let lines: Vec<&str> = csv_output.lines().collect();
    assert_eq!(lines[0], "input,output,error");
    // fixed four character strip on a two digit code
    assert_eq!(lines[1], "+447911123456,0911123456,");
    assert_eq!(lines[2], "07911123456,07911123456,");
    assert_eq!(lines[3], "7911123456,07911123456,");
    assert!(lines[4].starts_with("+44,,"));

    Ok(())
}

#[test]
fn test_json_output_round_trips_records() -> Result<()> {
    let batch = BatchFormatter::new(MsisdnFormat::PlusInternational, "254");
    let report = batch.format_all(["0712345678", "712345678", "+254712345678"]);

    let json = render(&report, OutputKind::Json)?;
    let records: Vec<FormatRecord> = serde_json::from_str(&json)?;

    let outputs: Vec<Option<&str>> = records.iter().map(|r| r.output.as_deref()).collect();
    assert_eq!(
        outputs,
        vec![
            Some("+254712345678"),
            Some("+254712345678"),
            // bare code does not match a '+' prefixed number, so it is prepended
            Some("+254+254712345678"),
        ]
    );

    Ok(())
}

#[test]
fn test_text_output_marks_failures() -> Result<()> {
    let batch = BatchFormatter::new(MsisdnFormat::Internal, "+1");
    let report = batch.format_all(["+15551234567", "+12"]);

    let text = render(&report, OutputKind::Text)?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "51234567");
    assert!(lines[1].starts_with("!Invalid input '+12'"));

    Ok(())
}

#[test]
fn test_env_substituted_country_code() -> Result<()> {
    std::env::set_var("MSISDN_FMT_IT_COUNTRY", "44");

    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(b"[formatter]\ncountry_code = \"${MSISDN_FMT_IT_COUNTRY}\"\nformat = \"internal\"\n")?;

    let config = TomlConfig::from_file(config_file.path())?;
    let settings = FormatterSettings::resolve(None, None, None, Some(&config))?;
    assert_eq!(settings.country_code, "44");

    let report = BatchFormatter::new(settings.format, settings.country_code).format_all(["07911123456"]);
    assert_eq!(report.records[0].output.as_deref(), Some("7911123456"));

    std::env::remove_var("MSISDN_FMT_IT_COUNTRY");
    Ok(())
}

#[cfg(feature = "cli")]
#[test]
fn test_cli_batch_with_short_number_is_partial_failure() -> Result<()> {
    use clap::Parser;
    use msisdn_fmt::{CliConfig, MsisdnError};

    let mut input = NamedTempFile::new()?;
    input.write_all(b"+447911123456\n+44\n07911123456\n")?;
    let path = input.path().to_str().unwrap().to_string();

    let config = CliConfig::parse_from([
        "msisdn-fmt",
        "--format",
        "internal",
        "-c",
        "+44",
        "--input",
        path.as_str(),
    ]);

    let settings = config.settings()?;
    let numbers = config.collect_numbers()?;
    let report = BatchFormatter::new(settings.format, settings.country_code).format_all(&numbers);

    let err = report.ensure_complete().unwrap_err();
    assert!(matches!(err, MsisdnError::PartialFailure { failed: 1, total: 3 }));
    assert_eq!(err.severity().exit_code(), 2);

    Ok(())
}
