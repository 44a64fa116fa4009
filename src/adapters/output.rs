use crate::domain::model::BatchReport;
use crate::utils::error::{MsisdnError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render(report: &BatchReport, kind: OutputKind) -> Result<String> {
    tracing::debug!("Rendering {} records as {:?}", report.total(), kind);
    match kind {
        OutputKind::Text => Ok(render_text(report)),
        OutputKind::Json => render_json(report),
        OutputKind::Csv => render_csv(report),
    }
}

/// 每行一筆結果，失敗的號碼以 `!` 開頭附上錯誤
fn render_text(report: &BatchReport) -> String {
    report
        .records
        .iter()
        .map(|record| match (&record.output, &record.error) {
            (Some(output), _) => output.clone(),
            (None, Some(error)) => format!("!{}", error),
            (None, None) => format!("!{}", record.input),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json(report: &BatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report.records)?)
}

fn render_csv(report: &BatchReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["input", "output", "error"])?;

    for record in &report.records {
        writer.write_record([
            record.input.as_str(),
            record.output.as_deref().unwrap_or(""),
            record.error.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MsisdnError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| MsisdnError::OutputError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FormatRecord, MsisdnFormat};

    fn sample_report() -> BatchReport {
        BatchReport {
            format: MsisdnFormat::Friendly,
            country_code: "+254".to_string(),
            records: vec![
                FormatRecord {
                    input: "+254712345678".to_string(),
                    output: Some("0712345678".to_string()),
                    error: None,
                },
                FormatRecord {
                    input: "+25".to_string(),
                    output: None,
                    error: Some("too short".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample_report(), OutputKind::Text).unwrap();
        assert_eq!(text, "0712345678\n!too short");
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample_report(), OutputKind::Json).unwrap();
        let parsed: Vec<FormatRecord> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, sample_report().records);
    }

    #[test]
    fn test_render_csv() {
        let csv_output = render(&sample_report(), OutputKind::Csv).unwrap();
        let lines: Vec<&str> = csv_output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "input,output,error");
        assert_eq!(lines[1], "+254712345678,0712345678,");
        assert_eq!(lines[2], "+25,,too short");
    }

    #[test]
    fn test_render_csv_empty_report_has_header() {
        let csv_output = render(&BatchReport::default(), OutputKind::Csv).unwrap();
        assert_eq!(csv_output.trim_end(), "input,output,error");
    }
}
