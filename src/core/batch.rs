use crate::core::formatter::{select_formatter, Formatter};
use crate::domain::model::{BatchReport, FormatRecord, MsisdnFormat};
use crate::utils::error::Result;
use std::io::BufRead;

/// 以同一格式與國碼批次處理多個號碼
///
/// 單筆失敗只記錄錯誤，其餘號碼照常處理
#[derive(Debug, Clone)]
pub struct BatchFormatter {
    formatter: Formatter,
    country_code: String,
}

impl BatchFormatter {
    pub fn new(format: MsisdnFormat, country_code: impl Into<String>) -> Self {
        Self {
            formatter: select_formatter(format),
            country_code: country_code.into(),
        }
    }

    pub fn format(&self) -> MsisdnFormat {
        self.formatter.kind()
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn format_one(&self, msisdn: &str) -> FormatRecord {
        match self.formatter.format(msisdn, &self.country_code) {
            Ok(output) => FormatRecord {
                input: msisdn.to_string(),
                output: Some(output),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Skipping '{}': {}", msisdn, e);
                FormatRecord {
                    input: msisdn.to_string(),
                    output: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// 批次格式化，空白項目會被略過
    pub fn format_all<I, S>(&self, numbers: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records: Vec<FormatRecord> = numbers
            .into_iter()
            .filter(|n| !n.as_ref().trim().is_empty())
            .map(|n| self.format_one(n.as_ref()))
            .collect();

        let report = BatchReport {
            format: self.format(),
            country_code: self.country_code.clone(),
            records,
        };

        tracing::info!(
            "Formatted {} numbers as {} ({} failed)",
            report.succeeded(),
            report.format,
            report.failed()
        );

        report
    }
}

/// 每行讀取一個號碼，去除前後空白並略過空行
pub fn read_numbers<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut numbers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            numbers.push(trimmed.to_string());
        }
    }
    tracing::debug!("Read {} numbers", numbers.len());
    Ok(numbers)
}
