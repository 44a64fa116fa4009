pub mod toml_config;

use crate::adapters::output::OutputKind;
use crate::domain::model::MsisdnFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::batch::read_numbers;
#[cfg(feature = "cli")]
use crate::utils::error::MsisdnError;
#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::io::BufRead;

/// 合併命令列與設定檔後的有效設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterSettings {
    pub format: MsisdnFormat,
    pub country_code: String,
    pub output: OutputKind,
}

impl FormatterSettings {
    /// 合併設定：命令列優先，其次為 TOML 檔案，格式預設為 friendly
    pub fn resolve(
        format: Option<&str>,
        country_code: Option<&str>,
        output: Option<OutputKind>,
        file: Option<&TomlConfig>,
    ) -> Result<Self> {
        let format = format
            .map(MsisdnFormat::from_name)
            .or_else(|| file.and_then(|f| f.format()))
            .unwrap_or_default();

        let country_code = country_code
            .or_else(|| file.and_then(|f| f.country_code()))
            .map(str::to_string);
        let country_code = validate_required_field("country_code", &country_code)?.clone();

        let output = output
            .or_else(|| file.and_then(|f| f.output_kind()))
            .unwrap_or_default();

        Ok(Self {
            format,
            country_code,
            output,
        })
    }
}

impl Validate for FormatterSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("country_code", &self.country_code)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "msisdn-fmt")]
#[command(about = "Rewrite MSISDNs between plus-international, international, friendly and internal forms")]
pub struct CliConfig {
    /// Numbers to format
    #[arg(value_name = "NUMBER")]
    pub numbers: Vec<String>,

    /// File with one number per line ("-" reads stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Target format: plus-international, international, friendly or internal
    #[arg(short, long)]
    pub format: Option<String>,

    /// Country calling code, with or without a leading '+'
    #[arg(short = 'c', long)]
    pub country_code: Option<String>,

    #[arg(short, long, value_enum)]
    pub output: Option<OutputKind>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }

    /// 載入設定檔並合併命令列參數
    pub fn settings(&self) -> Result<FormatterSettings> {
        let file_config = self.load_file_config()?;
        let settings = FormatterSettings::resolve(
            self.format.as_deref(),
            self.country_code.as_deref(),
            self.output,
            file_config.as_ref(),
        )?;
        settings.validate()?;
        Ok(settings)
    }

    /// 收集命令列號碼與輸入檔案中的號碼
    pub fn collect_numbers(&self) -> Result<Vec<String>> {
        let stdin = std::io::stdin();
        self.collect_numbers_from(stdin.lock())
    }

    /// 同上，`--input -` 時改從 `stdin` 讀取
    pub fn collect_numbers_from<R: BufRead>(&self, stdin: R) -> Result<Vec<String>> {
        let mut numbers = self.numbers.clone();

        match self.input.as_deref() {
            Some("-") => {
                numbers.extend(read_numbers(stdin)?);
            }
            Some(path) => {
                let file = std::fs::File::open(path)?;
                numbers.extend(read_numbers(std::io::BufReader::new(file))?);
            }
            None => {}
        }

        if numbers.is_empty() {
            return Err(MsisdnError::MissingConfigError {
                field: "numbers".to_string(),
            });
        }

        Ok(numbers)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = self.input.as_deref() {
            validate_path("input", input)?;
        }
        if let Some(config) = self.config.as_deref() {
            validate_path("config", config)?;
        }
        if let Some(code) = self.country_code.as_deref() {
            validate_non_empty_string("country_code", code)?;
        }
        Ok(())
    }
}
