pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::output::{render, OutputKind};
pub use config::{toml_config::TomlConfig, FormatterSettings};
pub use crate::core::batch::{read_numbers, BatchFormatter};
pub use crate::core::formatter::{
    select_formatter, select_formatter_by_code, select_formatter_by_name, Formatter,
};
pub use domain::model::{BatchReport, FormatRecord, MsisdnFormat};
pub use utils::error::{MsisdnError, Result};
