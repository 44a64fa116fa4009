use crate::utils::error::{MsisdnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// MSISDN 的四種文字表示法
///
/// 序列化為 kebab-case；反序列化經由 [`MsisdnFormat::from_name`]，
/// 未知名稱不會失敗，而是回落至 [`MsisdnFormat::Friendly`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum MsisdnFormat {
    /// `+<國碼><國內號碼>`
    PlusInternational,
    /// 不帶 `+` 的 `<國碼><國內號碼>`
    International,
    /// 國內撥號格式，以單一 `0` 開頭
    #[default]
    Friendly,
    /// 不含國碼與 `0` 的國內有效號碼
    Internal,
}

impl MsisdnFormat {
    pub const ALL: [MsisdnFormat; 4] = [
        MsisdnFormat::PlusInternational,
        MsisdnFormat::International,
        MsisdnFormat::Friendly,
        MsisdnFormat::Internal,
    ];

    /// 由數字代碼取得格式 (0..=3)，未知代碼回落至 Friendly
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => MsisdnFormat::PlusInternational,
            1 => MsisdnFormat::International,
            2 => MsisdnFormat::Friendly,
            3 => MsisdnFormat::Internal,
            other => {
                tracing::warn!("Unknown MSISDN format code {}, falling back to friendly", other);
                MsisdnFormat::Friendly
            }
        }
    }

    /// 由名稱取得格式 (不分大小寫)，未知名稱回落至 Friendly
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "plus-international" | "plusinternational" => MsisdnFormat::PlusInternational,
            "international" => MsisdnFormat::International,
            "friendly" | "national" => MsisdnFormat::Friendly,
            "internal" | "bare" => MsisdnFormat::Internal,
            _ => {
                tracing::warn!("Unknown MSISDN format '{}', falling back to friendly", name);
                MsisdnFormat::Friendly
            }
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            MsisdnFormat::PlusInternational => 0,
            MsisdnFormat::International => 1,
            MsisdnFormat::Friendly => 2,
            MsisdnFormat::Internal => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MsisdnFormat::PlusInternational => "plus-international",
            MsisdnFormat::International => "international",
            MsisdnFormat::Friendly => "friendly",
            MsisdnFormat::Internal => "internal",
        }
    }
}

impl From<String> for MsisdnFormat {
    fn from(value: String) -> Self {
        MsisdnFormat::from_name(&value)
    }
}

impl fmt::Display for MsisdnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 單筆格式化結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRecord {
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl FormatRecord {
    pub fn is_ok(&self) -> bool {
        self.output.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub format: MsisdnFormat,
    pub country_code: String,
    pub records: Vec<FormatRecord>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// 只要有任何一筆失敗即回傳 `PartialFailure`
    pub fn ensure_complete(&self) -> Result<()> {
        let failed = self.failed();
        if failed > 0 {
            return Err(MsisdnError::PartialFailure {
                failed,
                total: self.total(),
            });
        }
        Ok(())
    }
}
