//! MSISDN 格式化器
//!
//! 所有格式化器共用同一張前綴判斷表：
//!
//! 1. 號碼以國碼開頭，且國碼帶 `+`
//! 2. 號碼以國碼開頭，且國碼不帶 `+`
//! 3. 號碼以國內冠碼 `0` 開頭
//! 4. 其他
//!
//! 由上而下第一個符合的列生效，各格式只差在每列的處理方式。

use crate::domain::model::MsisdnFormat;
use crate::utils::error::{MsisdnError, Result};
use std::fmt;

/// 帶 `+` 國碼固定移除的字元數 (`+` 加三位數字)
const PLUS_CODE_WIDTH: usize = 4;
/// 不帶 `+` 國碼固定移除的字元數 (三位數字)
const BARE_CODE_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    PlusCountryCode,
    BareCountryCode,
    NationalZero,
    Other,
}

fn classify(msisdn: &str, country_code: &str) -> Prefix {
    if msisdn.starts_with(country_code) {
        if country_code.starts_with('+') {
            Prefix::PlusCountryCode
        } else {
            Prefix::BareCountryCode
        }
    } else if msisdn.starts_with('0') {
        Prefix::NationalZero
    } else {
        Prefix::Other
    }
}

/// 移除前 `count` 個字元，長度不足時回傳 `InvalidInput`
fn strip_chars(msisdn: &str, count: usize) -> Result<&str> {
    match msisdn.char_indices().nth(count) {
        Some((idx, _)) => Ok(&msisdn[idx..]),
        None => {
            let actual = msisdn.chars().count();
            if actual == count {
                Ok("")
            } else {
                Err(MsisdnError::InvalidInput {
                    msisdn: msisdn.to_string(),
                    required: count,
                    actual,
                })
            }
        }
    }
}

fn plus_international(msisdn: &str, country_code: &str) -> Result<String> {
    Ok(match classify(msisdn, country_code) {
        Prefix::PlusCountryCode => msisdn.to_string(),
        Prefix::BareCountryCode | Prefix::Other => format!("+{}{}", country_code, msisdn),
        Prefix::NationalZero => format!("+{}{}", country_code, strip_chars(msisdn, 1)?),
    })
}

fn international(msisdn: &str, country_code: &str) -> Result<String> {
    let msisdn = msisdn.trim();

    Ok(match classify(msisdn, country_code) {
        Prefix::PlusCountryCode => strip_chars(msisdn, 1)?.to_string(),
        Prefix::BareCountryCode => msisdn.to_string(),
        Prefix::NationalZero => format!("{}{}", strip_chars(msisdn, 1)?, country_code),
        Prefix::Other => format!("{}{}", msisdn, country_code),
    })
}

fn friendly(msisdn: &str, country_code: &str) -> Result<String> {
    Ok(match classify(msisdn, country_code) {
        Prefix::PlusCountryCode => format!("0{}", strip_chars(msisdn, PLUS_CODE_WIDTH)?),
        Prefix::BareCountryCode => format!("0{}", strip_chars(msisdn, BARE_CODE_WIDTH)?),
        Prefix::NationalZero => msisdn.to_string(),
        Prefix::Other => format!("0{}", msisdn),
    })
}

fn internal(msisdn: &str, country_code: &str) -> Result<String> {
    let national = match classify(msisdn, country_code) {
        Prefix::PlusCountryCode => strip_chars(msisdn, PLUS_CODE_WIDTH)?,
        Prefix::BareCountryCode => strip_chars(msisdn, BARE_CODE_WIDTH)?,
        Prefix::NationalZero => strip_chars(msisdn, 1)?,
        Prefix::Other => msisdn,
    };
    Ok(national.to_string())
}

/// 綁定單一 [`MsisdnFormat`] 的格式化器
///
/// 無狀態且為 `Copy`，可跨執行緒共用
#[derive(Clone, Copy)]
pub struct Formatter {
    kind: MsisdnFormat,
    apply: fn(&str, &str) -> Result<String>,
}

impl Formatter {
    pub fn kind(&self) -> MsisdnFormat {
        self.kind
    }

    /// 依所選格式轉換號碼
    pub fn format(&self, msisdn: &str, country_code: &str) -> Result<String> {
        let formatted = (self.apply)(msisdn, country_code)?;
        tracing::debug!(
            "Formatted '{}' with country code '{}' as {}: '{}'",
            msisdn,
            country_code,
            self.kind,
            formatted
        );
        Ok(formatted)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter").field("kind", &self.kind).finish()
    }
}

impl PartialEq for Formatter {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Formatter {}

/// 依格式取得對應的格式化器
pub fn select_formatter(format: MsisdnFormat) -> Formatter {
    let apply: fn(&str, &str) -> Result<String> = match format {
        MsisdnFormat::PlusInternational => plus_international,
        MsisdnFormat::International => international,
        MsisdnFormat::Friendly => friendly,
        MsisdnFormat::Internal => internal,
    };
    tracing::debug!("Selected {} formatter", format);
    Formatter {
        kind: format,
        apply,
    }
}

/// 依數字代碼取得格式化器，未知代碼回落至 Friendly
pub fn select_formatter_by_code(code: i32) -> Formatter {
    select_formatter(MsisdnFormat::from_code(code))
}

/// 依名稱取得格式化器，未知名稱回落至 Friendly
pub fn select_formatter_by_name(name: &str) -> Formatter {
    select_formatter(MsisdnFormat::from_name(name))
}
