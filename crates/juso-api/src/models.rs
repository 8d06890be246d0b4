//! Internal types for the juso.go.kr API.
//!
//! Wire structs mirror the JSON the service returns with `resultType=json`.
//! Every numeric field arrives as a string.

use juso_core::AddressRecord;
use serde::Deserialize;
use url::Url;

// ============================================================================
// Internal Configuration
// ============================================================================

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct JusoConfig {
    /// Search endpoint
    pub base_url: Url,
    /// Approval key sent as `confmKey`
    pub confm_key: Option<String>,
}

// ============================================================================
// Wire Format
// ============================================================================

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JusoResponse {
    pub results: JusoResults,
}

/// `results` object: a status block plus the matched addresses.
#[derive(Debug, Clone, Deserialize)]
pub struct JusoResults {
    pub common: JusoCommon,
    /// `null` when the request was rejected.
    #[serde(default)]
    pub juso: Option<Vec<JusoItem>>,
}

/// `results.common`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JusoCommon {
    /// `"0"` on success.
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub total_count: String,
}

impl JusoCommon {
    pub fn is_success(&self) -> bool {
        self.error_code == "0"
    }

    /// Total number of matches across all pages; 0 if missing or malformed.
    pub fn total_count(&self) -> u64 {
        self.total_count.trim().parse().unwrap_or(0)
    }
}

/// One entry of `results.juso`.
///
/// The service sends many more fields (administrative codes, building
/// names); only the four address forms are kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JusoItem {
    #[serde(default)]
    pub zip_no: String,
    #[serde(default)]
    pub road_addr: String,
    #[serde(default)]
    pub jibun_addr: String,
    #[serde(default)]
    pub eng_addr: String,
}

impl From<JusoItem> for AddressRecord {
    fn from(item: JusoItem) -> Self {
        Self::new(item.zip_no, item.road_addr, item.jibun_addr, item.eng_addr)
    }
}

// ============================================================================
// Search Results
// ============================================================================

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JusoSearchPage {
    /// Records in service order.
    pub records: Vec<AddressRecord>,
    /// Matches across all pages.
    pub total_count: u64,
}
