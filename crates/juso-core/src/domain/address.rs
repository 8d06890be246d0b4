//! Address domain types.
//!
//! `AddressRecord` is what the lookup service returns and what the settings
//! document caches. `SearchParams` is the raw, UI-shaped request; it is
//! normalized into an `AddressQuery` before any network call is made.

use serde::{Deserialize, Serialize};

/// Page used when the requested page is missing or not a positive integer.
pub const DEFAULT_CURRENT_PAGE: u32 = 1;

/// Page size used when the requested page size is missing or unparseable.
pub const DEFAULT_COUNT_PER_PAGE: u32 = 10;

/// Largest page size the lookup service accepts.
pub const MAX_COUNT_PER_PAGE: u32 = 100;

/// One normalized address result.
///
/// Records are immutable once returned. A result list has no stored key;
/// identity is the position within the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    /// Five-digit postal code.
    #[serde(default)]
    pub zip_no: String,
    /// Road-name address (도로명주소).
    #[serde(default)]
    pub road_addr: String,
    /// Legacy lot-number address (지번주소).
    #[serde(default)]
    pub jibun_addr: String,
    /// English address (영문주소).
    #[serde(default)]
    pub eng_addr: String,
}

impl AddressRecord {
    /// Create a record from its four address forms.
    pub fn new(
        zip_no: impl Into<String>,
        road_addr: impl Into<String>,
        jibun_addr: impl Into<String>,
        eng_addr: impl Into<String>,
    ) -> Self {
        Self {
            zip_no: zip_no.into(),
            road_addr: road_addr.into(),
            jibun_addr: jibun_addr.into(),
            eng_addr: eng_addr.into(),
        }
    }
}

/// Search request as the UI sends it.
///
/// Pagination values arrive as text (they come straight from form state) and
/// are normalized by [`SearchParams::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub keyword: String,
    #[serde(default)]
    pub current_page: String,
    #[serde(default)]
    pub count_per_page: String,
}

impl SearchParams {
    /// Create search parameters for a keyword with explicit pagination.
    pub fn new(
        keyword: impl Into<String>,
        current_page: impl Into<String>,
        count_per_page: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            current_page: current_page.into(),
            count_per_page: count_per_page.into(),
        }
    }

    /// Normalize into a query the lookup service can execute.
    ///
    /// Returns `None` when the keyword is blank; there is nothing to search
    /// for. Unparseable or zero pages fall back to [`DEFAULT_CURRENT_PAGE`];
    /// page sizes fall back to [`DEFAULT_COUNT_PER_PAGE`] and are clamped to
    /// `1..=MAX_COUNT_PER_PAGE`.
    pub fn normalize(&self) -> Option<AddressQuery> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return None;
        }

        let current_page = self
            .current_page
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|page| *page > 0)
            .unwrap_or(DEFAULT_CURRENT_PAGE);

        let count_per_page = self
            .count_per_page
            .trim()
            .parse::<u32>()
            .map_or(DEFAULT_COUNT_PER_PAGE, |count| {
                count.clamp(1, MAX_COUNT_PER_PAGE)
            });

        Some(AddressQuery {
            keyword: keyword.to_string(),
            current_page,
            count_per_page,
        })
    }
}

/// A normalized, executable search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    pub keyword: String,
    pub current_page: u32,
    pub count_per_page: u32,
}
