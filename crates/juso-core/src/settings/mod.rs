//! Settings domain types.
//!
//! This module contains the persisted settings document, its deep-partial
//! patch types, and the schema trait that lets `SettingsManager` work over
//! any document shape. These are pure domain types with no infrastructure
//! dependencies.

mod merge;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{AddressQuery, AddressRecord};

pub use merge::{apply_defaults, deep_merge, merge_partial, to_entries};

/// Store key for the per-field display toggles.
pub const SETTINGS_KEY_SEARCH_RESULT: &str = "searchResult";

/// Store key for the cached result list of the last search.
pub const SETTINGS_KEY_CACHED_DATA: &str = "addressData";

/// Store key for the parameters of the last search.
pub const SETTINGS_KEY_PREV_SEARCH: &str = "prevSearchKey";

/// A document that `SettingsManager` can load, default and patch.
///
/// The document serializes to a JSON object whose top-level keys are
/// [`SettingsSchema::KEYS`]; each key is stored as its own store entry.
/// `Partial` is the deep-partial form of the document: it must serialize
/// only the fields that are being changed.
pub trait SettingsSchema: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Deep-partial update type for this document.
    type Partial: Serialize + Send + Sync + 'static;

    /// Top-level store keys owned by this document.
    const KEYS: &'static [&'static str];

    /// The fully defaulted document used on first run.
    fn defaults() -> Self;
}

/// Settings persisted between front-end sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    /// Which address forms to show for each result.
    #[serde(default)]
    pub search_result: SearchResultDisplay,

    /// Results of the last completed search, in service order.
    #[serde(default)]
    pub address_data: Vec<AddressRecord>,

    /// Parameters of the last completed search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_search_key: Option<PrevSearchKey>,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self::defaults()
    }
}

impl SettingsSchema for SettingsDocument {
    type Partial = SettingsPatch;

    const KEYS: &'static [&'static str] = &[
        SETTINGS_KEY_SEARCH_RESULT,
        SETTINGS_KEY_CACHED_DATA,
        SETTINGS_KEY_PREV_SEARCH,
    ];

    fn defaults() -> Self {
        Self {
            search_result: SearchResultDisplay::default(),
            address_data: Vec::new(),
            prev_search_key: None,
        }
    }
}

impl SettingsDocument {
    /// Keyword to restore into the search box, if a previous search exists.
    pub fn restored_keyword(&self) -> Option<&str> {
        if self.address_data.is_empty() {
            return None;
        }
        self.prev_search_key
            .as_ref()
            .map(|key| key.keyword.as_str())
    }
}

/// Per-field display toggles for search results.
///
/// Each key defaults independently: a stored document missing `showRoad`
/// still shows road addresses, while an explicit `false` is kept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultDisplay {
    pub show_eng: bool,
    pub show_road: bool,
    pub show_legacy: bool,
}

impl Default for SearchResultDisplay {
    fn default() -> Self {
        Self {
            show_eng: false,
            show_road: true,
            show_legacy: true,
        }
    }
}

impl SearchResultDisplay {
    /// Current value of one toggle.
    pub const fn get(&self, field: DisplayField) -> bool {
        match field {
            DisplayField::Eng => self.show_eng,
            DisplayField::Road => self.show_road,
            DisplayField::Legacy => self.show_legacy,
        }
    }

    /// Overwrite one toggle.
    pub const fn set(&mut self, field: DisplayField, value: bool) {
        match field {
            DisplayField::Eng => self.show_eng = value,
            DisplayField::Road => self.show_road = value,
            DisplayField::Legacy => self.show_legacy = value,
        }
    }
}

/// One of the three optional address forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    /// English address (영문주소).
    Eng,
    /// Road-name address (도로명주소).
    Road,
    /// Legacy lot-number address (지번주소).
    Legacy,
}

/// Parameters of the last completed search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PrevSearchKey {
    pub keyword: String,
    pub current_page: String,
    pub count_per_page: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Deep-partial updates
// ─────────────────────────────────────────────────────────────────────────────

/// Deep-partial update of a [`SettingsDocument`].
///
/// `None` means "leave this field alone". Nested patches only touch the
/// fields they set; `address_data` replaces the whole list.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_result: Option<SearchResultDisplayPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_data: Option<Vec<AddressRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_search_key: Option<PrevSearchKeyPatch>,
}

/// Deep-partial update of [`SearchResultDisplay`].
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultDisplayPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_eng: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_road: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_legacy: Option<bool>,
}

/// Deep-partial update of [`PrevSearchKey`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrevSearchKeyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_per_page: Option<String>,
}

impl SettingsPatch {
    /// Patch that sets a single display toggle.
    pub fn display(field: DisplayField, value: bool) -> Self {
        let mut search_result = SearchResultDisplayPatch::default();
        match field {
            DisplayField::Eng => search_result.show_eng = Some(value),
            DisplayField::Road => search_result.show_road = Some(value),
            DisplayField::Legacy => search_result.show_legacy = Some(value),
        }
        Self {
            search_result: Some(search_result),
            ..Default::default()
        }
    }

    /// Patch that caches a completed search and the query that produced it.
    pub fn cached_search(query: &AddressQuery, records: Vec<AddressRecord>) -> Self {
        Self {
            address_data: Some(records),
            prev_search_key: Some(PrevSearchKeyPatch {
                keyword: Some(query.keyword.clone()),
                current_page: Some(query.current_page.to_string()),
                count_per_page: Some(query.count_per_page.to_string()),
            }),
            ..Default::default()
        }
    }
}

/// Errors surfaced by `SettingsManager`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    /// No backing store in this host, or the store refused the write.
    #[error("Settings persistence unavailable: {reason}")]
    PersistenceUnavailable { reason: String },

    /// The document or a patch could not be converted to or from JSON.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
