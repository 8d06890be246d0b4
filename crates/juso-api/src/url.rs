//! URL construction helpers for the juso.go.kr API.
//!
//! Pure functions, so the exact query string can be tested without a
//! network.

use juso_core::AddressQuery;
use url::Url;

use crate::error::{JusoError, JusoResult};
use crate::models::JusoConfig;

/// Build the search URL for one page of results.
///
/// Parameters: `confmKey`, `currentPage`, `countPerPage`, `keyword` and
/// `resultType=json`.
pub fn build_search_url(config: &JusoConfig, query: &AddressQuery) -> JusoResult<Url> {
    let key = config
        .confm_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or(JusoError::MissingKey)?;

    let mut url = config.base_url.clone();
    let query_string = format!(
        "confmKey={}&currentPage={}&countPerPage={}&keyword={}&resultType=json",
        urlencoding::encode(key.trim()),
        query.current_page,
        query.count_per_page,
        urlencoding::encode(&query.keyword),
    );
    url.set_query(Some(&query_string));

    Ok(url)
}

/// The URL with its query string removed, safe to log or put in errors.
pub fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}
