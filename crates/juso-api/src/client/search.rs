//! Address search.

use juso_core::{AddressQuery, AddressRecord};
use tracing::debug;

use super::JusoClient;
use crate::error::{JusoError, JusoResult};
use crate::http::HttpBackend;
use crate::models::{JusoResponse, JusoSearchPage};
use crate::url::build_search_url;

impl<B: HttpBackend> JusoClient<B> {
    /// Fetch one page of results for `query`.
    ///
    /// A non-`"0"` `errorCode` becomes [`JusoError::Service`], even when the
    /// HTTP status was 200.
    pub async fn search_page(&self, query: &AddressQuery) -> JusoResult<JusoSearchPage> {
        let url = build_search_url(&self.config, query)?;
        let response: JusoResponse = self.backend.get_json(&url).await?;
        let results = response.results;

        if !results.common.is_success() {
            return Err(JusoError::Service {
                code: results.common.error_code,
                message: results.common.error_message,
            });
        }

        let total_count = results.common.total_count();
        let items = match results.juso {
            Some(items) => items,
            None if total_count == 0 => Vec::new(),
            None => {
                return Err(JusoError::InvalidResponse {
                    message: format!("totalCount is {total_count} but juso is missing"),
                });
            }
        };
        let records: Vec<AddressRecord> = items
            .into_iter()
            .map(AddressRecord::from)
            .collect();

        debug!(
            keyword = %query.keyword,
            page = query.current_page,
            returned = records.len(),
            total_count,
            "Address API page fetched"
        );

        Ok(JusoSearchPage {
            records,
            total_count,
        })
    }
}
