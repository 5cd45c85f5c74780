//! Query-then-redeem exchange for one planned request.

use scraper::Html;
use suimon_types::{DownloadRequest, DownloadToken};
use tracing::debug;

use crate::{FetchError, PortalClient, normalize_payload, parse, url};

impl PortalClient {
    /// Runs one request: queries the display endpoint, extracts the token
    /// and redeems it for the data file.
    ///
    /// Returns `Ok(None)` when the result page carries no download link,
    /// which is how the portal reports an empty span. The payload is
    /// returned as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP round trip fails.
    pub async fn execute_request(
        &self,
        request: &DownloadRequest,
    ) -> Result<Option<Vec<u8>>, FetchError> {
        let page = self
            .get_page(&url::query_url(&self.config().base_url, request))
            .await?;

        let Some(token) = token_in_page(&page) else {
            debug!(span = %request.span, "no download link in result page");
            return Ok(None);
        };

        let payload = self
            .get_bytes(&url::download_url(&self.config().data_host, &token))
            .await?;
        debug!(span = %request.span, %token, bytes = payload.len(), "redeemed token");

        Ok(Some(normalize_payload(&payload)))
    }
}

fn token_in_page(html: &str) -> Option<DownloadToken> {
    parse::extract_token(&Html::parse_document(html))
}
