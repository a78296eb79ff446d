// Extension catalog endpoint functions.
// Page-level queries and the sequential walk over every result page.

use tracing::{debug, info, warn};

use crate::error::Result;

use super::client::{CatalogClient, EXTENSION_QUERY_PATH};
use super::types::{Extension, PageQuery, QueryPage};

impl CatalogClient {
    /// Fetch a single page of the extension query.
    pub async fn query_page(&self, query: &PageQuery) -> Result<QueryPage> {
        let response = self.get_with_params(EXTENSION_QUERY_PATH, query).await?;
        let page: QueryPage = response.json().await?;
        debug!(
            page = query.page,
            records = page.extensions.len(),
            numpages = page.numpages,
            "fetched page"
        );
        Ok(page)
    }

    /// Fetch every page in order and concatenate the records.
    ///
    /// Page 1 tells how many pages exist; pages 2..=numpages follow one
    /// after another. `on_page` receives the 0-based index of each page
    /// just before it is requested.
    pub async fn fetch_all(
        &self,
        sort: Option<&str>,
        shell_version: Option<&str>,
        mut on_page: impl FnMut(u64),
    ) -> Result<Vec<Extension>> {
        let first = PageQuery::first(sort, shell_version);

        on_page(0);
        let first_page = self.query_page(&first).await?;
        let numpages = first_page.numpages;
        if first_page.extensions.is_empty() && numpages > 1 {
            warn!(numpages, "first page is empty but more pages are announced");
        }

        let mut extensions = first_page.extensions;
        for n in 1..numpages {
            on_page(n);
            let page = self.query_page(&first.with_page(n + 1)).await?;
            extensions.extend(page.extensions);
        }

        info!(pages = numpages.max(1), records = extensions.len(), "catalog fetched");
        Ok(extensions)
    }
}
