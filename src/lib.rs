//! ego-ranking: scan the GNOME extensions catalog.
//!
//! Loads the full extension list from a local cache or from the
//! extensions.gnome.org query API, then reports the extensions written by
//! one creator or matching a keyword pattern.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod report;

use std::io::Write;

use tracing::info;

pub use cache::Source;
pub use catalog::{CatalogClient, Extension};
pub use config::{Cli, Config};
pub use error::{RankingError, Result};
pub use filter::{MatchKind, Matcher};
pub use report::ReportSummary;

/// Load (or fetch) the extension list and write the report to `out`.
///
/// Progress lines `page <n>` are written to `out` while fetching.
pub async fn run<W: Write>(
    config: &Config,
    matcher: &Matcher,
    client: &CatalogClient,
    mut out: W,
) -> Result<ReportSummary> {
    let mut progress = Ok(());
    let (extensions, source) = cache::load_or_fetch(config, client, |n| {
        if progress.is_ok() {
            progress = writeln!(out, "page {}", n);
        }
    })
    .await?;
    progress?;

    let summary = report::write_report(&extensions, matcher, &mut out)?;
    info!(
        ?source,
        total = summary.total,
        matched = summary.matched,
        "report written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::client::EXTENSION_QUERY_PATH;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn matcher() -> Matcher {
        Matcher::new("Deminder", "Shutdown|OSD", "43").unwrap()
    }

    async fn mount_page(server: &MockServer, page: u64, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(EXTENSION_QUERY_PATH))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn run_to_string(config: &Config, client: &CatalogClient) -> (String, ReportSummary) {
        let mut out = Vec::new();
        let summary = run(config, &matcher(), client, &mut out).await.unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[tokio::test]
    async fn test_fetch_then_cached_run() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            cache_path: temp_dir.path().join("ranking-downloads.json"),
            refetch: true,
            ..Config::default()
        };

        let server = MockServer::start().await;
        mount_page(
            &server,
            1,
            json!({"numpages": 2, "extensions": [
                {"creator": "a", "uuid": "osd@a", "name": "OSD", "description": "",
                 "shell_version_map": {"43": {}}},
                {"creator": "b", "uuid": "dock@b", "name": "Dock", "description": ""}
            ]}),
        )
        .await;
        mount_page(
            &server,
            2,
            json!({"numpages": 2, "extensions": [
                {"creator": "Deminder", "uuid": "st@deminder", "name": "Timer",
                 "description": "", "shell_version_map": {"44": {}}}
            ]}),
        )
        .await;
        let client = CatalogClient::with_base_url(server.uri()).unwrap();

        let (fetched, summary) = run_to_string(&config, &client).await;
        assert_eq!(
            fetched,
            "page 0\npage 1\n0 a osd@a \n2 *Deminder st@deminder [old]\n3 [last]\n"
        );
        assert_eq!(summary, ReportSummary { total: 3, matched: 2 });

        // Same data from the cache: no progress lines, same report.
        let cached_config = Config {
            refetch: false,
            ..config
        };
        let (first, _) = run_to_string(&cached_config, &client).await;
        let (second, _) = run_to_string(&cached_config, &client).await;
        assert_eq!(first, "0 a osd@a \n2 *Deminder st@deminder [old]\n3 [last]\n");
        assert_eq!(first, second);
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cached_total_matches_cache_length() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("cache.json");
        let records: Vec<Extension> = (0..5)
            .map(|i| serde_json::from_value(json!({ "uuid": format!("ext{i}@x") })).unwrap())
            .collect();
        cache::write_extensions(&cache_path, &records).unwrap();

        let config = Config {
            cache_path,
            ..Config::default()
        };
        let client = CatalogClient::new().unwrap();

        let (output, summary) = run_to_string(&config, &client).await;
        assert_eq!(output, "5 [last]\n");
        assert_eq!(summary.total, records.len());
    }
}
