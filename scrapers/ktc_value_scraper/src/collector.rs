use anyhow::{Context, Result};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ScraperConfig;
use crate::types::{RankingKind, RawLabel, RosterFormat};
use crate::utils::stripped_text;

/// Pages requested per pass. KTC never reports how many pages exist, so
/// every pass reads exactly this many.
pub const PAGE_COUNT: u32 = 10;

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(
        &self,
        kind: RankingKind,
        format: RosterFormat,
        page: u32,
    ) -> Result<String>;
}

pub struct HttpPageSource {
    client: Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.scraping.user_agent)
            .timeout(Duration::from_secs(config.scraping.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.source.base_url.clone(),
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(
        &self,
        kind: RankingKind,
        format: RosterFormat,
        page: u32,
    ) -> Result<String> {
        let url = format!("{}/{}", self.base_url, kind.path());
        let code = format.code(kind);
        debug!("Fetching {} page {} (format={})", url, page, code);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("page", page.to_string()),
                ("filters", kind.filters().to_string()),
                ("format", code.to_string()),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to fetch {} page {}", url, page))?;

        // Error pages are parsed like any other and yield no entries.
        let status = response.status();
        if !status.is_success() {
            warn!("Fetching {} page {} returned HTTP {}", url, page, status);
        }

        response.text().await.context("Failed to read response body")
    }
}

struct ListingSelectors {
    entry: Selector,
    name: Selector,
    rank: Selector,
    value: Selector,
    age: Selector,
}

impl ListingSelectors {
    fn new() -> Result<Self> {
        let parse = |css: &str| {
            Selector::parse(css)
                .map_err(|e| anyhow::anyhow!("Failed to create selector {}: {}", css, e))
        };
        Ok(Self {
            entry: parse(".onePlayer")?,
            name: parse(".player-name")?,
            rank: parse(".position:not(.hidden-xs)")?,
            value: parse(".value")?,
            age: parse(".position.hidden-xs")?,
        })
    }
}

/// Raw labels of every player entry on one listing page, in document order.
pub fn parse_listing(html: &str) -> Result<Vec<RawLabel>> {
    let selectors = ListingSelectors::new()?;
    let document = Html::parse_document(html);
    let mut labels = Vec::new();

    for (entry_index, entry) in document.select(&selectors.entry).enumerate() {
        let name = stripped_text(&entry, &selectors.name);
        let rank = stripped_text(&entry, &selectors.rank);
        let value = stripped_text(&entry, &selectors.value);

        match (name, rank, value) {
            (Some(display_text), Some(rank_text), Some(value_text)) => labels.push(RawLabel {
                display_text,
                rank_text,
                value_text,
                age_text: stripped_text(&entry, &selectors.age),
            }),
            (name, _, _) => {
                warn!(
                    "Skipping entry {} ({}): missing name, position or value",
                    entry_index,
                    name.unwrap_or_default()
                );
            }
        }
    }

    Ok(labels)
}

pub struct PassCollector<S> {
    source: S,
}

impl<S: PageSource> PassCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches all pages of one listing before returning, flattened in
    /// page order.
    pub async fn collect(
        &self,
        kind: RankingKind,
        format: RosterFormat,
    ) -> Result<Vec<RawLabel>> {
        let progress = ProgressBar::new(PAGE_COUNT as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} pages")
                .context("Invalid progress template")?,
        );
        progress.set_message(format!(
            "Linking to keeptradecut.com's {:?} {} rankings...",
            kind,
            format.label()
        ));

        let mut labels = Vec::new();
        for page in 0..PAGE_COUNT {
            let html = self.source.fetch_page(kind, format, page).await?;
            let page_labels = parse_listing(&html)?;
            debug!("Page {} yielded {} entries", page, page_labels.len());
            labels.extend(page_labels);
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            "Collected {} entries from {:?} {} rankings",
            labels.len(),
            kind,
            format.label()
        );
        Ok(labels)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    pub fn entry(name: &str, team: &str, rank: &str, value: &str, age: Option<&str>) -> String {
        let age = age
            .map(|a| format!(r#"<div class="position hidden-xs">{} yo</div>"#, a))
            .unwrap_or_default();
        format!(
            r#"<div class="onePlayer">
                 <div class="player-name"><p><a href="/p">{}</a></p><span class="player-team">{}</span></div>
                 <div class="position-team"><p class="position">{}</p></div>
                 {}
                 <div class="value"><p>{}</p></div>
               </div>"#,
            name, team, rank, age, value
        )
    }

    pub fn page(entries: &[String]) -> String {
        format!(
            "<html><body><div id=\"rankings-page-rankings\">{}</div></body></html>",
            entries.concat()
        )
    }

    /// Serves canned pages and records every request.
    #[derive(Default)]
    pub struct FakeSource {
        pub pages: HashMap<(u8, &'static str, u32), String>,
        pub requests: Mutex<Vec<(RankingKind, RosterFormat, u32)>>,
    }

    impl FakeSource {
        pub fn with_page(
            mut self,
            kind: RankingKind,
            format: RosterFormat,
            page: u32,
            html: String,
        ) -> Self {
            self.pages.insert((format.code(kind), kind.path(), page), html);
            self
        }
    }

    #[async_trait]
    impl PageSource for FakeSource {
        async fn fetch_page(
            &self,
            kind: RankingKind,
            format: RosterFormat,
            page: u32,
        ) -> Result<String> {
            self.requests.lock().unwrap().push((kind, format, page));
            Ok(self
                .pages
                .get(&(format.code(kind), kind.path(), page))
                .cloned()
                .unwrap_or_else(|| page_html_empty()))
        }
    }

    fn page_html_empty() -> String {
        page(&[])
    }

    #[test]
    fn test_parse_listing() {
        let html = page(&[
            entry("Justin Jefferson", "MIN", "WR1", "9998", Some("25.1")),
            entry("2025 Early 1st", "", "PI1", "6000", None),
        ]);

        let labels = parse_listing(&html).unwrap();
        assert_eq!(
            labels,
            vec![
                RawLabel::new("Justin JeffersonMIN", "WR1", "9998", Some("25.1 yo")),
                RawLabel::new("2025 Early 1st", "PI1", "6000", None),
            ]
        );
    }

    #[test]
    fn test_parse_listing_skips_incomplete_entries() {
        let html = page(&[
            r#"<div class="onePlayer"><div class="player-name">No Value</div><p class="position">QB1</p></div>"#.to_string(),
            entry("Josh Allen", "BUF", "QB1", "9000", None),
        ]);

        let labels = parse_listing(&html).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].display_text, "Josh AllenBUF");
    }

    #[tokio::test]
    async fn test_collect_reads_exactly_ten_pages_in_order() {
        let source = FakeSource::default()
            .with_page(
                RankingKind::Dynasty,
                RosterFormat::OneQb,
                0,
                page(&[entry("Josh Allen", "BUF", "QB1", "9000", None)]),
            )
            .with_page(
                RankingKind::Dynasty,
                RosterFormat::OneQb,
                9,
                page(&[entry("Zach Ertz", "FA", "TE40", "100", None)]),
            )
            .with_page(
                RankingKind::Dynasty,
                RosterFormat::OneQb,
                10,
                page(&[entry("Never Fetched", "NYG", "WR200", "1", None)]),
            );
        let collector = PassCollector::new(source);

        let labels = collector
            .collect(RankingKind::Dynasty, RosterFormat::OneQb)
            .await
            .unwrap();

        let names: Vec<_> = labels.iter().map(|l| l.display_text.as_str()).collect();
        assert_eq!(names, ["Josh AllenBUF", "Zach ErtzFA"]);

        let requests = collector.source.requests.lock().unwrap();
        let pages: Vec<_> = requests.iter().map(|r| r.2).collect();
        assert_eq!(pages, (0..10).collect::<Vec<_>>());
    }
}
