//! Paged job-search APIs and the fetch cycle they share.

pub mod hh;
pub mod sj;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::FetchError;
use crate::http::ApiClient;
use crate::models::Vacancy;

pub use hh::HeadHunter;
pub use sj::SuperJob;

/// Items of one page together with the source's end-of-results signal,
/// both taken from the same response.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Source-specific item as it comes off the wire.
    type Item: Into<Vacancy> + Clone + Send + Sync;

    fn name(&self) -> &'static str;

    fn client(&self) -> &ApiClient;

    /// Items accumulated by the current fetch cycle.
    fn items(&self) -> &[Self::Item];

    fn items_mut(&mut self) -> &mut Vec<Self::Item>;

    async fn fetch_page(&self, page: usize) -> Result<RawPage<Self::Item>, FetchError>;

    /// Runs one fetch cycle over pages `0..max_pages`, stopping early once
    /// the source reports no further results. A failed page is logged and
    /// skipped; items of the other pages are kept.
    async fn fetch_all(&mut self, max_pages: usize) {
        self.items_mut().clear();
        let pause = self.client().settings().page_pause;

        for page in 0..max_pages {
            match self.fetch_page(page).await {
                Ok(RawPage { items, has_more }) => {
                    info!(source = self.name(), page = page + 1, count = items.len(), "loaded page");
                    self.items_mut().extend(items);
                    if !has_more {
                        info!(source = self.name(), "no more results");
                        break;
                    }
                }
                Err(err) => {
                    warn!(source = self.name(), page = page + 1, %err, "skipping page");
                }
            }

            if page + 1 < max_pages && !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }
    }

    fn normalize(&self) -> Vec<Vacancy> {
        self.items().iter().cloned().map(Into::into).collect()
    }
}

/// Runs a full fetch cycle on `source` and returns its normalized records.
pub async fn collect<S: VacancySource>(source: &mut S, max_pages: usize) -> Vec<Vacancy> {
    source.fetch_all(max_pages).await;
    let vacancies = source.normalize();
    info!(source = source.name(), total = vacancies.len(), "fetch cycle finished");
    vacancies
}
