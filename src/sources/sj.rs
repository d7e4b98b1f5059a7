//! SuperJob vacancies API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{RawPage, VacancySource};
use crate::consts::{PAGE_SIZE, SJ_TOWN_ANY, SJ_URL};
use crate::error::FetchError;
use crate::http::ApiClient;
use crate::models::{normalize_currency, null_as_default, Vacancy};

const APP_ID_HEADER: &str = "x-api-app-id";

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjVacancy>,
    more: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SjVacancy {
    #[serde(deserialize_with = "null_as_default")]
    pub profession: String,
    #[serde(deserialize_with = "null_as_default")]
    pub firm_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    pub candidat: Option<String>,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Serialize)]
struct SjQuery<'a> {
    keyword: &'a str,
    town: u32,
    count: u32,
    page: usize,
    archived: bool,
}

impl From<SjVacancy> for Vacancy {
    fn from(raw: SjVacancy) -> Self {
        Vacancy {
            title: raw.profession,
            employer: raw.firm_name,
            url: raw.link,
            description: raw.candidat,
            salary_from: raw.payment_from,
            salary_to: raw.payment_to,
            currency: normalize_currency(raw.currency),
        }
    }
}

pub struct SuperJob {
    client: ApiClient,
    base_url: String,
    query: String,
    app_id: Option<String>,
    vacancies: Vec<SjVacancy>,
}

impl SuperJob {
    pub fn new(client: ApiClient, query: impl Into<String>, app_id: Option<String>) -> Self {
        Self::with_base_url(client, query, app_id, SJ_URL)
    }

    pub fn with_base_url(
        client: ApiClient,
        query: impl Into<String>,
        app_id: Option<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            query: query.into(),
            app_id,
            vacancies: Vec::new(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(app_id) = &self.app_id {
            match HeaderValue::from_str(app_id) {
                Ok(value) => {
                    headers.insert(APP_ID_HEADER, value);
                }
                Err(err) => warn!(%err, "ignoring malformed SuperJob app id"),
            }
        }
        headers
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    type Item = SjVacancy;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }

    fn items(&self) -> &[SjVacancy] {
        &self.vacancies
    }

    fn items_mut(&mut self) -> &mut Vec<SjVacancy> {
        &mut self.vacancies
    }

    async fn fetch_page(&self, page: usize) -> Result<RawPage<SjVacancy>, FetchError> {
        let query = SjQuery {
            keyword: &self.query,
            town: SJ_TOWN_ANY,
            count: PAGE_SIZE,
            page,
            archived: false,
        };
        let body: SjPage = self
            .client
            .get_json(&self.base_url, self.headers(), &query)
            .await?;

        Ok(RawPage {
            items: body.objects,
            has_more: body.more,
        })
    }
}
