//! hh.ru vacancies API.

use async_trait::async_trait;
use regex::Regex;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use super::{RawPage, VacancySource};
use crate::consts::{HH_AREA_RUSSIA, HH_URL, PAGE_SIZE};
use crate::error::FetchError;
use crate::http::ApiClient;
use crate::models::{normalize_currency, null_as_default, Vacancy};

lazy_static::lazy_static! {
    static ref HIGHLIGHT_REGEX: Regex = Regex::new(r"</?highlighttext>").unwrap();
}

#[derive(Debug, Deserialize)]
struct HhPage {
    items: Vec<HhVacancy>,
    /// Total number of pages available for the query.
    pages: usize,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HhVacancy {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub employer: Option<HhEmployer>,
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_url: String,
    pub snippet: Option<HhSnippet>,
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HhEmployer {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HhSnippet {
    pub responsibility: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HhSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Serialize)]
struct HhQuery<'a> {
    text: &'a str,
    area: u32,
    page: usize,
    per_page: u32,
    archived: bool,
}

impl From<HhVacancy> for Vacancy {
    fn from(raw: HhVacancy) -> Self {
        let salary = raw.salary.unwrap_or_default();
        Vacancy {
            title: raw.name,
            employer: raw.employer.map(|e| e.name).unwrap_or_default(),
            url: raw.alternate_url,
            description: raw
                .snippet
                .and_then(|s| s.responsibility)
                .map(|text| HIGHLIGHT_REGEX.replace_all(&text, "").into_owned()),
            salary_from: salary.from,
            salary_to: salary.to,
            currency: normalize_currency(salary.currency),
        }
    }
}

pub struct HeadHunter {
    client: ApiClient,
    base_url: String,
    query: String,
    vacancies: Vec<HhVacancy>,
}

impl HeadHunter {
    pub fn new(client: ApiClient, query: impl Into<String>) -> Self {
        Self::with_base_url(client, query, HH_URL)
    }

    pub fn with_base_url(
        client: ApiClient,
        query: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            query: query.into(),
            vacancies: Vec::new(),
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    type Item = HhVacancy;

    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }

    fn items(&self) -> &[HhVacancy] {
        &self.vacancies
    }

    fn items_mut(&mut self) -> &mut Vec<HhVacancy> {
        &mut self.vacancies
    }

    async fn fetch_page(&self, page: usize) -> Result<RawPage<HhVacancy>, FetchError> {
        let query = HhQuery {
            text: &self.query,
            area: HH_AREA_RUSSIA,
            page,
            per_page: PAGE_SIZE,
            archived: false,
        };
        let body: HhPage = self
            .client
            .get_json(&self.base_url, HeaderMap::new(), &query)
            .await?;

        Ok(RawPage {
            items: body.items,
            has_more: body.pages.saturating_sub(page) > 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> HhVacancy {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_fields_and_salary() {
        let vacancy: Vacancy = raw(json!({
            "name": "Rust developer",
            "employer": { "name": "Acme" },
            "alternate_url": "https://hh.ru/vacancy/1",
            "snippet": { "responsibility": "Write <highlighttext>Rust</highlighttext> services" },
            "salary": { "from": 150000, "to": null, "currency": "RUR" }
        }))
        .into();

        assert_eq!(
            vacancy,
            Vacancy {
                title: "Rust developer".into(),
                employer: "Acme".into(),
                url: "https://hh.ru/vacancy/1".into(),
                description: Some("Write Rust services".into()),
                salary_from: Some(150000.0),
                salary_to: None,
                currency: Some("RUR".into()),
            }
        );
    }

    #[test]
    fn null_salary_maps_to_nulls() {
        let vacancy: Vacancy = raw(json!({
            "name": "Tester",
            "employer": { "name": "Acme" },
            "alternate_url": "https://hh.ru/vacancy/2",
            "snippet": { "responsibility": null },
            "salary": null
        }))
        .into();

        assert_eq!(vacancy.salary_from, None);
        assert_eq!(vacancy.salary_to, None);
        assert_eq!(vacancy.currency, None);
        assert_eq!(vacancy.description, None);
    }

    #[test]
    fn missing_employer_is_empty() {
        let vacancy: Vacancy = raw(json!({
            "name": "Anonymous",
            "alternate_url": "https://hh.ru/vacancy/3"
        }))
        .into();

        assert_eq!(vacancy.employer, "");
        assert_eq!(vacancy.currency, None);
    }

    #[test]
    fn null_strings_become_empty() {
        let page: HhPage = serde_json::from_value(json!({
            "items": [
                { "name": "a", "employer": { "name": "Acme" }, "alternate_url": "u1" },
                { "name": null, "employer": { "name": null }, "alternate_url": null, "salary": null }
            ],
            "pages": 1
        }))
        .unwrap();

        let vacancies: Vec<Vacancy> = page.items.into_iter().map(Vacancy::from).collect();
        assert_eq!(vacancies.len(), 2);
        assert_eq!(vacancies[0].employer, "Acme");
        assert_eq!(vacancies[1].title, "");
        assert_eq!(vacancies[1].employer, "");
        assert_eq!(vacancies[1].url, "");
    }
}
