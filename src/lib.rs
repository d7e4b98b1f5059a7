//! Aggregates vacancies from the hh.ru and SuperJob search APIs into one
//! record shape.

pub mod consts;
pub mod currency;
pub mod error;
pub mod http;
pub mod models;
pub mod opts;
pub mod render;
pub mod sources;

pub use currency::get_coefficient;
pub use error::FetchError;
pub use http::{ApiClient, FetchSettings};
pub use models::Vacancy;
pub use sources::{collect, HeadHunter, RawPage, SuperJob, VacancySource};
