use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::consts::DEFAULT_PAGES;
use crate::http::FetchSettings;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// hh.ru
    Hh,
    /// superjob.ru
    Sj,
    /// Both sources, one after the other
    All,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Jsonl,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Log level of application
    #[arg(short, long, env = "LOG_LEVEL", default_value_t = LevelFilter::INFO)]
    pub log: LevelFilter,

    /// Free-text vacancy filter
    #[arg(short, long, env)]
    pub query: String,

    #[arg(short, long, env, value_enum, default_value_t = SourceKind::All)]
    pub source: SourceKind,

    /// Upper bound of pages requested from each source
    #[arg(short, long, env, default_value_t = DEFAULT_PAGES)]
    pub pages: usize,

    #[arg(short, long, env, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// SuperJob application key, sent as X-Api-App-Id
    #[arg(long, env = "SJ_APP_ID")]
    pub sj_app_id: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env, default_value_t = 30)]
    pub timeout: u64,

    /// Also report the rouble coefficient of this currency code
    #[arg(long, env)]
    pub rate: Option<String>,
}

impl Opts {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.timeout.max(1)),
            ..FetchSettings::default()
        }
    }
}
