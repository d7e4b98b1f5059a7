use std::time::Duration;

pub const DEFAULT_LOG_FILTERS: &[&str] = &[
    #[cfg(not(debug_assertions))]
    "mio=info",
    "hyper_util=info",
    "reqwest=info",
    "rustls=info",
    "hickory_resolver=info",
    "hickory_proto=info",
];

pub const HH_URL: &str = "https://api.hh.ru/vacancies";
pub const SJ_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const CBR_DAILY_URL: &str = "https://www.cbr-xml-daily.ru/daily_json.js";

pub const USER_AGENT: &str = "vacancy-aggregator/0.1 (vacancy-aggregator-feedback@example.com)";

/// Items requested per page from either source.
pub const PAGE_SIZE: u32 = 100;
/// hh.ru area code for the whole of Russia.
pub const HH_AREA_RUSSIA: u32 = 113;
/// SuperJob town filter; 0 disables it.
pub const SJ_TOWN_ANY: u32 = 0;

pub const DEFAULT_PAGES: usize = 20;
pub const PAGE_PAUSE: Duration = Duration::from_millis(500);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Currencies the CBR table is quoted against.
pub const BASE_CURRENCIES: &[&str] = &["RUB", "RUR"];
