use std::io;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter,
};

use vacancy_aggregator::consts::DEFAULT_LOG_FILTERS;
use vacancy_aggregator::opts::{Opts, OutputFormat, SourceKind};
use vacancy_aggregator::render::{print_vacancies, write_jsonl};
use vacancy_aggregator::{collect, get_coefficient, ApiClient, HeadHunter, SuperJob, Vacancy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let mut filter = EnvFilter::builder()
        .with_default_directive(opts.log.into())
        .with_env_var("LOG")
        .from_env_lossy();

    for rule in DEFAULT_LOG_FILTERS {
        filter = filter.add_directive(rule.parse().expect("DEFAULT_LOG_FILTERS misconfiguration"));
    }
    registry().with(filter).with(layer().with_writer(io::stderr)).init();

    let client = ApiClient::new(opts.fetch_settings())?;

    let mut vacancies: Vec<Vacancy> = Vec::new();
    if matches!(opts.source, SourceKind::Hh | SourceKind::All) {
        let mut hh = HeadHunter::new(client.clone(), opts.query.as_str());
        vacancies.extend(collect(&mut hh, opts.pages).await);
    }
    if matches!(opts.source, SourceKind::Sj | SourceKind::All) {
        if opts.sj_app_id.is_none() {
            warn!("SJ_APP_ID is not set, SuperJob will most likely refuse the requests");
        }
        let mut sj = SuperJob::new(client.clone(), opts.query.as_str(), opts.sj_app_id.clone());
        vacancies.extend(collect(&mut sj, opts.pages).await);
    }
    info!(total = vacancies.len(), query = %opts.query, "vacancies collected");

    let stdout = io::stdout();
    match opts.format {
        OutputFormat::Text => print_vacancies(&mut stdout.lock(), &vacancies)?,
        OutputFormat::Jsonl => write_jsonl(stdout.lock(), &vacancies)?,
    }

    if let Some(code) = opts.rate.as_deref() {
        match get_coefficient(&client, code).await {
            Some(value) => println!("1 {code} = {value} RUB"),
            None => println!("1 {code} = unknown"),
        }
    }

    Ok(())
}
