use anyhow::Result;
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::info;

use ktc_value_scraper::{
    collector::{HttpPageSource, PassCollector},
    config::{database_url_from_env, table_from_env, DatastoreConfig, ScraperConfig},
    csv_sink::CsvSink,
    export::{ExportOutcome, Exporter, RecordSink},
    pipeline::scrape_values,
    postgres::PostgresSink,
    supabase::SupabaseSink,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SinkKind {
    /// Supabase REST API (SUPABASE_URL / SUPABASE_KEY)
    Supabase,
    /// Direct Postgres connection (DATABASE_URL)
    Postgres,
    /// Local CSV file
    Csv,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Daily KeepTradeCut value load", long_about = None)]
struct Cli {
    /// Only scrape the dynasty listings
    #[arg(long)]
    skip_redraft: bool,

    /// Where to write the merged records
    #[arg(long, value_enum, default_value = "supabase")]
    sink: SinkKind,

    /// Output file for the csv sink
    #[arg(short, long, default_value = "ktc_values.csv")]
    output: PathBuf,
}

async fn scrape_and_export<K: RecordSink>(
    config: &ScraperConfig,
    sink: K,
    include_redraft: bool,
) -> Result<Vec<ExportOutcome>> {
    let collector = PassCollector::new(HttpPageSource::new(config)?);
    let mut book = scrape_values(&collector, include_redraft).await?;

    let mut exporter = Exporter::new(sink);
    Ok(exporter.export(&mut book).await)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ScraperConfig::from_env()?;
    let include_redraft = !cli.skip_redraft;

    // Sinks are built before any page is fetched so that missing
    // credentials fail the run up front.
    let outcomes = match cli.sink {
        SinkKind::Supabase => {
            let datastore = DatastoreConfig::from_env()?;
            let sink = SupabaseSink::new(&datastore, &config)?;
            scrape_and_export(&config, sink, include_redraft).await?
        }
        SinkKind::Postgres => {
            let database_url = database_url_from_env()?;
            let sink = PostgresSink::connect(&database_url, &table_from_env()).await?;
            scrape_and_export(&config, sink, include_redraft).await?
        }
        SinkKind::Csv => {
            let sink = CsvSink::create(&cli.output)?;
            info!("Writing records to {:?}", cli.output);
            scrape_and_export(&config, sink, include_redraft).await?
        }
    };

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    println!(
        "Script execution completed: {} records exported, {} failed",
        outcomes.len() - failed,
        failed
    );

    Ok(())
}
