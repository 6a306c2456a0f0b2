//! One-shot dominance report: fetch, enrich, print, persist.

use crypto_dominance::{
    dominance::enrich_records,
    report::print_report,
    spreadsheet::{output_path, write_spreadsheet},
    Config, MarketDataClient, RunError,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        eprintln!("\nERROR: {e}\n");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RunError> {
    let config = Config::default();
    let client = MarketDataClient::new(&config).map_err(RunError::Init)?;

    let global_cap = client.fetch_global_market_cap().await?;
    let mut records = client.fetch_top10().await?;
    enrich_records(&mut records, global_cap)?;

    print_report(&records)?;

    let path = output_path(&config);
    write_spreadsheet(&records, &path, &config)?;

    println!("\nSpreadsheet written to:\n{}\n", path.display());
    Ok(())
}
