use mongo_probe::cli::Cli;
use mongo_probe::logging::setup_logging;
use mongo_probe::mongo::MongoConnector;
use mongo_probe::probe;
use mongo_probe::report::Reporter;

use anyhow::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    setup_logging(args.debug);

    let config = args.config();
    let mut reporter = Reporter::new(std::io::stdout());
    let outcome = probe::run(&MongoConnector, &config, &mut reporter).await;

    // Failures are reported on stdout; the exit status stays zero either way.
    info!(success = outcome.is_success(), "probe finished");
    Ok(())
}
