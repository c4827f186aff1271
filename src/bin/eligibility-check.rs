use anyhow::Result;
use clap::Parser;
use eligibility_check::app;
use eligibility_check::client::ApiClient;
use eligibility_check::utils::config_loader;
use eligibility_check::utils::logging;
use eligibility_check::utils::logging::LogLevel;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load config, start logging
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(args.config.as_deref()).await?;
    logging::run(&service_config.logging, args.log_level);

    // -------------------------------
    // 2. Create request client
    // -------------------------------

    let client = ApiClient::from_config(&service_config)?;
    info!(base_url = %client.base_url(), patient_id = %service_config.patient_id, "checking eligibility");

    // -------------------------------
    // 3. Authenticate, fetch, print
    // -------------------------------

    let credentials = service_config.credentials.to_credentials();
    let mut stdout = std::io::stdout().lock();
    app::run(&client, &credentials, &service_config.patient_id, &mut stdout).await?;

    Ok(())
}
