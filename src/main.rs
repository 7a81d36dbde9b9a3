use clap::Parser;
use steam_overlap::config::cli::{parse_account_arg, Cli};
use steam_overlap::core::report;
use steam_overlap::utils::logger;
use steam_overlap::{
    Account, AccountStore, CompareEngine, JsonAccountStore, OverlapError, Settings, SteamClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting steam-overlap");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("comparison failed: {}", e);
        eprintln!("❌ {}", e.user_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<(), OverlapError> {
    let settings = Settings::resolve(cli)?;

    let store = JsonAccountStore::new(&cli.store);
    let accounts: Vec<Account> = if cli.accounts.is_empty() {
        tracing::debug!("no accounts on the command line, loading {}", cli.store.display());
        store.load()?
    } else {
        cli.accounts
            .iter()
            .map(|arg| parse_account_arg(arg))
            .collect()
    };

    if cli.save && !cli.accounts.is_empty() {
        store.save(&accounts)?;
        tracing::info!(
            "saved {} accounts to {}",
            accounts.len(),
            cli.store.display()
        );
    }

    let client = SteamClient::new(
        settings.api_base.as_str(),
        settings.api_key.as_str(),
        settings.timeout,
    )?;
    let engine = CompareEngine::new(client, settings.compare);
    let entries = engine.run(&accounts).await?;

    print!("{}", report::render_text(&entries));

    if let Some(path) = &cli.output {
        std::fs::write(path, report::render_csv(&entries)?)?;
        println!("📁 CSV written to {}", path.display());
    }

    Ok(())
}
