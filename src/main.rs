use balance_alert::{
    compose_alert, create_provider, log_reading, BalanceFetcher, BalanceReading, Config,
    WecomNotifier,
};
use clap::{error::ErrorKind, Parser};
use std::process;

const USAGE: &str = "Usage: balance-alert -c <config path>";

#[derive(Debug, Parser)]
#[command(about = "Alerts a WeCom webhook when watched ETH balances drop below a threshold")]
struct Cli {
    /// Config file path
    #[arg(short = 'c', value_name = "CONFIG_PATH")]
    config: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::DisplayHelp {
            e.exit();
        }
        eprintln!("{USAGE}");
        process::exit(1);
    });

    if cli.config.is_empty() {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    // Load configuration
    let config = match Config::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    // Create provider
    let provider = match create_provider(&config.eth_rpc) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("{e}");
            process::exit(3);
        }
    };
    let fetcher = BalanceFetcher::new(provider);

    // Check each address in order, aborting on the first fetch failure
    let mut readings = Vec::with_capacity(config.addresses.len());
    for watched in &config.addresses {
        let balance = match fetcher.fetch_display(&watched.address).await {
            Ok(balance) => balance,
            Err(e) => {
                eprintln!("{e}");
                process::exit(3);
            }
        };

        let reading = BalanceReading {
            tag: watched.tag.clone(),
            address: watched.address.clone(),
            balance,
        };
        log_reading(&reading);
        readings.push(reading);
    }

    let message = compose_alert(&config.alert_title, &readings, config.balance_alert);
    if message.should_send() {
        let notifier = WecomNotifier::new();
        for key in &config.webhook_keys {
            notifier.send(key, &message.content).await;
        }
    }
}
