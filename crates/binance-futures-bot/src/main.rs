/*
[INPUT]:  CLI arguments, optional config file, environment, terminal input
[OUTPUT]: One placed (or rejected) order and an exit status
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, the order flow or exit handling
*/

use std::process::ExitCode;

use anyhow::{Context, Result};
use binance_futures_adapter::{ExchangeError, FuturesClient, OrderSpec, build_order_params};
use clap::Parser;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use tracing::{error, info};

use binance_futures_bot::credentials::{self, MissingCredentials};
use binance_futures_bot::{BotConfig, Cli, display, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match BotConfig::load(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("\n❌  Unexpected error: {err:#}\n");
            return ExitCode::FAILURE;
        }
    };
    let _guard = match init_logging(&config.log_settings(args.log_level.as_deref())) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("\n❌  Unexpected error: {err:#}\n");
            return ExitCode::FAILURE;
        }
    };

    info!(
        base_url = %config.base_url,
        log_dir = %config.log_dir.display(),
        "starting binance-futures-bot"
    );

    match run(&args, &config).await {
        Ok(code) => code,
        Err(err) if err.is::<MissingCredentials>() => {
            println!("\n❌  {err}\n");
            error!("aborted: API credentials missing");
            ExitCode::FAILURE
        }
        Err(err) => {
            println!("\n❌  Unexpected error: {err:#}\n");
            error!(error = ?err, "aborted");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Cli, config: &BotConfig) -> Result<ExitCode> {
    let order = match OrderSpec::from_raw(&args.raw_order()) {
        Ok(order) => order,
        Err(err) => return Ok(report_failure(&err)),
    };

    println!();
    println!("{}", display::order_summary(&build_order_params(&order)));

    if !args.yes && !confirm_order()? {
        println!("Order cancelled.");
        info!("order cancelled by user");
        return Ok(ExitCode::SUCCESS);
    }

    let credentials = credentials::acquire()?;
    let client = FuturesClient::with_config(credentials, config.client_config())
        .context("create HTTP client")?;

    println!("\n⏳  Placing order...");
    let outcome = client.place_order(&order).await;
    client.close();

    match outcome {
        Ok(response) => {
            println!();
            println!("{}", display::order_response(&response));
            println!("\n✅  Order placed successfully!\n");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report_failure(&err)),
    }
}

fn confirm_order() -> Result<bool> {
    println!();
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Proceed with this order?")
        .default(false)
        .interact()
        .context("read confirmation")
}

/// Print the user-facing message for a pipeline failure
fn report_failure(err: &ExchangeError) -> ExitCode {
    match err.kind() {
        Some(kind) => {
            println!("\n❌  {kind}: {err}\n");
            error!(%kind, error = %err, "order failed");
        }
        None => {
            println!("\n❌  Unexpected error: {err}\n");
            error!(error = ?err, "unexpected error placing order");
        }
    }
    ExitCode::FAILURE
}
