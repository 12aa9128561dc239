/*
[INPUT]:  Symbol identifier (e.g., "BTCUSDT"), BINANCE_API_KEY / BINANCE_API_SECRET
[OUTPUT]: Symbol metadata and account summary from the testnet
[POS]:    Examples - public metadata and signed account queries
[UPDATE]: When adding new read-only endpoints
*/

use binance_futures_adapter::*;

/// Example: query exchange metadata (unsigned) and the account (signed).
///
/// Reads credentials from the environment; nothing is traded.
#[tokio::main]
async fn main() {
    println!("=== Binance Futures Metadata Example ===\n");

    let credentials = match Credentials::new(
        std::env::var("BINANCE_API_KEY").unwrap_or_default(),
        std::env::var("BINANCE_API_SECRET").unwrap_or_default(),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Set BINANCE_API_KEY and BINANCE_API_SECRET: {}", e);
            return;
        }
    };

    let client = match FuturesClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    let symbol = "BTCUSDT";

    println!("Querying exchange info for {}...", symbol);
    match client.exchange_info().await {
        Ok(info) => match info.symbol(symbol) {
            Some(s) => println!(
                "✓ {} status={} tick={:?} step={:?}",
                s.symbol,
                s.status,
                s.tick_size(),
                s.step_size()
            ),
            None => println!("✗ {} not listed", symbol),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying account...");
    match client.account().await {
        Ok(account) => println!(
            "✓ can_trade={} available={:?}",
            account.can_trade, account.available_balance
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    client.close();
    println!("\n✓ Metadata example complete");
}
