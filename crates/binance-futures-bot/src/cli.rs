/*
[INPUT]:  Command-line arguments
[OUTPUT]: Parsed Cli and the RawOrder it describes
[POS]:    CLI layer - argument definitions
[UPDATE]: When changing CLI flags
*/

use std::path::PathBuf;

use binance_futures_adapter::RawOrder;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "binance-futures-bot",
    version,
    about = "Place a single order on Binance USDⓈ-M Futures (testnet by default)"
)]
pub struct Cli {
    /// Trading pair, e.g. BTCUSDT
    #[arg(long)]
    pub symbol: String,
    /// BUY or SELL
    #[arg(long)]
    pub side: String,
    /// MARKET, LIMIT or STOP_MARKET
    #[arg(long = "type", value_name = "TYPE")]
    pub order_type: String,
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: String,
    /// Required for LIMIT and STOP_MARKET
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    /// Required for STOP_MARKET
    #[arg(long = "stop-price", value_name = "PRICE", allow_hyphen_values = true)]
    pub stop_price: Option<String>,
    /// LIMIT only, defaults to GTC
    #[arg(long = "time-in-force", value_name = "TIF")]
    pub time_in_force: Option<String>,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    /// Console log filter, overrides the configured level
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// The order exactly as typed; validation happens downstream
    pub fn raw_order(&self) -> RawOrder {
        RawOrder {
            symbol: self.symbol.clone(),
            side: self.side.clone(),
            order_type: self.order_type.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
            stop_price: self.stop_price.clone(),
            time_in_force: self.time_in_force.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["binance-futures-bot"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_market_order() {
        let cli = parse(&[
            "--symbol", "btcusdt", "--side", "buy", "--type", "market", "--quantity", "0.001",
        ]);
        assert!(!cli.yes);
        assert_eq!(
            cli.raw_order(),
            RawOrder::new("btcusdt", "buy", "market", "0.001")
        );
    }

    #[test]
    fn test_parse_stop_market_with_flags() {
        let cli = parse(&[
            "--symbol", "BTCUSDT", "--side", "SELL", "--type", "STOP_MARKET", "--quantity",
            "0.001", "--price", "76000", "--stop-price", "75000", "-y", "--log-level", "debug",
        ]);
        assert!(cli.yes);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(
            cli.raw_order(),
            RawOrder::new("BTCUSDT", "SELL", "STOP_MARKET", "0.001")
                .with_price("76000")
                .with_stop_price("75000")
        );
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = parse(&[
            "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "-1",
        ]);
        assert_eq!(cli.quantity, "-1");
    }

    #[test]
    fn test_missing_required_flag() {
        let result = Cli::try_parse_from(["binance-futures-bot", "--symbol", "BTCUSDT"]);
        assert!(result.is_err());
    }
}
