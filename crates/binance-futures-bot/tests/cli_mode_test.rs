/*
[INPUT]:  The compiled binance-futures-bot binary, mock exchange
[OUTPUT]: Exit status and terminal output checks
[POS]:    Integration tests - end-to-end CLI runs
[UPDATE]: When changing CLI flags, messages or exit codes
*/

use std::path::PathBuf;
use std::process::{Output, Stdio};

use tokio::process::Command;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BINARY: &str = env!("CARGO_BIN_EXE_binance-futures-bot");

fn log_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "futures-bot-cli-{}-{}",
        std::process::id(),
        test_name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn bot(log_dir: &PathBuf, base_url: &str) -> Command {
    let mut command = Command::new(BINARY);
    command
        .env("FUTURES_BOT_BASE_URL", base_url)
        .env("FUTURES_BOT_LOG_DIR", log_dir)
        .env("FUTURES_BOT_TIMEOUT_SECS", "5")
        .env("BINANCE_API_KEY", "cli-test-key")
        .env("BINANCE_API_SECRET", "cli-test-secret")
        .env("FUTURES_BOT_LOG_LEVEL", "error")
        .stdin(Stdio::null());
    command
}

async fn run(mut command: Command, args: &[&str]) -> Output {
    command
        .args(args)
        .output()
        .await
        .expect("Failed to start binance-futures-bot binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

const MARKET_BUY: &[&str] = &[
    "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "0.001", "--yes",
];

#[tokio::test]
async fn cli_validation_failure_exits_with_one() {
    let logs = log_dir("validation");
    let output = run(
        bot(&logs, "http://127.0.0.1:9"),
        &["--symbol", "BTCUSDT", "--side", "BUY", "--type", "LIMIT", "--quantity", "0.001"],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(
        out.contains("❌  Validation Error: Price is required for LIMIT orders."),
        "stdout: {out}"
    );
    assert!(!out.contains("Order Request Summary"));

    let has_log_file = std::fs::read_dir(&logs)
        .expect("log directory created")
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name().to_string_lossy().starts_with("trading_bot"));
    assert!(has_log_file);
}

#[tokio::test]
async fn cli_places_market_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(header("x-mbx-apikey", "cli-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 4055187712u64,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "x-cli-1",
            "executedQty": "0.000",
            "avgPrice": "0.00",
            "updateTime": 1718000000000u64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(bot(&log_dir("success"), &server.uri()), MARKET_BUY).await;

    let out = stdout(&output);
    assert!(
        output.status.success(),
        "status: {}\nstdout: {out}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(out.contains("Order Request Summary"));
    assert!(out.contains("  Order ID   : 4055187712"));
    assert!(out.contains("✅  Order placed successfully!"));
}

#[tokio::test]
async fn cli_reports_api_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": -2010,
            "msg": "Insufficient balance"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(bot(&log_dir("rejection"), &server.uri()), MARKET_BUY).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("❌  API Error: [-2010] Insufficient balance"));
}

#[tokio::test]
async fn cli_reports_network_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let output = run(
        bot(&log_dir("network"), &format!("http://127.0.0.1:{port}")),
        MARKET_BUY,
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("❌  Network Error: Network error:"));
}

#[tokio::test]
async fn cli_prompt_without_terminal_aborts_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // blank values fall back to the prompt, which needs a terminal
    let mut command = bot(&log_dir("no-terminal"), &server.uri());
    command
        .env("BINANCE_API_KEY", "   ")
        .env("BINANCE_API_SECRET", "");
    let output = run(command, MARKET_BUY).await;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("❌  Unexpected error: read API key:"), "stdout: {out}");
    assert!(out.contains("not a terminal"), "stdout: {out}");
}

#[tokio::test]
async fn cli_confirmation_without_terminal_is_unexpected_error() {
    let args: Vec<&str> = MARKET_BUY
        .iter()
        .copied()
        .filter(|arg| *arg != "--yes")
        .collect();
    let output = run(bot(&log_dir("confirm"), "http://127.0.0.1:9"), &args).await;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Order Request Summary"));
    assert!(out.contains("❌  Unexpected error: read confirmation:"), "stdout: {out}");
}

#[tokio::test]
async fn cli_log_level_comes_from_config_env() {
    let output = run(
        bot(&log_dir("quiet"), "http://127.0.0.1:9"),
        &["--symbol", "BTC-USDT", "--side", "BUY", "--type", "MARKET", "--quantity", "1"],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("starting binance-futures-bot"), "stderr: {stderr}");
}
