/*
[INPUT]:  Order fields and an API secret
[OUTPUT]: The exact form body a signed order request would carry
[POS]:    Examples - offline order building and signing
[UPDATE]: When order parameters or signing rules change
*/

use binance_futures_adapter::*;
use secrecy::SecretString;

/// Example: validate, build and sign an order without sending it
fn main() {
    println!("=== Binance Futures Signing Example ===\n");

    let raw = RawOrder::new("btcusdt", "sell", "limit", "0.001").with_price("80000");
    let order = match OrderSpec::from_raw(&raw) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Validation Error: {}", e);
            return;
        }
    };
    println!("✓ Validated: {:?}", order);

    let params = build_order_params(&order);
    println!("✓ Parameters: {}", params.to_query_string());

    let signer = RequestSigner::new(SecretString::from("example-secret".to_string()));
    let signed = signer.sign_now(params);
    println!("✓ Signature: {}", signed.signature());
    println!("\nForm body:\n  {}", signed.encoded());
}
