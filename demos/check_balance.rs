use std::io;

use signalbridge::{AuthToken, CurrencyCode, SignalBridgeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("SIGNALBRIDGE_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SIGNALBRIDGE_TOKEN environment variable is required",
        )
    })?;
    let currency = std::env::var("SIGNALBRIDGE_CURRENCY").unwrap_or_else(|_| "UGX".to_owned());

    let client = SignalBridgeClient::new(AuthToken::new(token)?)?;
    let response = client.get_balance(&CurrencyCode::new(currency)?).await?;

    println!(
        "currency: {:?}, balance: {:?}, credit_limit: {:?}, segment_price: {:?}",
        response.data.currency,
        response.data.balance,
        response.data.credit_limit,
        response.data.segment_price
    );

    Ok(())
}
