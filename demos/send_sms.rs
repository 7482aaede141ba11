use std::io;

use signalbridge::{AuthToken, MessageText, Recipient, SendOptions, SignalBridgeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("SIGNALBRIDGE_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SIGNALBRIDGE_TOKEN environment variable is required",
        )
    })?;
    let recipient_raw = std::env::var("SIGNALBRIDGE_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SIGNALBRIDGE_RECIPIENT environment variable is required",
        )
    })?;
    let message = std::env::var("SIGNALBRIDGE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the signalbridge example.".to_owned());

    let client = SignalBridgeClient::new(AuthToken::new(token)?)?;
    let recipient = Recipient::new(recipient_raw)?;
    let text = MessageText::new(message)?;

    let response = client
        .send_sms(&recipient, &text, &SendOptions::default())
        .await?;
    println!(
        "message: {:?}, segments: {:?}",
        response.message, response.data.segments
    );

    Ok(())
}
