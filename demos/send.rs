use std::io;

use aligo::{AligoClient, PhoneNumber, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user_id = std::env::var("ALIGO_USER_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ALIGO_USER_ID environment variable is required",
        )
    })?;
    let api_key = std::env::var("ALIGO_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ALIGO_API_KEY environment variable is required",
        )
    })?;
    let sender = std::env::var("ALIGO_SENDER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ALIGO_SENDER environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("ALIGO_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ALIGO_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("ALIGO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the aligo example.".to_owned());

    let client = AligoClient::new(user_id, api_key, sender)?;
    let phone = PhoneNumber::kr(phone_raw)?;
    let request = SendSms::new(phone, message);

    let outcome = client.send(&request).await;
    println!(
        "success: {}, reason: {:?}, detail: {:?}",
        outcome.success, outcome.reason, outcome.detail
    );

    Ok(())
}
