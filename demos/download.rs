use gravatar::{Gravatar, Options};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let email = env::args()
        .nth(1)
        .unwrap_or_else(|| "someone@example.com".to_string());
    let destination = env::args().nth(2).map(Into::into);

    let gravatar = Gravatar::new(Options {
        destination,
        size: Some(200),
        https: Some(true),
        default_image: Some("404".to_string()),
        ..Default::default()
    })?;

    println!("Downloading {}", gravatar.url(&email)?);

    match gravatar.download(&email).await {
        Ok(result) => {
            println!("Saved {} ({})", result.location.display(), result.extension);
        }
        Err(err) => {
            println!("Download failed (code {}): {}", err.code(), err);
        }
    }

    Ok(())
}
