use gravatar::{Gravatar, Options, Rating};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let email = env::args()
        .nth(1)
        .unwrap_or_else(|| "someone@example.com".to_string());

    let gravatar = Gravatar::new(Options {
        size: Some(80),
        https: Some(true),
        ..Default::default()
    })?
    .with_rating(Rating::G)?
    .with_default_image("identicon")?;

    println!("URL: {}", gravatar.url(&email)?);
    println!("Tag: {}", gravatar.image(&email, &[("alt", email.as_str())])?);

    Ok(())
}
