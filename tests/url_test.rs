use gravatar::{md5_hex, Gravatar, Options};

const TEST_HASH: &str = "55502f40dc8b7c769880b10874abc9d0";

fn gravatar() -> Gravatar {
    Gravatar::new(Options::default()).unwrap()
}

#[test]
fn test_hash_of_trimmed_lowercased_email() {
    assert_eq!(md5_hex("test@example.com"), TEST_HASH);

    let url = gravatar().url("  Test@Example.com ").unwrap();
    assert_eq!(url, format!("http://www.gravatar.com/avatar/{TEST_HASH}"));
}

#[test]
fn test_https_origin() {
    let url = gravatar().with_https(true).url("test@example.com").unwrap();
    assert_eq!(url, format!("https://secure.gravatar.com/avatar/{TEST_HASH}"));
}

#[test]
fn test_url_is_deterministic() {
    let gravatar = gravatar().with_size(42).unwrap().with_rating("r").unwrap();
    assert_eq!(
        gravatar.url("test@example.com").unwrap(),
        gravatar.url("test@example.com").unwrap()
    );
}

#[test]
fn test_query_order_and_encoding() {
    let url = gravatar()
        .with_force_default(true)
        .with_rating("PG")
        .unwrap()
        .with_default_image("https://example.com/images/avatar.png")
        .unwrap()
        .with_size(80)
        .unwrap()
        .url("test@example.com")
        .unwrap();

    assert_eq!(
        url,
        format!(
            "http://www.gravatar.com/avatar/{TEST_HASH}?s=80&d=https%3A%2F%2Fexample.com%2Fimages%2Favatar.png&r=pg&f=y"
        )
    );
}

#[test]
fn test_only_set_parameters_are_emitted() {
    let url = gravatar()
        .with_default_image("404")
        .unwrap()
        .url("test@example.com")
        .unwrap();
    assert_eq!(url, format!("http://www.gravatar.com/avatar/{TEST_HASH}?d=404"));

    let url = gravatar().with_rating("x").unwrap().url("test@example.com").unwrap();
    assert_eq!(url, format!("http://www.gravatar.com/avatar/{TEST_HASH}?r=x"));
}

#[test]
fn test_force_default_false_emits_nothing() {
    let url = gravatar()
        .with_force_default(true)
        .with_force_default(false)
        .url("test@example.com")
        .unwrap();

    assert!(!url.contains('?'));
    assert!(!url.contains("f=n"));
}

#[test]
fn test_email_format_is_not_checked() {
    let url = gravatar().url("not an email").unwrap();
    assert!(url.ends_with(&md5_hex("not an email")));
}
