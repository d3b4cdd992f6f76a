use listgen::core::{build_domain_list, generate_domain_list, DomainListConfig};
use listgen::{ListgenError, Source};
use std::fs;
use tempfile::TempDir;

use super::support::{local_fetcher, serve_once, write_file};

const DIRECTORY: &str = r#"[
    ["GitHub", {"domain": "github.com", "tfa": ["totp"]}],
    ["Dropbox", {"domain": "dropbox.com"}],
    ["Legacy", {"domain": "legacy.example"}],
    ["GitHub Enterprise", {"domain": "github.com"}]
]"#;

fn config_with(temp_dir: &TempDir, source: Source) -> DomainListConfig {
    DomainListConfig {
        source,
        custom_domains_file: write_file(
            temp_dir.path(),
            "custom.txt",
            "# extra\nproton.me\n\nexample.org\n",
        ),
        excluded_domains_file: write_file(temp_dir.path(), "excluded.txt", "legacy.example\n"),
        destination: temp_dir.path().join("2faDomains.txt"),
    }
}

#[test]
fn test_domain_list_from_local_directory() {
    let temp_dir = TempDir::new().unwrap();
    let source = Source::Local(write_file(temp_dir.path(), "totp.json", DIRECTORY));
    let config = config_with(&temp_dir, source);

    let count = generate_domain_list(&local_fetcher(), &config).unwrap();

    assert_eq!(count, 4);
    assert_eq!(
        fs::read_to_string(&config.destination).unwrap(),
        "dropbox.com\nexample.org\ngithub.com\nproton.me\n"
    );
}

#[test]
fn test_domain_list_from_remote_directory() {
    let temp_dir = TempDir::new().unwrap();
    let url = serve_once("200 OK", DIRECTORY);
    let config = config_with(&temp_dir, Source::parse(&url).unwrap());

    let domains = build_domain_list(&local_fetcher(), &config).unwrap();

    assert!(domains.contains(&"github.com".to_string()));
    assert!(!domains.contains(&"legacy.example".to_string()));
}

#[test]
fn test_directory_error_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let url = serve_once("503 Service Unavailable", "down");
    let config = config_with(&temp_dir, Source::parse(&url).unwrap());

    let err = generate_domain_list(&local_fetcher(), &config).unwrap_err();

    assert!(matches!(err, ListgenError::Status { .. }));
    assert!(!config.destination.exists());
}

#[test]
fn test_missing_custom_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = Source::Local(write_file(temp_dir.path(), "totp.json", DIRECTORY));
    let mut config = config_with(&temp_dir, source);
    config.custom_domains_file = temp_dir.path().join("nope.txt");

    let err = build_domain_list(&local_fetcher(), &config).unwrap_err();
    assert!(matches!(err, ListgenError::Read { .. }));
}
