//! Offline tests for the persisted cookie store: expiry detection,
//! round-tripping, corrupt-file handling, and transport-flavor namespacing.

use chrono::Utc;
use tempfile::TempDir;

use nse_market_rs::client::Transport;
use nse_market_rs::cookies::{self, StoredCookie};

fn cookie(name: &str, expires: Option<i64>) -> StoredCookie {
    StoredCookie {
        name: name.to_owned(),
        value: "abc123".to_owned(),
        domain: ".nseindia.com".to_owned(),
        path: "/".to_owned(),
        expires,
    }
}

fn future() -> i64 {
    Utc::now().timestamp() + 3600
}

fn past() -> i64 {
    Utc::now().timestamp() - 3600
}

// ===================================================================
// Expiry predicate
// ===================================================================

#[test]
fn jar_with_a_past_expiry_is_expired() {
    let jar = vec![cookie("nsit", Some(future())), cookie("nseappid", Some(past()))];
    assert!(cookies::is_expired(&jar));
}

#[test]
fn jar_with_all_future_expiries_is_not_expired() {
    let jar = vec![cookie("nsit", Some(future())), cookie("nseappid", Some(future()))];
    assert!(!cookies::is_expired(&jar));
}

#[test]
fn empty_jar_is_not_expired() {
    assert!(!cookies::is_expired(&[]));
}

#[test]
fn session_cookies_without_expiry_never_expire() {
    let jar = vec![cookie("nsit", None)];
    assert!(!cookies::is_expired(&jar));
}

// ===================================================================
// Persistence
// ===================================================================

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(Transport::Http1.cookie_file_name());

    let jar = vec![cookie("nsit", Some(future())), cookie("bm_sv", None)];
    cookies::save(&path, &jar).unwrap();

    assert_eq!(cookies::load(&path), Some(jar));
}

#[test]
fn missing_file_loads_as_absent() {
    let dir = TempDir::new().unwrap();
    assert_eq!(cookies::load(&dir.path().join("nope.json")), None);
}

#[test]
fn corrupt_file_loads_as_absent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nse_cookies_http1.json");
    std::fs::write(&path, b"not json at all").unwrap();

    assert_eq!(cookies::load(&path), None);
}

#[test]
fn delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nse_cookies_http1.json");

    cookies::save(&path, &[cookie("nsit", None)]).unwrap();
    cookies::delete(&path);
    assert!(!path.exists());

    // Deleting again must not panic or error.
    cookies::delete(&path);
}

// ===================================================================
// Flavor namespacing
// ===================================================================

#[test]
fn cookie_files_are_namespaced_per_transport() {
    assert_ne!(
        Transport::Http1.cookie_file_name(),
        Transport::Http2.cookie_file_name()
    );
}

#[test]
fn jar_saved_under_one_flavor_is_invisible_to_the_other() {
    let dir = TempDir::new().unwrap();
    let h1_path = dir.path().join(Transport::Http1.cookie_file_name());
    let h2_path = dir.path().join(Transport::Http2.cookie_file_name());

    cookies::save(&h1_path, &[cookie("nsit", Some(future()))]).unwrap();

    // A client built with the Http2 flavor looks only at its own file and
    // re-bootstraps instead of deserializing the Http1 jar.
    assert_eq!(cookies::load(&h2_path), None);
}
