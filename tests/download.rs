//! Download-layer tests against a local in-process HTTP server.
//!
//! The client is built offline by seeding a valid cookie file, so no
//! bootstrap request leaves the machine.

use chrono::Utc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use nse_market_rs::client::Transport;
use nse_market_rs::cookies::{self, StoredCookie};
use nse_market_rs::{NseClient, NseError};

/// Seed an unexpired cookie file so `build()` takes the restore path
/// instead of bootstrapping against the exchange.
fn seed_cookies(dir: &std::path::Path) {
    let jar = vec![StoredCookie {
        name: "nsit".to_owned(),
        value: "offline-test".to_owned(),
        domain: "www.nseindia.com".to_owned(),
        path: "/".to_owned(),
        expires: Some(Utc::now().timestamp() + 3600),
    }];

    cookies::save(&dir.join(Transport::Http1.cookie_file_name()), &jar).unwrap();
}

async fn offline_client(dir: &TempDir) -> NseClient {
    seed_cookies(dir.path());
    NseClient::new(dir.path()).await.expect("offline build")
}

/// Serve one canned HTTP response on an ephemeral port; returns the base
/// URL.
async fn serve_once(status_line: &str, content_type: &str, body: &[u8]) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let response = [
        format!(
            "{status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes(),
        body.to_vec(),
    ]
    .concat();

    tokio::spawn(async move {
        if let Ok((mut sock, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = sock.read(&mut buf).await;
            let _ = sock.write_all(&response).await;
            let _ = sock.shutdown().await;
        }
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn html_error_page_is_report_unavailable() {
    let dir = TempDir::new().unwrap();
    let client = offline_client(&dir).await;

    let base = serve_once("HTTP/1.1 200 OK", "text/html", b"<html>not found</html>").await;
    let url = format!("{base}/reports/sec_list_01012024.csv");

    let err = client.download_document(&url, None).await.unwrap_err();
    assert!(matches!(err, NseError::ReportUnavailable(_)), "{err:?}");

    // No partial file left behind.
    assert!(!dir.path().join("sec_list_01012024.csv").exists());
}

#[tokio::test]
async fn implausibly_small_file_is_download_failed() {
    let dir = TempDir::new().unwrap();
    let client = offline_client(&dir).await;

    let base = serve_once("HTTP/1.1 200 OK", "text/csv", b"abc").await;
    let url = format!("{base}/reports/tiny.csv");

    let err = client.download_document(&url, None).await.unwrap_err();
    assert!(matches!(err, NseError::DownloadFailed(_)), "{err:?}");
    assert!(!dir.path().join("tiny.csv").exists());
}

#[tokio::test]
async fn successful_download_lands_in_the_folder() {
    let dir = TempDir::new().unwrap();
    let client = offline_client(&dir).await;

    let body = b"SYMBOL,SERIES,CLOSE\nTCS,EQ,4000\nINFY,EQ,1500\nSBIN,EQ,800\n";
    let base = serve_once("HTTP/1.1 200 OK", "text/csv", body).await;
    let url = format!("{base}/reports/daily.csv");

    let file = client.download_document(&url, None).await.unwrap();

    assert_eq!(file, dir.path().join("daily.csv"));
    assert_eq!(std::fs::read(&file).unwrap(), body);
}

#[tokio::test]
async fn non_2xx_is_a_status_error() {
    let dir = TempDir::new().unwrap();
    let client = offline_client(&dir).await;

    let base = serve_once("HTTP/1.1 404 Not Found", "text/plain", b"gone").await;
    let url = format!("{base}/reports/missing.csv");

    let err = client.download_document(&url, None).await.unwrap_err();
    assert!(matches!(err, NseError::Status { .. }), "{err:?}");
}

#[tokio::test]
async fn http2_flavor_downloads_and_uses_its_own_cookie_file() {
    let dir = TempDir::new().unwrap();

    // Seed under the Http2 name; the flavor reads only its own file.
    let jar = vec![StoredCookie {
        name: "nsit".to_owned(),
        value: "offline-test".to_owned(),
        domain: "www.nseindia.com".to_owned(),
        path: "/".to_owned(),
        expires: Some(Utc::now().timestamp() + 3600),
    }];
    cookies::save(&dir.path().join(Transport::Http2.cookie_file_name()), &jar).unwrap();

    let client = NseClient::builder(dir.path())
        .transport(Transport::Http2)
        .build()
        .await
        .expect("http2 client build");

    // Cleartext negotiates no ALPN, so the h2-capable client falls back to
    // HTTP/1.1 against the plain listener.
    let body = b"SYMBOL,SERIES,CLOSE\nTCS,EQ,4000\n";
    let base = serve_once("HTTP/1.1 200 OK", "text/csv", body).await;
    let url = format!("{base}/reports/h2.csv");

    let file = client.download_document(&url, None).await.unwrap();
    assert_eq!(std::fs::read(&file).unwrap(), body);

    client.close();
    assert!(!dir.path().join(Transport::Http2.cookie_file_name()).exists());
}

#[tokio::test]
async fn close_removes_the_cookie_file() {
    let dir = TempDir::new().unwrap();
    let client = offline_client(&dir).await;

    let cookie_path = dir.path().join(Transport::Http1.cookie_file_name());
    assert!(cookie_path.exists());

    client.close();
    assert!(!cookie_path.exists());
}

#[tokio::test]
async fn builder_rejects_a_file_as_download_folder() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not_a_folder");
    std::fs::write(&file, b"x").unwrap();

    let err = NseClient::new(&file).await.unwrap_err();
    assert!(matches!(err, NseError::InvalidArgument(_)), "{err:?}");
}
