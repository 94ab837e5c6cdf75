use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use pob_core::core_api::{CoreErrorCode, Engine, ProfileClient, ProfileId};

const TEST_USER_AGENT: &str = "pob-export-tests/1.0";

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {}", path, e))
}

/// Serves one canned response per connection, in order, and hands back the
/// request heads it received.
fn serve(responses: Vec<(&'static str, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub server");
    let addr = listener.local_addr().expect("stub server has an address");

    let handle = thread::spawn(move || {
        let mut heads = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().expect("stub server accept failed");
            heads.push(read_request_head(&mut stream));
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("stub server write failed");
            stream.flush().expect("stub server flush failed");
        }
        heads
    });

    (format!("http://{addr}/character-window"), handle)
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).expect("stub server read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn profile() -> ProfileId {
    ProfileId::new("acc", "ch")
}

fn client(api_base: &str) -> ProfileClient {
    ProfileClient::with_options(api_base, TEST_USER_AGENT).expect("client builds")
}

#[test]
fn api_error_payload_over_http_is_a_fetch_error() {
    let (base, server) = serve(vec![(
        "404 Not Found",
        fixture("error_not_found.json"),
    )]);

    let err = client(&base)
        .fetch_items(&profile())
        .expect_err("error payload must fail");
    server.join().expect("stub server panicked");

    assert_eq!(err.code, CoreErrorCode::Fetch);
    assert!(err.message.contains("Resource not found"), "{}", err.message);
    assert!(err.message.contains("acc/ch"), "{}", err.message);
    assert!(err.message.contains("get-items"), "{}", err.message);
}

#[test]
fn non_success_status_is_a_fetch_error() {
    let (base, server) = serve(vec![(
        "500 Internal Server Error",
        "upstream unavailable".to_string(),
    )]);

    let err = client(&base)
        .fetch_passives(&profile())
        .expect_err("HTTP 500 must fail");
    server.join().expect("stub server panicked");

    assert_eq!(err.code, CoreErrorCode::Fetch);
    assert!(err.message.contains("HTTP 500"), "{}", err.message);
    assert!(err.message.contains("get-passive-skills for acc/ch"), "{}", err.message);
}

#[test]
fn requests_carry_query_and_user_agent() {
    let (base, server) = serve(vec![("200 OK", "{}".to_string())]);

    let body = client(&base)
        .fetch_items(&profile())
        .expect("successful response returns its body");
    let heads = server.join().expect("stub server panicked");

    assert_eq!(body, "{}");
    assert_eq!(heads.len(), 1);
    let request_line = heads[0].lines().next().unwrap_or_default();
    assert_eq!(
        request_line,
        "GET /character-window/get-items?character=ch&accountName=acc HTTP/1.1"
    );
    assert!(
        heads[0]
            .to_ascii_lowercase()
            .contains(&format!("user-agent: {TEST_USER_AGENT}")),
        "{}",
        heads[0]
    );
}

#[test]
fn open_profile_fetches_both_endpoints() {
    let (base, server) = serve(vec![
        ("200 OK", fixture("full_items.json")),
        ("200 OK", fixture("full_passives.json")),
    ]);

    let session = Engine::new()
        .open_profile(&client(&base), &profile())
        .expect("profile opens over HTTP");
    let heads = server.join().expect("stub server panicked");

    assert_eq!(session.profile(), Some(&profile()));
    assert_eq!(session.snapshot().character_name, "FullWitch");
    assert_eq!(session.hashes(), &[41263, 6230, 12345, 65535]);
    assert!(heads[0].starts_with("GET /character-window/get-items?"));
    assert!(heads[1].starts_with("GET /character-window/get-passive-skills?character=ch&accountName=acc "));
}

#[test]
fn failed_items_fetch_skips_passives() {
    let (base, server) = serve(vec![(
        "500 Internal Server Error",
        String::new(),
    )]);

    let err = Engine::new()
        .open_profile(&client(&base), &profile())
        .expect_err("profile must not open");
    let heads = server.join().expect("stub server panicked");

    assert_eq!(err.code, CoreErrorCode::Fetch);
    assert_eq!(heads.len(), 1);
}
