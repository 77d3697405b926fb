use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::{json, Value};
use webtop_server::{AppState, CommandExecutor, Server};

struct TestServer {
    base: String,
    _root: tempfile::TempDir,
}

async fn start_with_timeout(timeout: Duration) -> TestServer {
    start_with_deadlines(timeout, Duration::from_secs(10)).await
}

async fn start_with_deadlines(timeout: Duration, read_timeout: Duration) -> TestServer {
    let root = tempfile::tempdir().unwrap();
    write_fixtures(root.path());

    let state = AppState {
        executor: CommandExecutor::new(timeout),
        static_root: PathBuf::from(root.path()),
        max_body_bytes: 64 * 1024,
        read_timeout,
    };
    let server = Server::bind("127.0.0.1:0", state).await.unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());

    TestServer {
        base: format!("http://{addr}"),
        _root: root,
    }
}

async fn start() -> TestServer {
    start_with_timeout(Duration::from_secs(10)).await
}

fn write_fixtures(root: &Path) {
    std::fs::write(root.join("index.html"), "<!doctype html><title>desk</title>").unwrap();
    std::fs::create_dir(root.join("static")).unwrap();
    std::fs::write(root.join("static/app.js"), "console.log('desk');").unwrap();
}

async fn post_run(server: &TestServer, body: &'static str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/run", server.base))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap()
}

fn assert_cors(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

#[tokio::test]
async fn empty_object_is_rejected_with_exact_payload() {
    let server = start().await;
    let response = post_run(&server, "{}").await;
    assert_eq!(response.status(), 400);
    assert_cors(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "no command provided"}));
}

#[tokio::test]
async fn unparsable_blank_and_non_string_cmd_are_rejected() {
    let server = start().await;
    for body in ["not json", r#"{"cmd": "   "}"#, r#"{"cmd": 5}"#, ""] {
        let response = post_run(&server, body).await;
        assert_eq!(response.status(), 400, "body {body:?}");
    }
}

#[tokio::test]
async fn valid_command_returns_exactly_three_keys() {
    let server = start().await;
    let response = post_run(&server, r#"{"cmd": "echo hello"}"#).await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    assert_cors(&response);

    let body: Value = response.json().await.unwrap();
    let object = body.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["returncode", "stderr", "stdout"]);
    assert!(object["stdout"].as_str().unwrap().contains("hello"));
    assert_eq!(object["returncode"], 0);
}

#[cfg(unix)]
#[tokio::test]
async fn slow_command_times_out_with_124() {
    let server = start_with_timeout(Duration::from_millis(300)).await;
    let response = post_run(&server, r#"{"cmd": "sleep 5"}"#).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"stdout": "", "stderr": "Command timed out", "returncode": 124})
    );
}

#[cfg(unix)]
#[tokio::test]
async fn failing_command_reports_its_exit_code() {
    let server = start().await;
    let response = post_run(&server, r#"{"cmd": "echo bad >&2; exit 7"}"#).await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["stderr"], "bad\n");
    assert_eq!(body["returncode"], 7);
}

#[tokio::test]
async fn post_elsewhere_is_404() {
    let server = start().await;
    let response = reqwest::Client::new()
        .post(format!("{}/execute", server.base))
        .body(r#"{"cmd": "echo nope"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_cors(&response);
}

#[tokio::test]
async fn options_preflight_is_204() {
    let server = start().await;
    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/run", server.base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
    assert_cors(&response);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn serves_index_and_assets() {
    let server = start().await;

    let index = reqwest::get(format!("{}/", server.base)).await.unwrap();
    assert_eq!(index.status(), 200);
    assert_eq!(index.headers()["content-type"], "text/html; charset=utf-8");
    assert_cors(&index);
    assert!(index.text().await.unwrap().contains("<title>desk</title>"));

    let script = reqwest::get(format!("{}/static/app.js", server.base))
        .await
        .unwrap();
    assert_eq!(script.status(), 200);
    assert_eq!(
        script.headers()["content-type"],
        "application/javascript; charset=utf-8"
    );
}

#[tokio::test]
async fn missing_file_is_404() {
    let server = start().await;
    let response = reqwest::get(format!("{}/missing.css", server.base))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn head_returns_headers_only() {
    let server = start().await;
    let response = reqwest::Client::new()
        .head(format!("{}/static/app.js", server.base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-length"],
        "console.log('desk');".len().to_string().as_str()
    );
}

#[tokio::test]
async fn unsupported_method_is_501() {
    let server = start().await;
    let response = reqwest::Client::new()
        .put(format!("{}/run", server.base))
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 501);
}

#[tokio::test]
async fn concurrent_commands_run_independently() {
    let server = start().await;
    let (a, b) = tokio::join!(
        post_run(&server, r#"{"cmd": "echo first"}"#),
        post_run(&server, r#"{"cmd": "echo second"}"#)
    );
    let a: Value = a.json().await.unwrap();
    let b: Value = b.json().await.unwrap();
    assert!(a["stdout"].as_str().unwrap().contains("first"));
    assert!(b["stdout"].as_str().unwrap().contains("second"));
}

#[tokio::test]
async fn stalled_client_is_disconnected() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let server = start_with_deadlines(Duration::from_secs(10), Duration::from_millis(300)).await;
    let addr = server.base.trim_start_matches("http://");
    let mut socket = tokio::net::TcpStream::connect(addr).await.unwrap();
    // Never finish the head.
    socket.write_all(b"GET / HTTP/1.1\r\nHost: x\r\n").await.unwrap();

    let mut buf = Vec::new();
    let read = tokio::time::timeout(Duration::from_secs(3), socket.read_to_end(&mut buf)).await;
    // The server closes without replying; a reset also counts as closed.
    match read {
        Ok(Ok(n)) => assert_eq!(n, 0),
        Ok(Err(_)) => {}
        Err(_) => panic!("server kept the stalled connection open"),
    }
}

#[tokio::test]
async fn post_run_with_query_is_404() {
    let server = start().await;
    let response = reqwest::Client::new()
        .post(format!("{}/run?x=1", server.base))
        .body(r#"{"cmd": "echo nope"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
