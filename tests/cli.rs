use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary pointed at `url` with an explicit session and an isolated config dir.
fn invoice_desk(url: &str, config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("invoice-desk").expect("binary");
    cmd.env_remove("INVOICE_DESK_URL")
        .env_remove("INVOICE_DESK_SESSION")
        .env_remove("INVOICE_DESK_LOG")
        .args(["--url", url, "--session-token", "tok_123", "--config-dir"])
        .arg(config_dir.path());
    cmd
}

fn staged(ids: &[&str]) -> serde_json::Value {
    ids.iter()
        .map(|id| {
            json!({
                "ID": id,
                "Sender": "billing@acme.test",
                "Subject": format!("Invoice {}", id),
                "ReceivedAt": 1_700_000_000
            })
        })
        .collect()
}

#[tokio::test]
async fn invoices_list_prints_table_and_footer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/invoices/staged"))
        .and(query_param("limit", "25"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(staged(&["101", "102"])))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("tempdir");

    invoice_desk(&server.uri(), &dir)
        .args(["invoices", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("101"))
        .stdout(predicate::str::contains("102"))
        .stdout(predicate::str::contains("2023-11-14"))
        .stdout(predicate::str::contains("Page 1 | 2 invoice(s) | --page 2 for next"));
}

#[tokio::test]
async fn invoices_list_uses_page_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/invoices/staged"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(staged(&["311"])))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("tempdir");

    invoice_desk(&server.uri(), &dir)
        .args(["invoices", "list", "--page", "3", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("311"))
        .stdout(predicate::str::contains("--page 2 for previous"));
}

#[tokio::test]
async fn invoices_list_json_is_parseable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/invoices/staged"))
        .respond_with(ResponseTemplate::new(200).set_body_json(staged(&["7"])))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("tempdir");

    let output = invoice_desk(&server.uri(), &dir)
        .args(["invoices", "list", "--json"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(payload[0]["ID"], "7");
    assert_eq!(payload[0]["ReceivedAt"], 1_700_000_000);
}

#[tokio::test]
async fn invoices_list_empty_page_says_so() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/invoices/staged"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("tempdir");

    invoice_desk(&server.uri(), &dir)
        .args(["invoices", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No invoices pending review."))
        .stdout(predicate::str::contains("for next").not());
}

#[tokio::test]
async fn invoices_list_unauthorized_suggests_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/invoices/staged"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Not authenticated"})))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("tempdir");

    invoice_desk(&server.uri(), &dir)
        .args(["invoices", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invoice-desk auth login"));
}

#[tokio::test]
async fn approve_reports_saved_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/invoices/42/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "approved",
            "filename": "acme-1001.pdf",
            "save_path": "/srv/invoices/acme-1001.pdf"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("tempdir");

    invoice_desk(&server.uri(), &dir)
        .args(["invoices", "approve", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice 42 approved"))
        .stdout(predicate::str::contains("/srv/invoices/acme-1001.pdf"));
}

#[tokio::test]
async fn reject_failure_shows_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/invoices/42/reject"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "invoice already processed"})))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("tempdir");

    invoice_desk(&server.uri(), &dir)
        .args(["invoices", "reject", "42"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invoice already processed"));
}

#[test]
fn approve_rejects_path_like_id() {
    let dir = TempDir::new().expect("tempdir");

    // Nothing listens here; validation must fail first
    invoice_desk("http://127.0.0.1:9", &dir)
        .args(["invoices", "approve", "42/../admin"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid characters"));
}

#[tokio::test]
async fn auth_status_shows_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "ana@acme.test"})))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("tempdir");

    invoice_desk(&server.uri(), &dir)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ana@acme.test"))
        .stdout(predicate::str::contains("tok_123").not());
}

#[test]
fn config_set_then_show() {
    let dir = TempDir::new().expect("tempdir");

    invoice_desk("http://127.0.0.1:9", &dir)
        .args(["config", "set", "page-size", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set page-size to: 50"));

    let saved = std::fs::read_to_string(dir.path().join("config.toml")).expect("config file");
    assert!(saved.contains("page_size = 50"));

    invoice_desk("http://127.0.0.1:9", &dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size"))
        .stdout(predicate::str::contains("50 (config)"));
}

#[test]
fn config_set_unknown_key_fails() {
    let dir = TempDir::new().expect("tempdir");

    invoice_desk("http://127.0.0.1:9", &dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Known keys"));
}

#[test]
fn dashboard_refuses_non_terminal() {
    let dir = TempDir::new().expect("tempdir");

    invoice_desk("http://127.0.0.1:9", &dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs an interactive terminal"));
}
