//! Tests for submitting check results
//!
//! Transport-level behaviour is checked against a recording transport and a
//! one-shot HTTP responder bound to localhost; nothing leaves the machine.

use std::sync::Mutex;

use async_trait::async_trait;
use nrdp::{
    build_document_string, CheckResult, ConfigError, DocumentError, HostResult, HostState,
    ServiceResult, ServiceState, SubmitError, Submitter, SubmitterConfig, Transport,
    TransportError,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Records every form it is asked to send and answers with a fixed status
struct RecordingTransport {
    status: Result<u16, String>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl RecordingTransport {
    fn responding(status: u16) -> Self {
        Self { status: Ok(status), requests: Mutex::new(Vec::new()) }
    }

    fn failing(error: &str) -> Self {
        Self { status: Err(error.to_string()), requests: Mutex::new(Vec::new()) }
    }

    fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post_form(&self, endpoint: &str, form: &[(&str, &str)]) -> Result<u16, TransportError> {
        let form = form.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        self.requests.lock().unwrap().push((endpoint.to_string(), form));

        self.status.clone().map_err(TransportError::Other)
    }
}

fn config(endpoint: &str) -> SubmitterConfig {
    SubmitterConfig::new(endpoint, "secret").with_timeout_seconds(5)
}

fn batch() -> Vec<CheckResult> {
    let host = HostResult::new()
        .with_host("web01")
        .unwrap()
        .with_state(HostState::Up)
        .with_output("PING OK")
        .unwrap();
    let service = ServiceResult::new()
        .with_host("web01")
        .unwrap()
        .with_service("HTTP")
        .unwrap()
        .with_state(ServiceState::Critical)
        .with_output("connection refused")
        .unwrap();

    vec![host.into(), service.into()]
}

#[test]
fn test_config_validation() {
    let transport = RecordingTransport::responding(200);
    let result = Submitter::with_transport(SubmitterConfig::new("", "secret"), transport);
    assert!(matches!(result, Err(ConfigError::MissingField("endpoint"))));

    let transport = RecordingTransport::responding(200);
    let result = Submitter::with_transport(SubmitterConfig::new("https://x/nrdp/", ""), transport);
    assert!(matches!(result, Err(ConfigError::MissingField("token"))));

    let result = Submitter::new(config("nagios.example.com"));
    assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
}

#[tokio::test]
async fn test_submit_sends_one_form() {
    let _ = logger::try_init();

    let submitter = Submitter::with_transport(
        config("https://nagios.example.com/nrdp/"),
        RecordingTransport::responding(200),
    )
    .unwrap();
    let batch = batch();

    assert!(submitter.submit(&batch).await.unwrap());

    let requests = submitter.transport().requests();
    assert_eq!(requests.len(), 1, "exactly one request per submission");

    let (endpoint, form) = &requests[0];
    assert_eq!(endpoint, "https://nagios.example.com/nrdp/");

    let expected = vec![
        ("cmd".to_string(), "submitcheck".to_string()),
        ("token".to_string(), "secret".to_string()),
        ("XMLDATA".to_string(), build_document_string(&batch).unwrap()),
    ];
    assert_eq!(form, &expected);
}

#[tokio::test]
async fn test_non_success_status_is_false() {
    let _ = logger::try_init();

    for status in [301, 403, 500] {
        let submitter = Submitter::with_transport(
            config("https://nagios.example.com/nrdp/"),
            RecordingTransport::responding(status),
        )
        .unwrap();

        assert!(!submitter.submit(&batch()).await.unwrap(), "status {status} should fail");
        assert!(matches!(
            submitter.try_submit(&batch()).await,
            Err(SubmitError::Rejected { status: rejected }) if rejected == status
        ));
    }
}

#[tokio::test]
async fn test_transport_failure_is_false() {
    let _ = logger::try_init();

    let submitter = Submitter::with_transport(
        config("https://nagios.example.com/nrdp/"),
        RecordingTransport::failing("connection reset"),
    )
    .unwrap();

    assert!(!submitter.submit(&batch()).await.unwrap());
    assert!(matches!(submitter.try_submit(&batch()).await, Err(SubmitError::Transport(_))));
    assert_eq!(submitter.transport().requests().len(), 2, "no retries");
}

#[tokio::test]
async fn test_invalid_batch_is_not_sent() {
    let submitter = Submitter::with_transport(
        config("https://nagios.example.com/nrdp/"),
        RecordingTransport::responding(200),
    )
    .unwrap();

    let incomplete: CheckResult = HostResult::new().with_state(HostState::Down).into();

    let result = submitter.submit(&[incomplete]).await;
    assert!(matches!(result, Err(DocumentError::InvalidResult { index: 0, .. })));
    assert!(submitter.transport().requests().is_empty());
}

/// Accept one connection, answer with `status_line` and hand back the raw request
async fn serve_once(status_line: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response =
            format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        request
    });

    (format!("http://{addr}/nrdp/"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut request = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let read = socket.read(&mut chunk).await.unwrap();
        if read == 0 {
            break;
        }
        request.extend_from_slice(&chunk[..read]);

        if let Some(end) = request.windows(4).position(|window| window == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&request[..end]).to_lowercase();
            let body_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if request.len() >= end + 4 + body_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&request).into_owned()
}

fn form_field(request: &str, name: &str) -> Option<String> {
    let (_, body) = request.split_once("\r\n\r\n")?;

    url::form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[tokio::test]
async fn test_http_transport_posts_form() {
    let _ = logger::try_init();

    let (endpoint, server) = serve_once("200 OK").await;
    let submitter =
        Submitter::new(config(&endpoint).with_auth("nrdp", Some("pw".to_string()))).unwrap();
    let batch = batch();

    assert!(submitter.submit(&batch).await.unwrap());

    let request = server.await.unwrap();
    let head = request.to_lowercase();
    assert!(request.starts_with("POST /nrdp/ HTTP/1.1"), "unexpected request: {request}");
    assert!(head.contains("content-type: application/x-www-form-urlencoded"));
    // base64("nrdp:pw")
    assert!(head.contains("authorization: basic bnjkcdpwdw=="));

    assert_eq!(form_field(&request, "cmd").as_deref(), Some("submitcheck"));
    assert_eq!(form_field(&request, "token").as_deref(), Some("secret"));
    assert_eq!(form_field(&request, "XMLDATA"), Some(build_document_string(&batch).unwrap()));
}

#[tokio::test]
async fn test_http_transport_server_error() {
    let _ = logger::try_init();

    let (endpoint, server) = serve_once("500 Internal Server Error").await;
    let submitter = Submitter::new(config(&endpoint)).unwrap();

    assert!(!submitter.submit(&batch()).await.unwrap());
    server.await.unwrap();
}

#[tokio::test]
async fn test_http_transport_connection_refused() {
    let _ = logger::try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let submitter = Submitter::new(config(&format!("http://{addr}/nrdp/"))).unwrap();

    assert!(!submitter.submit(&batch()).await.unwrap());
    assert!(matches!(submitter.try_submit(&batch()).await, Err(SubmitError::Transport(_))));
}
