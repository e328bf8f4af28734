//! Loopback stand-in for the prediction service.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// One request as seen by the fake service.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Serves `/health` and `/predict` until the test process exits.
pub struct FakeService {
    pub base_url: String,
    pub requests: Receiver<SeenRequest>,
}

impl FakeService {
    /// `health_status` is the status line for `/health`; `/predict` answers with `issue_type`.
    pub fn start(health_status: &'static str, issue_type: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let tx = tx.clone();
                thread::spawn(move || handle(stream, &tx, health_status, issue_type));
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            requests: rx,
        }
    }
}

fn handle(
    stream: TcpStream,
    tx: &Sender<SeenRequest>,
    health_status: &str,
    issue_type: &str,
) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut body = vec![0u8; content_length];
    if reader.read_exact(&mut body).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();
    let (status, payload) = match path.as_str() {
        "/health" => (health_status.to_string(), r#"{"status":"ok"}"#.to_string()),
        "/predict" => (
            "200 OK".to_string(),
            format!(r#"{{"predicted_issue_type":"{issue_type}"}}"#),
        ),
        _ => ("404 Not Found".to_string(), "{}".to_string()),
    };
    let _ = tx.send(SeenRequest {
        method,
        path,
        body: String::from_utf8_lossy(&body).into_owned(),
    });
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
