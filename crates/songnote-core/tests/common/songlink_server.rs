//! Minimal HTTP/1.1 server standing in for the song.link API in integration tests.
//!
//! Answers every GET with a fixed status and body and records the request
//! target (path + query) of each request it sees.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// Running stub server.
pub struct StubServer {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub base: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Lookup endpoint on this server, same path as the real API.
    pub fn endpoint(&self) -> String {
        format!("{}/v1-alpha.1/links", self.base)
    }

    /// Request targets seen so far, in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(status: u16, body: &str) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let targets = Arc::new(Mutex::new(Vec::new()));
    let body = Arc::new(body.to_string());

    let seen = Arc::clone(&targets);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, status, &body, &seen));
        }
    });

    StubServer {
        base: format!("http://127.0.0.1:{}", port),
        targets,
    }
}

fn handle(mut stream: std::net::TcpStream, status: u16, body: &str, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    // "GET /v1-alpha.1/links?url=... HTTP/1.1"
    if let Some(target) = request.lines().next().and_then(|l| l.split(' ').nth(1)) {
        seen.lock().unwrap().push(target.to_string());
    }

    let reason = if (200..300).contains(&status) { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
