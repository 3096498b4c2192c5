//! Minimal HTTP/1.1 server for integration tests: answers every request with one status.
//!
//! Records the request methods it sees so tests can assert HEAD vs GET probes.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct StatusServerOptions {
    /// Status returned to GET (and to HEAD when `head_allowed`).
    pub status: u16,
    /// If false, HEAD returns 405 (simulates servers that block HEAD).
    pub head_allowed: bool,
    /// If set, respond with a 302 to this path first; the path then gets `status`.
    pub redirect_to: Option<&'static str>,
}

impl Default for StatusServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            head_allowed: true,
            redirect_to: None,
        }
    }
}

pub struct StatusServer {
    pub url: String,
    methods: Arc<Mutex<Vec<String>>>,
}

impl StatusServer {
    /// Methods of all requests received so far, in arrival order.
    pub fn methods(&self) -> Vec<String> {
        self.methods.lock().unwrap().clone()
    }
}

/// Starts a server answering every request with `status`.
pub fn start(status: u16) -> StatusServer {
    start_with_options(StatusServerOptions {
        status,
        ..Default::default()
    })
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start_with_options(opts: StatusServerOptions) -> StatusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let methods = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&methods);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, opts, &seen));
        }
    });
    StatusServer {
        url: format!("http://127.0.0.1:{}/", port),
        methods,
    }
}

/// A URL on a port nothing listens on (bound, then released).
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, opts: StatusServerOptions, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let mut request_line = request.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let path = request_line.next().unwrap_or("/").to_string();
    seen.lock().unwrap().push(method.clone());

    let (code, extra) = match opts.redirect_to {
        Some(target) if path != target => (302, format!("Location: {}\r\n", target)),
        _ if method.eq_ignore_ascii_case("HEAD") && !opts.head_allowed => (405, String::new()),
        _ => (opts.status, String::new()),
    };
    let body = if method.eq_ignore_ascii_case("HEAD") { "" } else { "ok" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n{}",
        code,
        reason(code),
        2,
        extra,
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn reason(code: u16) -> &'static str {
    match code {
        200 => "OK",
        204 => "No Content",
        302 => "Found",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        505 => "HTTP Version Not Supported",
        _ => "Status",
    }
}
