use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

/// Minimal HTTP service that answers every request with one canned reply.
///
/// Captures each request body so tests can assert on the submitted payload.
pub struct StubService {
    pub base_url: String,
    bodies: Arc<Mutex<Vec<String>>>,
    hits: Arc<AtomicUsize>,
}

impl StubService {
    pub fn start(status_line: &'static str, body: &'static str) -> Self {
        Self::start_with_delay(status_line, body, Duration::ZERO)
    }

    pub fn start_with_delay(
        status_line: &'static str,
        body: &'static str,
        delay: Duration,
    ) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let hits = Arc::new(AtomicUsize::new(0));
        let thread_bodies = Arc::clone(&bodies);
        let thread_hits = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    break;
                };
                thread_hits.fetch_add(1, Ordering::SeqCst);
                let request_body = read_request_body(&mut stream);
                thread_bodies
                    .lock()
                    .unwrap_or_else(|err| err.into_inner())
                    .push(request_body);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        Self {
            base_url,
            bodies,
            hits,
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn request_bodies(&self) -> Vec<String> {
        self.bodies
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }
}

fn read_request_body(stream: &mut std::net::TcpStream) -> String {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let header_end = raw.windows(4).position(|w| w == b"\r\n\r\n");
        if let Some(end) = header_end {
            let headers = String::from_utf8_lossy(&raw[..end]).to_string();
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            let body_start = end + 4;
            while raw.len() < body_start + content_length {
                let Ok(read) = stream.read(&mut chunk) else {
                    break;
                };
                if read == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..read]);
            }
            let body_end = (body_start + content_length).min(raw.len());
            return String::from_utf8_lossy(&raw[body_start..body_end]).to_string();
        }
        let Ok(read) = stream.read(&mut chunk) else {
            return String::new();
        };
        if read == 0 {
            return String::new();
        }
        raw.extend_from_slice(&chunk[..read]);
    }
}
