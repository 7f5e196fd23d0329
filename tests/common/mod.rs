use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serveur HTTP local qui répond une seule fois puis rend la ligne de requête reçue.
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            let text = String::from_utf8_lossy(&raw).to_string();
            text.lines().next().unwrap_or_default().to_string()
        });
        Self {
            url: format!("http://{addr}/api/v2/holidays"),
            handle,
        }
    }

    /// Attend la requête, ex. `GET /api/v2/holidays?api_key=..&country=US&year=2024 HTTP/1.1`.
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}

/// Corps Calendarific minimal pour une liste de dates ISO.
pub fn calendarific_body(dates: &[&str]) -> String {
    let holidays = dates
        .iter()
        .map(|d| format!(r#"{{"name": "Holiday", "date": {{"iso": "{d}"}}}}"#))
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"meta": {{"code": 200}}, "response": {{"holidays": [{holidays}]}}}}"#)
}
