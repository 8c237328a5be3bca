use std::sync::{Arc, Mutex};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// Minimal HTTP/1.1 server answering every request with one canned response.
pub struct HttpStub {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl HttpStub {
    pub async fn respond_with(status: u16, body: &str) -> Self {
        Self::start(Some((status, body.to_string()))).await
    }

    /// Accepts connections but never answers.
    pub async fn silent() -> Self {
        Self::start(None).await
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> String {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    async fn start(response: Option<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let recorded = recorded.clone();
                let response = response.clone();
                tokio::spawn(handle_connection(socket, recorded, response));
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    recorded: Arc<Mutex<Vec<String>>>,
    response: Option<(u16, String)>,
) {
    let request = read_request(&mut socket).await;
    recorded.lock().unwrap().push(request);

    let Some((status, body)) = response else {
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        return;
    };

    let raw = format!(
        "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = socket.write_all(raw.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            break;
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
