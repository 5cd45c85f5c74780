//! A local stand-in for the portal, for integration tests.
//!
//! Enabled by the `test-util` feature.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use encoding_rs::EUC_JP;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::debug;

use crate::ClientConfig;

/// `(path prefix, body)` pairs; the first matching prefix answers.
pub type Routes = Vec<(String, Vec<u8>)>;

/// HTTP server answering fixed bodies by path prefix, 404 otherwise.
///
/// Every requested path is recorded in arrival order.
#[derive(Debug, Clone)]
pub struct FakePortal {
    host: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl FakePortal {
    /// Binds an ephemeral local port and starts serving `routes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn serve(routes: Routes) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let host = format!("http://{}", listener.local_addr()?);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let log = Arc::clone(&seen);
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    if let Err(e) = answer(socket, &routes, &log).await {
                        debug!(error = %e, "fake portal connection failed");
                    }
                });
            }
        });

        Ok(Self { host, seen })
    }

    /// Returns the scheme and authority, e.g. `http://127.0.0.1:40123`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns a client configuration pointed at this server.
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_host(&self.host)
    }

    /// Returns the paths requested so far.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Encodes `html` the way the portal serves its pages.
#[must_use]
pub fn euc_page(html: &str) -> Vec<u8> {
    EUC_JP.encode(html).0.into_owned()
}

async fn answer(
    mut socket: TcpStream,
    routes: &Routes,
    log: &Mutex<Vec<String>>,
) -> io::Result<()> {
    let mut buf = vec![0u8; 16 * 1024];
    let mut read = 0;
    while read < buf.len() && !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf[read..]).await?;
        if n == 0 {
            break;
        }
        read += n;
    }

    let head = String::from_utf8_lossy(&buf[..read]);
    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    log.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(path.clone());

    let (status, body) = routes
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix.as_str()))
        .map_or(("404 Not Found", b"".as_slice()), |(_, body)| ("200 OK", body.as_slice()));
    let header = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    socket.write_all(header.as_bytes()).await?;
    socket.write_all(body).await?;
    socket.shutdown().await
}
