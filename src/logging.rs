//! Tracing setup and the HTTP access log.
//!
//! Everything goes to the console through an `EnvFilter`. Events on the
//! `access_log` target are also appended to `Config::log_file`: line by line
//! in dev, batched on `Config::log_flush_interval` in prod.

use std::{
    fmt as stdfmt,
    fs::OpenOptions,
    io::{self, Write},
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Request, Response, Version},
    middleware::Next,
};
use tokio::sync::mpsc;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::{
    app::{client_ip, AppState},
    config::Config,
};

const ACCESS_TARGET: &str = "access_log";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    // RUST_LOG overrides this in dev only
    fn console_filter(self) -> EnvFilter {
        match self {
            Self::Dev => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kunamix_site=debug,lead=info,info")),
            Self::Prod => EnvFilter::new("error,lead=info"),
        }
    }
}

/// Append-only sink for access log lines.
#[derive(Clone)]
struct AccessLogFile {
    path: Arc<PathBuf>,
    batch: Option<Batch>,
}

#[derive(Clone)]
struct Batch {
    pending: Arc<Mutex<Vec<u8>>>,
    wake: mpsc::UnboundedSender<()>,
}

impl AccessLogFile {
    /// Writes each line through to disk.
    fn direct(path: PathBuf) -> io::Result<Self> {
        ensure_parent(&path)?;
        Ok(Self {
            path: Arc::new(path),
            batch: None,
        })
    }

    /// Buffers lines and drains them every `every`, or on `flush`.
    /// Spawns the drain task, so it needs a tokio runtime.
    fn batched(path: PathBuf, every: Duration) -> io::Result<Self> {
        ensure_parent(&path)?;
        let path = Arc::new(path);
        let pending = Arc::new(Mutex::new(Vec::with_capacity(8192)));
        let (wake, mut woken) = mpsc::unbounded_channel();

        let task_path = Arc::clone(&path);
        let task_pending = Arc::clone(&pending);
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(every);
            loop {
                let open = tokio::select! {
                    _ = ticks.tick() => true,
                    msg = woken.recv() => msg.is_some(),
                };
                drain(&task_pending, &task_path);
                if !open {
                    break;
                }
            }
        });

        Ok(Self {
            path,
            batch: Some(Batch { pending, wake }),
        })
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

fn append(path: &Path, bytes: &[u8]) -> io::Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?
        .write_all(bytes)
}

fn drain(pending: &Mutex<Vec<u8>>, path: &Path) {
    let bytes = match pending.lock() {
        Ok(mut buf) if !buf.is_empty() => std::mem::take(&mut *buf),
        _ => return,
    };
    // nowhere left to report a failed access-log write
    let _ = append(path, &bytes);
}

impl Write for AccessLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.batch {
            Some(batch) => batch
                .pending
                .lock()
                .map_err(|_| io::Error::other("access log buffer poisoned"))?
                .extend_from_slice(buf),
            None => append(&self.path, buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(batch) = &self.batch {
            let _ = batch.wake.send(());
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for AccessLogFile {
    type Writer = AccessLogFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Installs the global subscriber. Must run inside the tokio runtime.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let file = match config.env {
        Environment::Dev => AccessLogFile::direct(config.log_file.clone())?,
        Environment::Prod => {
            AccessLogFile::batched(config.log_file.clone(), config.log_flush_interval)?
        }
    };
    let dev = config.env == Environment::Dev;

    let console = fmt::layer()
        .with_target(!dev)
        .with_ansi(dev)
        .with_filter(config.env.console_filter());
    let access = fmt::layer()
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .with_writer(file)
        .with_filter(EnvFilter::new(format!("{ACCESS_TARGET}=info")));

    tracing_subscriber::registry()
        .with(console)
        .with(access)
        .try_init()?;

    tracing::info!(env = ?config.env, log_file = %config.log_file.display(), "logging ready");
    Ok(())
}

/// One request in combined-log style:
/// `"GET /blog HTTP/1.1" 200 5120 203.0.113.9 "curl/8.0" 3ms`.
struct AccessRecord {
    method: String,
    path: String,
    version: Version,
    status: u16,
    length: Option<String>,
    ip: String,
    user_agent: Option<String>,
    elapsed: Duration,
}

impl stdfmt::Display for AccessRecord {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        write!(
            f,
            "\"{} {} {}\" {} {} {} \"{}\" {}ms",
            self.method,
            self.path,
            version_label(self.version),
            self.status,
            self.length.as_deref().unwrap_or("-"),
            self.ip,
            self.user_agent.as_deref().unwrap_or("-"),
            self.elapsed.as_millis()
        )
    }
}

fn header_str(headers: &axum::http::HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn access_log_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let mut record = AccessRecord {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        version: request.version(),
        status: 0,
        length: None,
        ip: client_ip(request.headers(), peer, state.config.trust_proxy),
        user_agent: header_str(request.headers(), header::USER_AGENT),
        elapsed: Duration::ZERO,
    };

    let response = next.run(request).await;

    record.status = response.status().as_u16();
    record.length = header_str(response.headers(), header::CONTENT_LENGTH);
    record.elapsed = start.elapsed();
    tracing::info!(target: ACCESS_TARGET, "{record}");

    response
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing() {
        assert_eq!(Environment::parse("production"), Environment::Prod);
        assert_eq!(Environment::parse("PROD"), Environment::Prod);
        assert_eq!(Environment::parse("staging"), Environment::Dev);
    }

    #[test]
    fn access_record_format() {
        let record = AccessRecord {
            method: "POST".to_string(),
            path: "/refer".to_string(),
            version: Version::HTTP_11,
            status: 422,
            length: Some("5120".to_string()),
            ip: "203.0.113.9".to_string(),
            user_agent: None,
            elapsed: Duration::from_millis(3),
        };
        assert_eq!(
            record.to_string(),
            r#""POST /refer HTTP/1.1" 422 5120 203.0.113.9 "-" 3ms"#
        );
    }

    #[test]
    fn direct_file_appends_and_creates_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/access.log");
        let mut file = AccessLogFile::direct(path.clone()).unwrap();
        file.write_all(b"one\n").unwrap();
        file.write_all(b"two\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "one\ntwo\n");
    }

    #[tokio::test]
    async fn batched_file_drains_on_flush() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("access.log");
        let mut file = AccessLogFile::batched(path.clone(), Duration::from_secs(3600)).unwrap();
        file.write_all(b"batched\n").unwrap();
        assert!(!path.exists());
        file.flush().unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(std::fs::read_to_string(path).unwrap(), "batched\n");
    }
}
