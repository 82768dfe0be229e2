//! Log output setup for the configured [`LogDestination`]

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use syslog::{Facility, Formatter3164, Logger, LoggerBackend};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LogDestination;
use crate::errors::{AppError, AppResult};

/// Keeps background log writers alive; drop at process exit.
#[must_use]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` is honoured; the base level is `info`, or `debug` when verbose.
pub fn init_logging(destination: &LogDestination, verbose: bool) -> AppResult<LoggingGuard> {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = || {
        EnvFilter::from_default_env()
            .add_directive(level.parse().unwrap_or_else(|_| tracing::Level::INFO.into()))
    };

    let mut file_guard = None;
    let installed = match destination {
        LogDestination::None => return Ok(LoggingGuard { _file: None }),
        LogDestination::Stdout => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stdout)
            .try_init(),
        LogDestination::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AppError::io_with_source(path, "open log file", e))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            file_guard = Some(guard);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
        }
        LogDestination::Syslog => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(SyslogMakeWriter::connect("memebot")?)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .try_init(),
    };

    installed.map_err(|e| AppError::config(format!("Failed to install log subscriber: {}", e)))?;

    if verbose {
        tracing::debug!(?destination, "Verbose logging enabled");
    }

    Ok(LoggingGuard { _file: file_guard })
}

type SyslogLogger = Logger<LoggerBackend, Formatter3164>;

/// Sends each formatted event to the local syslog daemon at notice level
#[derive(Clone)]
pub struct SyslogMakeWriter {
    logger: Arc<Mutex<SyslogLogger>>,
}

impl SyslogMakeWriter {
    pub fn connect(process: &str) -> AppResult<Self> {
        let formatter = Formatter3164 {
            facility: Facility::LOG_DAEMON,
            hostname: None,
            process: process.to_string(),
            pid: std::process::id(),
        };
        let logger = syslog::unix(formatter)
            .map_err(|e| AppError::config(format!("error opening syslog: {}", e)))?;
        Ok(Self {
            logger: Arc::new(Mutex::new(logger)),
        })
    }
}

impl<'a> MakeWriter<'a> for SyslogMakeWriter {
    type Writer = SyslogLine;

    fn make_writer(&'a self) -> Self::Writer {
        SyslogLine {
            logger: Arc::clone(&self.logger),
            buf: Vec::new(),
        }
    }
}

/// Buffers one event and ships it on flush or drop
pub struct SyslogLine {
    logger: Arc<Mutex<SyslogLogger>>,
    buf: Vec<u8>,
}

impl SyslogLine {
    fn send(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();

        let mut logger = self.logger.lock().unwrap_or_else(|p| p.into_inner());
        logger
            .notice(line)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

impl Write for SyslogLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send()
    }
}

impl Drop for SyslogLine {
    fn drop(&mut self) {
        let _ = self.send();
    }
}
