//! Common test utilities and helpers
//!
//! Provides a builder around the `memebot` binary and an in-process stand-in
//! for the memegen API.

#![allow(dead_code)]

use assert_cmd::Command;
use axum::{http::header, http::StatusCode, routing::get, Router};
use predicates::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const ENV_VARS: [&str; 5] = [
    "MEMEBOT_LISTEN",
    "MEMEBOT_LOG",
    "MEMEBOT_IMGWIDTH",
    "MEMEBOT_MEMEGEN_URL",
    "MEMEBOT_TOKEN",
];

/// Test command builder for the memebot binary
pub struct TestCommand {
    cmd: Command,
}

impl TestCommand {
    /// memebot with a clean environment and logging disabled
    pub fn new() -> Self {
        let mut cmd = Command::cargo_bin("memebot").expect("Failed to find memebot binary");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("MEMEBOT_LOG", "none");
        Self { cmd }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.cmd.arg(arg.as_ref());
        }
        self
    }

    pub fn arg<S: AsRef<str>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg.as_ref());
        self
    }

    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.cmd.env(key.as_ref(), val.as_ref());
        self
    }

    /// Execute and expect success
    pub fn expect_success(mut self) -> TestAssertion {
        let assert = self.cmd.assert().success();
        TestAssertion { assert }
    }

    /// Execute and expect failure
    pub fn expect_failure(mut self) -> TestAssertion {
        let assert = self.cmd.assert().failure();
        TestAssertion { assert }
    }
}

impl Default for TestCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Test assertion wrapper with convenient methods
pub struct TestAssertion {
    assert: assert_cmd::assert::Assert,
}

impl TestAssertion {
    pub fn stdout_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stdout(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    pub fn stdout_contains_all<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.assert = self.assert.stdout(predicate::str::contains(pattern.as_ref()));
        }
        self
    }

    pub fn stderr_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stderr(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    /// Parse stdout as a JSON slash-command reply
    pub fn json(self) -> serde_json::Value {
        let output = self.assert.get_output().stdout.clone();
        serde_json::from_slice(&output).expect("stdout should be JSON")
    }

    pub fn done(self) -> assert_cmd::assert::Assert {
        self.assert
    }
}

/// In-process memegen stand-in serving `/api/templates/`
pub struct MockMemegen {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockMemegen {
    /// Serve a small, well-formed template listing
    pub fn start() -> Self {
        let body = serde_json::json!({
            "Drakeposting": "https://memegen.link/api/templates/drake",
            "Futurama Fry": "https://memegen.link/api/templates/fry",
            "Ancient Aliens Guy": "https://memegen.link/api/templates/aag",
            "Broken": "no-slash-here",
        })
        .to_string();
        Self::start_with(StatusCode::OK, body)
    }

    /// Serve an arbitrary status and body for the listing
    pub fn start_with(status: StatusCode, body: String) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let app = Router::new().route(
            "/api/templates/",
            get(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                let body = body.clone();
                async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
            }),
        );

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock memegen");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let addr = listener.local_addr().expect("mock memegen address");

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock memegen runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                axum::serve(listener, app).await.expect("mock memegen server");
            });
        });

        Self {
            base_url: format!("http://{}/", addr),
            hits,
        }
    }

    /// Number of listing requests served so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Base URL of a port that nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("ephemeral address");
    drop(listener);
    format!("http://{}/", addr)
}
