//! Pending API results.
//!
//! Dispatching a call returns an [`ApiCall`] handle immediately; the HTTP
//! round-trip runs on a spawned task. Nothing blocks until a field of the
//! response is first read, at which point the body is fetched, parsed as
//! JSON and memoized for every later access on the same handle.

use crate::error::{DdnsError, Result};
use serde_json::Value;
use tokio::sync::{Mutex, OnceCell};
use tokio::task::JoinHandle;

/// Handle for an in-flight API call.
#[derive(Debug)]
pub struct ApiCall {
    task: Mutex<Option<JoinHandle<Result<String>>>>,
    parsed: OnceCell<Value>,
}

impl ApiCall {
    pub(crate) fn new(task: JoinHandle<Result<String>>) -> Self {
        Self {
            task: Mutex::new(Some(task)),
            parsed: OnceCell::new(),
        }
    }

    /// Resolve the call, parsing the response body as JSON.
    ///
    /// The first caller awaits the spawned request and caches the parsed
    /// mapping; the `OnceCell` guards against a concurrent double fetch.
    /// Subsequent calls return the cached value without touching the
    /// network.
    pub async fn response(&self) -> Result<&Value> {
        self.parsed
            .get_or_try_init(|| async {
                let task = self.task.lock().await.take();
                let task = task.ok_or_else(|| {
                    DdnsError::Task("response task already consumed".to_string())
                })?;

                let body = task.await.map_err(|e| DdnsError::Task(e.to_string()))??;
                Ok(serde_json::from_str(&body)?)
            })
            .await
    }

    /// Read a top-level field of the parsed response.
    ///
    /// Blocks until the call completes on first access. A field absent
    /// from the response is a [`DdnsError::MissingField`].
    pub async fn field(&self, name: &str) -> Result<Value> {
        let response = self.response().await?;
        response
            .get(name)
            .cloned()
            .ok_or_else(|| DdnsError::MissingField {
                field: name.to_string(),
            })
    }
}
