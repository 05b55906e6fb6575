//! Key/value input-output capability.
//!
//! The [`KeyValueIo`] contract is how a host environment hands typed
//! payloads to and from a consumer of the monad core. `get_object` is
//! defined entirely in terms of the core: raw text is parsed as JSON into
//! an [`AsyncResult`] and chained through the lifted validator.
//!
//! [`EnvIo`] adapts the CI-runner convention: inputs arrive as
//! `INPUT_<UPPERCASED_KEY>` environment variables and outputs are appended
//! as `KEY=value` lines to the file named by `GITHUB_OUTPUT` when present.
//! [`MemoryIo`] is an in-process double for tests.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::validator::Validator;
use crate::monad::{AsyncOption, AsyncResult, SideEffectError, err, ok};

/// Parses raw text as JSON into the core's result monad.
///
/// # Examples
///
/// ```rust,ignore
/// use async_monads::adapter::parse_json;
///
/// let value = parse_json(r#"{"a": 1}"#).await;
/// assert!(value.is_ok());
/// ```
pub fn parse_json(raw: &str) -> AsyncResult<serde_json::Value, SideEffectError> {
    match serde_json::from_str(raw) {
        Ok(json) => ok(json),
        Err(error) => err(SideEffectError::new(error)),
    }
}

/// Reads and writes string and JSON-object values by key.
pub trait KeyValueIo {
    /// Returns the raw string value for a key, empty when unset.
    fn get(&self, key: &str) -> String;

    /// Records a string value under a key.
    fn set(&self, key: &str, value: &str);

    /// Parses the value for a key as JSON and validates it into a `T`.
    ///
    /// With a validator, its `parse` runs on the parsed JSON; without one,
    /// the JSON deserializes straight to `T`.
    fn get_object<T, V>(&self, key: &str, validator: Option<V>) -> AsyncResult<T, SideEffectError>
    where
        T: DeserializeOwned + Send + 'static,
        V: Validator<T> + Send + 'static,
    {
        let raw = self.get(key);
        parse_json(&raw).and_then(move |json| {
            let fallback = json.clone();
            AsyncOption::from(validator).to_result(
                move |chosen| chosen.parse(json),
                move || match serde_json::from_value(fallback) {
                    Ok(value) => ok(value),
                    Err(error) => err(SideEffectError::new(error)),
                },
            )
        })
    }

    /// Serializes a value as JSON and records it under a key.
    fn set_object<T>(&self, key: &str, value: &T) -> AsyncResult<(), SideEffectError>
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(text) => {
                self.set(key, &text);
                ok(())
            }
            Err(error) => err(SideEffectError::new(error)),
        }
    }
}

/// The environment variable naming an input key.
fn input_variable(key: &str) -> String {
    format!("INPUT_{}", key.to_uppercase().replace(' ', "_"))
}

/// [`KeyValueIo`] over the process environment, CI-runner style.
pub struct EnvIo {
    outputs: Mutex<HashMap<String, String>>,
}

impl EnvIo {
    /// Creates an adapter with an empty output record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            outputs: Mutex::new(HashMap::new()),
        }
    }

    /// A snapshot of every output recorded so far.
    #[must_use]
    pub fn outputs(&self) -> HashMap<String, String> {
        self.outputs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Default for EnvIo {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueIo for EnvIo {
    fn get(&self, key: &str) -> String {
        std::env::var(input_variable(key))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) {
        self.outputs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());

        if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
            let appended = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .and_then(|mut file| writeln!(file, "{key}={value}"));
            if let Err(error) = appended {
                tracing::warn!(key, %error, "failed to append output line");
            }
        }
    }
}

/// In-process [`KeyValueIo`] double for tests.
#[derive(Default)]
pub struct MemoryIo {
    inputs: HashMap<String, String>,
    outputs: Mutex<HashMap<String, String>>,
}

impl MemoryIo {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an input value, builder style.
    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(key.into(), value.into());
        self
    }

    /// The output recorded under a key, if any.
    #[must_use]
    pub fn output(&self, key: &str) -> Option<String> {
        self.outputs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl KeyValueIo for MemoryIo {
    fn get(&self, key: &str) -> String {
        self.inputs.get(key).cloned().unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) {
        self.outputs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}
