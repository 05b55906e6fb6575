//! Error types for the monad core.
//!
//! This module provides the error returned when a monad is forced open in
//! the wrong state, and the normalized error channel produced by the
//! caught-exception side effect operation.

/// The monad a failed unwrap was performed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonadKind {
    /// An `AsyncOption` was unwrapped.
    Option,
    /// An `AsyncResult` was unwrapped.
    Result,
}

impl std::fmt::Display for MonadKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Option => write!(formatter, "option"),
            Self::Result => write!(formatter, "result"),
        }
    }
}

/// The variant an unwrap expected, against the variant it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnwrapExpectation {
    /// `try_unwrap` on an `AsyncResult` that settled as Err.
    OkGotError,
    /// `try_unwrap_err` on an `AsyncResult` that settled as Ok.
    ErrGotOk,
    /// `try_unwrap` on an `AsyncOption` that settled as none.
    SomeGotNone,
}

impl std::fmt::Display for UnwrapExpectation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OkGotError => write!(formatter, "Expected Ok got Error"),
            Self::ErrGotOk => write!(formatter, "Expected Err got Ok"),
            Self::SomeGotNone => write!(formatter, "Expected Some got None"),
        }
    }
}

/// Represents a monad forced open in the wrong state.
///
/// Returned by the non-defaulted unwrap operations (`try_unwrap`,
/// `try_unwrap_err`) when the wrapper settled as the other variant. This is
/// a programmer-misuse error: it is never swallowed by the core and always
/// surfaces to the immediate caller of the unwrap.
///
/// # Examples
///
/// ```rust
/// use async_monads::monad::{MonadKind, UnwrapError, UnwrapExpectation};
///
/// let error = UnwrapError::new(MonadKind::Option, UnwrapExpectation::SomeGotNone);
/// assert_eq!(error.message(), "Failed to unwrap");
/// assert_eq!(
///     format!("{}", error),
///     "Failed to unwrap: Expected Some got None"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapError {
    /// The monad the unwrap was performed on.
    pub monad: MonadKind,
    /// What the unwrap expected, against what it found.
    pub expectation: UnwrapExpectation,
}

impl UnwrapError {
    /// Creates a new `UnwrapError`.
    #[must_use]
    pub const fn new(monad: MonadKind, expectation: UnwrapExpectation) -> Self {
        Self { monad, expectation }
    }

    /// The fixed message carried by every failed unwrap.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        "Failed to unwrap"
    }
}

impl std::fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.message(), self.expectation)
    }
}

impl std::error::Error for UnwrapError {}

/// A normalized error captured from a failing side effect.
///
/// This is the error channel of `AsyncResult::exec`: whatever the side
/// effect failed with - an error return, a panic, or a pre-existing domain
/// error transformed by the mapper - is normalized into a message plus an
/// optional source error.
///
/// # Examples
///
/// ```rust
/// use async_monads::monad::SideEffectError;
///
/// let error = SideEffectError::msg("boom");
/// assert_eq!(format!("{}", error), "boom");
/// ```
#[derive(Debug)]
pub struct SideEffectError {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SideEffectError {
    /// Creates an error from a bare message, with no source.
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error from an existing error value.
    ///
    /// The message is the error's `Display` output; the error itself is
    /// retained as the source.
    #[must_use]
    pub fn new(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Normalizes a caught panic payload.
    ///
    /// String payloads keep their text; anything else collapses to a fixed
    /// message, since arbitrary payloads carry no portable representation.
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "side effect panicked".to_string()
        };
        Self {
            message,
            source: None,
        }
    }

    /// The normalized message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SideEffectError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for SideEffectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|boxed| boxed.as_ref() as &(dyn std::error::Error + 'static))
    }
}
