//! Schema-validation capability.
//!
//! Any validation backend is consumed through the narrow [`Validator`]
//! contract: raw JSON in, validated value or normalized error out, as an
//! [`AsyncResult`]. The core's `to_result` combinator is the mechanism by
//! which a raw value becomes validated through this capability.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::monad::{AsyncResult, SideEffectError, err, ok};

/// Parses untyped input into a validated `T`.
pub trait Validator<T> {
    /// Validates the input, producing the typed value or a normalized
    /// error.
    fn parse(&self, input: serde_json::Value) -> AsyncResult<T, SideEffectError>;
}

/// A [`Validator`] backed by serde deserialization.
///
/// # Examples
///
/// ```rust,ignore
/// use async_monads::adapter::{SerdeValidator, Validator};
///
/// let validator = SerdeValidator::<Vec<u32>>::new();
/// let parsed = validator.parse(serde_json::json!([1, 2, 3])).await;
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
/// ```
pub struct SerdeValidator<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> SerdeValidator<T> {
    /// Creates a validator for `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validator<T> for SerdeValidator<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn parse(&self, input: serde_json::Value) -> AsyncResult<T, SideEffectError> {
        match serde_json::from_value(input) {
            Ok(value) => ok(value),
            Err(error) => err(SideEffectError::new(error)),
        }
    }
}
