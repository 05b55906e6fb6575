//! Collaborator capabilities consuming the monad core.
//!
//! Everything here is a thin wrapper: the narrow contracts a host
//! environment implements ([`Validator`], [`KeyValueIo`], [`Logger`]) and
//! ready-made adapters for common backends (serde validation, environment
//! variable input-output, `tracing` logging). JSON is the only payload
//! format at this boundary - standard syntax, no custom framing.

mod io;
mod logger;
mod validator;

pub use io::{EnvIo, KeyValueIo, MemoryIo, parse_json};
pub use logger::{Logger, TracingLogger};
pub use validator::{SerdeValidator, Validator};
