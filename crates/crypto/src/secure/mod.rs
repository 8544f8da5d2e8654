//! Memory handling for secret material
//!
//! Secrets here are not encrypted at rest; they live in process memory for
//! the whole session. The containers only guarantee two things:
//! - memory is zeroed when the value is dropped
//! - `Debug` output shows `[REDACTED]` instead of the secret

mod secret;

pub use secret::{SecretArray, SecretString};
