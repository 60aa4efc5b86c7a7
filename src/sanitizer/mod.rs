//! Form Data Sanitization Module
//!
//! Defangs user-supplied nested payloads before redisplay. Every string value
//! gets the fixed structural-tag denylist; full tag and template-expression
//! stripping is the default, skipped only for top-level fields a screen (or an
//! earlier pass) explicitly marks as rich text. All entry points are pure and
//! stateless, safe for unbounded concurrent use.

pub mod engine;
pub mod exceptions;
pub mod tags;
pub mod validators;

pub use engine::{sanitize, sanitize_data, sanitize_string};
pub use exceptions::DO_NOT_SANITIZE_KEY;
pub use tags::DENYLISTED_TAGS;
pub use validators::{sanitize_email, sanitize_phone_number};
