//! Request middleware.
//!
//! Only request tracing lives here. Bearer authentication is an extractor in
//! the HTTP adapter so unauthenticated routes stay untouched.

pub mod trace;

pub use trace::Trace;
