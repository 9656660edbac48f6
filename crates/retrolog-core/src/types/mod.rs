//! # Types
//!
//! Values that travel with a single log request.
//!
//! A request is never stored: it is the severity, the template and the
//! arguments of one call. These types give the severity and the arguments a
//! Rust shape so the printer can check them instead of trusting a C varargs
//! list.

pub mod arg;
pub mod severity;

// Re-export all public types
pub use arg::{Arg, ArgKind};
pub use severity::{Prefix, Severity};
