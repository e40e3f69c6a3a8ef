//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns shared by both HTTP
//! processes.

pub mod trace;

pub use trace::{TRACE_ID_HEADER, Trace, TraceId};
