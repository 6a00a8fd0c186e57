//! Diagnostics for the MiniC toolchain.
//!
//! Every phase reports problems as a [`Diagnostic`]: a severity, a stable
//! [`ErrorCode`], a message, the source [`Position`](minic_ir::Position) it
//! refers to, and optional notes. Rendering is left to an
//! [`emitter::DiagnosticEmitter`], so phases never print on their own.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
