//! Stack growth for the recursive tree walkers.
//!
//! The parser, the evaluator and the DOT emitter all recurse once per nesting
//! level of the source program. A pathological input such as
//! `((((...))))` or a few thousand nested blocks would otherwise exhaust the
//! native stack long before anything else goes wrong.
//!
//! Every recursive entry point wraps its body in [`ensure_sufficient_stack`].
//! On native targets this checks the remaining stack and switches to a fresh
//! segment when fewer than [`RED_ZONE`] bytes are left. On `wasm32` it is a
//! plain call.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
