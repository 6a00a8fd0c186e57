//! RAII scope guard for block evaluation.
//!
//! [`Interpreter::scoped`] pushes a child of the current scope and makes it
//! current; dropping the returned [`ScopedInterpreter`] pops it and restores
//! the parent. Release happens on every exit path, including a `return`
//! unwinding out of nested blocks and a panic.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Interpreter borrowed for the lifetime of one block scope.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        let interp = &mut *self.interpreter;
        let child = interp.current;
        if let Some(parent) = interp.env.pop(child) {
            interp.current = parent;
        }
        tracing::debug!(scope = ?child, depth = interp.env.depth(), "pop scope");
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a child scope of the current one until the guard is dropped.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        let child = self.env.push(Some(self.current));
        self.current = child;
        tracing::debug!(scope = ?child, depth = self.env.depth(), "push scope");
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a fresh child scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}

#[cfg(test)]
mod tests;
