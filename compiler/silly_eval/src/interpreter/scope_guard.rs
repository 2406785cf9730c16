//! RAII-style scope guards for Interpreter environment management.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so a
//! block body runs through it like the interpreter itself. Dropping the guard
//! pops the frame, whether the body finished, broke out, or failed.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::FrameId;

/// RAII guard that ends the block's scope on drop.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.end_scope();
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Begin a scope that ends automatically when the guard is dropped.
    ///
    /// ```text
    /// let mut scoped = interpreter.scoped();
    /// scoped.execute(stmt)?;
    /// // Scope ended here, including on the `?` path
    /// ```
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.begin_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Like [`scoped`](Self::scoped), but the new frame's parent is `parent`.
    pub fn scoped_in(&mut self, parent: FrameId) -> ScopedInterpreter<'_, 'a> {
        self.env.begin_scope_with_parent(parent);
        ScopedInterpreter { interpreter: self }
    }
}
