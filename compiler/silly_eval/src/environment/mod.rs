//! Scope frames and the runtime stack.
//!
//! Frames live in an arena addressed by [`FrameId`]. Each frame records its
//! lexically enclosing frame, fixed at creation; lookups walk that parent
//! chain.
//! The runtime stack lists the live frames, innermost last. The global frame
//! is created with the environment and is never popped.

use rustc_hash::FxHashMap;
use silly_ir::Name;
use tracing::trace;

use crate::Value;

/// Index of a frame in the environment's arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FrameId(u32);

impl FrameId {
    pub const GLOBAL: FrameId = FrameId(0);

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Variable bindings for one block execution.
///
/// `None` marks a variable that is declared but not yet assigned.
struct Frame {
    bindings: FxHashMap<Name, Option<Value>>,
    parent: Option<FrameId>,
}

impl Frame {
    fn new(parent: Option<FrameId>) -> Self {
        Frame {
            bindings: FxHashMap::default(),
            parent,
        }
    }
}

/// Why a scope operation failed. Carries the name; the interpreter turns it
/// into an `EvalError` with the variable's text.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScopeError {
    Undeclared(Name),
    AlreadyDeclared(Name),
    Unassigned(Name),
}

pub struct Environment {
    frames: Vec<Frame>,
    stack: Vec<FrameId>,
}

impl Environment {
    /// Create an environment holding only the global frame.
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::new(None)],
            stack: vec![FrameId::GLOBAL],
        }
    }

    /// Number of live frames, counting the global frame.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The innermost live frame.
    #[inline]
    pub fn current(&self) -> FrameId {
        self.stack.last().copied().unwrap_or(FrameId::GLOBAL)
    }

    /// Push a frame whose parent is the current top.
    pub fn begin_scope(&mut self) {
        self.begin_scope_with_parent(self.current());
    }

    /// Push a frame linked to `parent` rather than the current top.
    ///
    /// Frames between `parent` and the new frame stay live but are not
    /// visible from it. `parent` must be live.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` frames are live at once.
    pub fn begin_scope_with_parent(&mut self, parent: FrameId) {
        debug_assert!(self.stack.contains(&parent), "parent frame is not live");
        let id = FrameId(
            u32::try_from(self.frames.len())
                .unwrap_or_else(|_| panic!("scope depth exceeded {}", u32::MAX)),
        );
        self.frames.push(Frame::new(Some(parent)));
        self.stack.push(id);
        trace!(depth = self.stack.len(), "begin scope");
    }

    /// Pop the current frame. The global frame stays.
    pub fn end_scope(&mut self) {
        if self.stack.len() > 1 {
            if let Some(id) = self.stack.pop() {
                self.frames.truncate(id.index());
            }
        }
        trace!(depth = self.stack.len(), "end scope");
    }

    /// Declare `name` in the current frame with no value.
    pub fn declare_variable(&mut self, name: Name) -> Result<(), ScopeError> {
        let frame = self.frame_mut(self.current());
        if frame.bindings.contains_key(&name) {
            return Err(ScopeError::AlreadyDeclared(name));
        }
        frame.bindings.insert(name, None);
        Ok(())
    }

    /// True if `name` is declared in the current frame or any ancestor.
    pub fn is_declared(&self, name: Name) -> bool {
        self.find_frame(name).is_some()
    }

    /// True if `name` is declared in the current frame itself.
    pub fn is_local(&self, name: Name) -> bool {
        self.frame(self.current()).bindings.contains_key(&name)
    }

    /// Assign `value` to `name` in the nearest frame that declares it.
    pub fn store_value(&mut self, name: Name, value: Value) -> Result<(), ScopeError> {
        let id = self.find_frame(name).ok_or(ScopeError::Undeclared(name))?;
        self.frame_mut(id).bindings.insert(name, Some(value));
        Ok(())
    }

    /// Value bound to `name` in the nearest frame that declares it.
    pub fn lookup_value(&self, name: Name) -> Result<Value, ScopeError> {
        let id = self.find_frame(name).ok_or(ScopeError::Undeclared(name))?;
        match self.frame(id).bindings.get(&name) {
            Some(Some(value)) => Ok(value.clone()),
            _ => Err(ScopeError::Unassigned(name)),
        }
    }

    /// Walk the parent chain from the current frame to the one declaring `name`.
    fn find_frame(&self, name: Name) -> Option<FrameId> {
        let mut next = Some(self.current());
        while let Some(id) = next {
            let frame = self.frame(id);
            if frame.bindings.contains_key(&name) {
                return Some(id);
            }
            next = frame.parent;
        }
        None
    }

    #[inline]
    fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.index()]
    }

    #[inline]
    fn frame_mut(&mut self, id: FrameId) -> &mut Frame {
        &mut self.frames[id.index()]
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
