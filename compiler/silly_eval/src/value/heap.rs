//! Interpreter-local string heap.

use std::rc::Rc;

use rustc_hash::FxHashMap;

/// Handle to a string in a [`StringHeap`].
///
/// Valid for the lifetime of the heap that issued it. Identical text always
/// gets the same handle, so handle equality is text equality.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StrId(u32);

impl StrId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only string storage. Handles stay valid for the whole run.
#[derive(Default)]
pub struct StringHeap {
    strings: Vec<Rc<str>>,
    index: FxHashMap<Rc<str>, StrId>,
}

impl StringHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text`, reusing the existing handle for text already present.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are stored.
    pub fn intern(&mut self, text: &str) -> StrId {
        if let Some(&id) = self.index.get(text) {
            return id;
        }
        let id = StrId(
            u32::try_from(self.strings.len())
                .unwrap_or_else(|_| panic!("string heap exceeded {} entries", u32::MAX)),
        );
        let stored: Rc<str> = Rc::from(text);
        self.strings.push(Rc::clone(&stored));
        self.index.insert(stored, id);
        id
    }

    /// Text for a handle issued by this heap.
    #[inline]
    pub fn get(&self, id: StrId) -> &str {
        &self.strings[id.index()]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
