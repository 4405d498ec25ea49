use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope.
///
/// Holds the bindings made in one program, or in one call of a lambda, and
/// points to the frame it was created in. A call frame's parent is the frame
/// the lambda captured, not the caller's, which is what makes scoping
/// lexical.
///
/// # Example
/// ```
/// use monoglyph::interpreter::value::{core::Value, frame::Frame};
///
/// let root = Frame::root();
/// root.define('x', 1.into());
///
/// let inner = Frame::child(&root);
/// inner.define('x', 2.into());
///
/// assert_eq!(inner.lookup('x').unwrap().to_string(), "2");
/// assert_eq!(root.lookup('x').unwrap().to_string(), "1");
/// assert!(inner.lookup('y').is_none());
/// ```
#[derive(Default)]
pub struct Frame {
    bindings: RefCell<HashMap<char, Value>>,
    parent:   Option<Rc<Self>>,
}

impl Frame {
    /// Creates a frame without a parent.
    #[must_use]
    pub fn root() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates an empty frame whose parent is `parent`.
    #[must_use]
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { bindings: RefCell::default(),
                       parent:   Some(Rc::clone(parent)), })
    }

    /// The frame this one was created in.
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Binds `name` in this frame, replacing any binding it already has here.
    /// Outer frames are never touched.
    pub fn define(&self, name: char, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Finds the nearest binding of `name`, starting here and walking
    /// outwards.
    #[must_use]
    pub fn lookup(&self, name: char) -> Option<Value> {
        let mut frame = Some(self);

        while let Some(current) = frame {
            if let Some(value) = current.bindings.borrow().get(&name) {
                return Some(value.clone());
            }
            frame = current.parent.as_deref();
        }

        None
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Returns `false`, leaving every frame unchanged, when `name` is bound
    /// nowhere on the chain.
    ///
    /// # Example
    /// ```
    /// use monoglyph::interpreter::value::frame::Frame;
    ///
    /// let root = Frame::root();
    /// root.define('x', 1.into());
    /// let inner = Frame::child(&root);
    ///
    /// assert!(inner.assign('x', 5.into()));
    /// assert_eq!(root.lookup('x').unwrap().to_string(), "5");
    ///
    /// assert!(!inner.assign('y', 5.into()));
    /// assert!(root.lookup('y').is_none());
    /// ```
    pub fn assign(&self, name: char, value: Value) -> bool {
        let mut frame = Some(self);

        while let Some(current) = frame {
            if let Some(slot) = current.bindings.borrow_mut().get_mut(&name) {
                *slot = value;
                return true;
            }
            frame = current.parent.as_deref();
        }

        false
    }

    /// The names bound directly in this frame, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<char> {
        let mut names = self.bindings.borrow().keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
         .field("names", &self.names())
         .field("has_parent", &self.parent.is_some())
         .finish()
    }
}
