//! # Block Scopes
//!
//! Persistent lexical scopes for variable declarations, built on `im::HashMap`
//! so that entering a block, declaring, and assigning all return new scopes
//! with structural sharing instead of mutating in place.
//!
//! Rules:
//!
//! - A name may be declared once per block. Declaring it again in the same
//!   block is [`ScopeError::AlreadyDeclared`].
//! - An inner block may shadow an outer declaration.
//! - Assignment updates the nearest enclosing declaration; assigning an
//!   undeclared name is [`ScopeError::Undeclared`].
//! - Leaving a block discards its declarations.
//!
//! ## Example
//!
//! ```
//! use value_lessons_common::Scope;
//!
//! let outer = Scope::new().declare("num", 10)?;
//! let block = outer.child().declare("num", -1)?;
//!
//! assert_eq!(block.lookup("num"), Some(&-1));
//! assert_eq!(outer.lookup("num"), Some(&10));
//!
//! let outer = block.leave().expect("block has a parent");
//! assert_eq!(outer.lookup("num"), Some(&10));
//! # Ok::<(), value_lessons_common::ScopeError>(())
//! ```

use im::HashMap as ImHashMap;

/// Declaration and assignment failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error("{0} redeclared in this block")]
    AlreadyDeclared(String),

    #[error("undefined: {0}")]
    Undeclared(String),
}

/// A persistent chain of blocks, innermost first.
#[derive(Debug, Clone)]
pub struct Scope<V> {
    /// Declarations made in this block
    bindings: ImHashMap<String, V>,
    /// Enclosing block, if any
    parent: Option<Box<Scope<V>>>,
}

impl<V> Default for Scope<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Scope<V> {
    /// Creates an outermost block with no declarations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: ImHashMap::new(),
            parent: None,
        }
    }

    /// Number of declarations in this block only.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of blocks from here to the outermost one, inclusive.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.parent.as_ref().map_or(0, |p| p.depth())
    }

    /// Leaves this block, returning the enclosing one.
    #[must_use]
    pub fn leave(self) -> Option<Scope<V>> {
        self.parent.map(|p| *p)
    }
}

impl<V: Clone> Scope<V> {
    /// Enters a nested block.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            bindings: ImHashMap::new(),
            parent: Some(Box::new(self.clone())),
        }
    }

    #[must_use]
    pub fn is_declared_locally(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Finds the innermost declaration of `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.bindings
            .get(name)
            .or_else(|| self.parent.as_ref().and_then(|p| p.lookup(name)))
    }

    /// Declares `name` in this block.
    ///
    /// # Example
    ///
    /// ```
    /// use value_lessons_common::{Scope, ScopeError};
    ///
    /// let scope = Scope::new().declare("credits", 3.5).unwrap();
    /// assert_eq!(
    ///     scope.declare("credits", 4.0).unwrap_err(),
    ///     ScopeError::AlreadyDeclared("credits".into())
    /// );
    /// ```
    pub fn declare(&self, name: impl Into<String>, value: V) -> Result<Self, ScopeError> {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            return Err(ScopeError::AlreadyDeclared(name));
        }
        if self.lookup(&name).is_some() {
            tracing::trace!(name = %name, depth = self.depth(), "declaration shadows outer binding");
        }
        Ok(Self {
            bindings: self.bindings.update(name, value),
            parent: self.parent.clone(),
        })
    }

    /// Declares `name` holding its type's zero value.
    pub fn declare_zero(&self, name: impl Into<String>) -> Result<Self, ScopeError>
    where
        V: Default,
    {
        self.declare(name, V::default())
    }

    /// Assigns to the nearest declaration of `name`, returning the updated
    /// chain. Enclosing blocks are rebuilt only along the path to it.
    pub fn assign(&self, name: &str, value: V) -> Result<Self, ScopeError> {
        if self.bindings.contains_key(name) {
            return Ok(Self {
                bindings: self.bindings.update(name.to_string(), value),
                parent: self.parent.clone(),
            });
        }
        match &self.parent {
            Some(parent) => Ok(Self {
                bindings: self.bindings.clone(),
                parent: Some(Box::new(parent.assign(name, value)?)),
            }),
            None => Err(ScopeError::Undeclared(name.to_string())),
        }
    }

    /// Every visible binding, innermost declarations winning.
    #[must_use]
    pub fn visible(&self) -> ImHashMap<String, V> {
        let mut result = self
            .parent
            .as_ref()
            .map(|p| p.visible())
            .unwrap_or_default();
        for (k, v) in &self.bindings {
            result = result.update(k.clone(), v.clone());
        }
        result
    }
}
