//! Scope chain for variable bindings.
//!
//! Scopes live in an arena and point at their parent by [`ScopeId`]. Each
//! scope is a flat, append-only list of bindings searched front to back, so
//! defining a name twice in one scope leaves the first binding visible and
//! the second unreachable. Resolution walks from a scope out to the root;
//! the nearest scope containing the name wins.
//!
//! Scopes are released in LIFO order: popping a scope also releases every
//! scope created after it.

use std::fmt;

/// Handle to a live scope in an [`Environment`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct Binding {
    name: String,
    value: i64,
}

#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: Vec<Binding>,
    parent: Option<ScopeId>,
}

impl Scope {
    /// First binding named `name`, in definition order.
    fn find(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.bindings.iter_mut().find(|b| b.name == name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Number of live scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Create an empty scope whose parent is `parent` (`None` for a root).
    pub fn push(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(u32::try_from(self.scopes.len()).unwrap_or(u32::MAX));
        self.scopes.push(Scope {
            bindings: Vec::new(),
            parent,
        });
        id
    }

    /// Release `scope` and its bindings, returning its parent.
    ///
    /// Returns `None` for a root scope, or when `scope` is no longer live.
    pub fn pop(&mut self, scope: ScopeId) -> Option<ScopeId> {
        let parent = self.scopes.get(scope.index())?.parent;
        self.scopes.truncate(scope.index());
        parent
    }

    /// Append a binding to `scope` only. Ancestors are not searched and an
    /// existing same-named binding in `scope` is left in place.
    pub fn define(&mut self, scope: ScopeId, name: &str, value: i64) {
        if let Some(target) = self.scopes.get_mut(scope.index()) {
            target.bindings.push(Binding {
                name: name.to_owned(),
                value,
            });
        }
    }

    /// Overwrite the nearest binding of `name`. Returns `false` if no scope
    /// in the chain has one.
    pub fn set(&mut self, scope: ScopeId, name: &str, value: i64) -> bool {
        let mut cursor = Some(scope);
        while let Some(id) = cursor {
            let Some(current) = self.scopes.get_mut(id.index()) else {
                return false;
            };
            if let Some(binding) = current.find_mut(name) {
                binding.value = value;
                return true;
            }
            cursor = current.parent;
        }
        false
    }

    /// Value of the nearest binding of `name`.
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<i64> {
        self.chain(scope).find_map(|s| s.find(name)).map(|b| b.value)
    }

    /// Pop from `scope` until no scope remains.
    pub fn free_all(&mut self, scope: ScopeId) {
        let mut cursor = Some(scope);
        while let Some(id) = cursor {
            cursor = self.pop(id);
        }
    }

    /// Scopes from `scope` out to the root.
    fn chain(&self, scope: ScopeId) -> impl Iterator<Item = &Scope> + '_ {
        let mut cursor = Some(scope);
        std::iter::from_fn(move || {
            let current = self.scopes.get(cursor?.index())?;
            cursor = current.parent;
            Some(current)
        })
    }
}
