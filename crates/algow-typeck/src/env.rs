//! Persistent type environment.
//!
//! The environment maps identifiers to type schemes. It is backed by a
//! persistent ordered map, so entering a scope (lambda body, let body, a
//! branch of an `if`) derives a new value that shares structure with its
//! parent. Nothing done to a derived environment is visible in the parent or
//! in sibling scopes, and there is no scope to pop afterwards.

use im::OrdMap;
use rustc_hash::FxHashSet;

use crate::subst::{Substitution, Types};
use crate::ty::{Scheme, Ty, TyVar};

/// A type environment: identifier to type scheme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeEnv {
    bindings: OrdMap<String, Scheme>,
}

impl TypeEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        TypeEnv {
            bindings: OrdMap::new(),
        }
    }

    /// Look up a name. Returns `None` if it is not bound.
    pub fn lookup(&self, name: &str) -> Option<&Scheme> {
        self.bindings.get(name)
    }

    /// A new environment with `name` bound to `scheme`, shadowing any
    /// previous binding for `name`. `self` is left untouched.
    pub fn extend(&self, name: impl Into<String>, scheme: Scheme) -> TypeEnv {
        TypeEnv {
            bindings: self.bindings.update(name.into(), scheme),
        }
    }

    /// A new environment without a binding for `name`.
    pub fn remove(&self, name: &str) -> TypeEnv {
        TypeEnv {
            bindings: self.bindings.without(name),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scheme)> {
        self.bindings.iter()
    }

    /// Close `ty` over every variable that is free in `ty` but not free in
    /// this environment.
    ///
    /// Variables still free in the environment are constrained elsewhere and
    /// must stay monomorphic. Quantified variables are listed in the order
    /// they first occur in `ty`.
    pub fn generalize(&self, ty: &Ty) -> Scheme {
        let env_vars = self.free_vars();
        let vars: Vec<TyVar> = ty
            .vars_in_order()
            .into_iter()
            .filter(|v| !env_vars.contains(v))
            .collect();
        Scheme::poly(vars, ty.clone())
    }
}

impl Types for TypeEnv {
    fn free_vars(&self) -> FxHashSet<TyVar> {
        let mut free = FxHashSet::default();
        for scheme in self.bindings.values() {
            free.extend(scheme.free_vars());
        }
        free
    }

    fn apply(&self, subst: &Substitution) -> TypeEnv {
        if subst.is_empty() {
            return self.clone();
        }
        TypeEnv {
            bindings: self
                .iter()
                .map(|(name, scheme)| (name.clone(), scheme.apply(subst)))
                .collect(),
        }
    }
}

impl FromIterator<(String, Scheme)> for TypeEnv {
    fn from_iter<I: IntoIterator<Item = (String, Scheme)>>(iter: I) -> Self {
        TypeEnv {
            bindings: iter.into_iter().collect(),
        }
    }
}
