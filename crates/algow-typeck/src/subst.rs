//! Substitutions and the `Types` trait.
//!
//! A substitution is a finite map from type variables to types. Every
//! operation here is pure: applying or composing never mutates an existing
//! substitution, since callers further up the inference stack may still hold
//! on to it.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::ty::{Scheme, Ty, TyVar};

/// Anything that mentions type variables: types, schemes, environments.
pub trait Types {
    /// The type variables occurring free in `self`.
    fn free_vars(&self) -> FxHashSet<TyVar>;

    /// Apply `subst` to `self`, producing a new value.
    fn apply(&self, subst: &Substitution) -> Self;
}

/// A finite mapping from type variable to type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution(FxHashMap<TyVar, Ty>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(FxHashMap::default())
    }

    pub fn singleton(var: TyVar, ty: Ty) -> Self {
        let mut map = FxHashMap::default();
        map.insert(var, ty);
        Substitution(map)
    }

    pub fn get(&self, var: &TyVar) -> Option<&Ty> {
        self.0.get(var)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TyVar, &Ty)> {
        self.0.iter()
    }

    /// `self` after `other`: applying the result is the same as applying
    /// `other` first and then `self`.
    ///
    /// Every binding of `other` is rewritten through `self`; bindings of
    /// `self` for variables `other` does not mention are carried over.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut map: FxHashMap<TyVar, Ty> = other
            .0
            .iter()
            .map(|(var, ty)| (var.clone(), ty.apply(self)))
            .collect();
        for (var, ty) in &self.0 {
            map.entry(var.clone()).or_insert_with(|| ty.clone());
        }
        Substitution(map)
    }

    /// A copy of this substitution with the bindings for `vars` dropped.
    pub fn without(&self, vars: &[TyVar]) -> Substitution {
        Substitution(
            self.iter()
                .filter(|(var, _)| !vars.contains(var))
                .map(|(var, ty)| (var.clone(), ty.clone()))
                .collect(),
        )
    }
}

impl FromIterator<(TyVar, Ty)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (TyVar, Ty)>>(iter: I) -> Self {
        Substitution(iter.into_iter().collect())
    }
}

impl Types for Ty {
    fn free_vars(&self) -> FxHashSet<TyVar> {
        self.vars_in_order().into_iter().collect()
    }

    fn apply(&self, subst: &Substitution) -> Ty {
        match self {
            Ty::Var(v) => subst.get(v).cloned().unwrap_or_else(|| self.clone()),
            Ty::Int | Ty::Bool => self.clone(),
            Ty::Fun(arg, ret) => Ty::fun(arg.apply(subst), ret.apply(subst)),
            Ty::List(elem) => Ty::list(elem.apply(subst)),
        }
    }
}

impl Types for Scheme {
    fn free_vars(&self) -> FxHashSet<TyVar> {
        let mut free = self.ty.free_vars();
        for v in &self.vars {
            free.remove(v);
        }
        free
    }

    /// Bound variables are never rewritten: bindings for them are removed
    /// from `subst` before it reaches the body.
    fn apply(&self, subst: &Substitution) -> Scheme {
        let ty = if self.vars.iter().any(|v| subst.get(v).is_some()) {
            self.ty.apply(&subst.without(&self.vars))
        } else {
            self.ty.apply(subst)
        };
        Scheme {
            vars: self.vars.clone(),
            ty,
        }
    }
}
