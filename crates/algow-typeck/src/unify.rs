//! Unification: most general unifiers with occurs check.
//!
//! Both functions are pure. They never consult inference state and return a
//! fresh substitution or the first error found.

use tracing::trace;

use crate::error::{Result, TypeError};
use crate::subst::{Substitution, Types};
use crate::ty::{Ty, TyVar};

/// The most general unifier of `a` and `b`.
///
/// On success, applying the result to `a` and to `b` yields the same type.
/// Only a type variable can stand in for a different shape; `Int` never
/// unifies with a list or a function.
pub fn mgu(a: &Ty, b: &Ty) -> Result<Substitution> {
    match (a, b) {
        // Argument first, then the result under what the argument fixed.
        (Ty::Fun(arg1, ret1), Ty::Fun(arg2, ret2)) => {
            let s1 = mgu(arg1, arg2)?;
            let s2 = mgu(&ret1.apply(&s1), &ret2.apply(&s1))?;
            Ok(s2.compose(&s1))
        }
        (Ty::List(e1), Ty::List(e2)) => mgu(e1, e2),
        (Ty::Var(v), other) | (other, Ty::Var(v)) => var_bind(v, other),
        (Ty::Int, Ty::Int) | (Ty::Bool, Ty::Bool) => Ok(Substitution::empty()),
        _ => Err(TypeError::TypeMismatch(a.clone(), b.clone())),
    }
}

/// Bind `var` to `ty`, refusing to build an infinite type.
pub fn var_bind(var: &TyVar, ty: &Ty) -> Result<Substitution> {
    if let Ty::Var(other) = ty {
        if other == var {
            return Ok(Substitution::empty());
        }
    }
    if ty.contains_var(var) {
        return Err(TypeError::OccursCheck(var.clone(), ty.clone()));
    }
    trace!(%var, %ty, "bind");
    Ok(Substitution::singleton(var.clone(), ty.clone()))
}
