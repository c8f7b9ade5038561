//! Type errors.
//!
//! Inference stops at the first error; there is no recovery and no error
//! list. Messages are single lines. Rendering them with source context is
//! up to the host.

use thiserror::Error;

use crate::ty::{Ty, TyVar};

/// A type error encountered during inference.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A variable is used but not bound in the environment.
    #[error("unbound variable `{0}`")]
    UnboundVariable(String),
    /// Unification found two structurally incompatible types.
    #[error("type mismatch: cannot unify `{0}` with `{1}`")]
    TypeMismatch(Ty, Ty),
    /// A type variable would have to contain itself.
    ///
    /// Example: unifying `a` with `a -> Int` would need the infinite type
    /// `((... -> Int) -> Int) -> Int`.
    #[error("occurs check failed: `{0}` occurs in `{1}`")]
    OccursCheck(TyVar, Ty),
}

pub type Result<T> = std::result::Result<T, TypeError>;
