//! algow type checker: Hindley-Milner type inference (Algorithm W).
//!
//! Given an already-built [`algow_ast::Expr`] and an initial [`TypeEnv`], this
//! crate either produces the principal type of the expression or reports the
//! first reason no such type exists. It supports:
//!
//! - Let-polymorphism (generalize + instantiate)
//! - Unification with occurs check
//! - `Int`, `Bool`, function and list types
//!
//! # Architecture
//!
//! - [`ty`]: Core type representation (Ty, TyVar, Scheme)
//! - [`subst`]: Substitutions and the `Types` trait
//! - [`env`]: Persistent type environment
//! - [`unify`]: Most general unifiers with occurs check
//! - [`infer`]: Algorithm W traversal and the per-run inference state
//! - [`error`]: Type error types
//! - [`config`]: Inference options

pub mod config;
pub mod env;
pub mod error;
pub mod infer;
pub mod subst;
pub mod ty;
pub mod unify;


use algow_ast::Expr;

pub use crate::config::{ConfigError, InferOptions};
pub use crate::env::TypeEnv;
pub use crate::error::{Result, TypeError};
pub use crate::infer::{infer_with, InferCtx};
pub use crate::subst::{Substitution, Types};
pub use crate::ty::{Scheme, Ty, TyVar};

/// Infer the principal type of `expr` under `env`.
///
/// This is the main entry point for the type checker. Fresh variables are
/// named `a0`, `a1`, ... in the order they are minted, skipping any name
/// already free in `env`.
pub fn infer(env: &TypeEnv, expr: &Expr) -> Result<Ty> {
    infer_with(env, expr, &InferOptions::default())
}

/// Infer the type of `expr` and close it over every variable not free in
/// `env`, as a `let` at the top of `env` would.
pub fn infer_scheme(env: &TypeEnv, expr: &Expr) -> Result<Scheme> {
    let mut ctx = InferCtx::for_env(env, &InferOptions::default());
    let (subst, ty) = ctx.infer_expr(env, expr)?;
    Ok(env.apply(&subst).generalize(&ty.apply(&subst)))
}
