//! Algorithm W inference engine for algow.
//!
//! Walks the expression tree bottom-up, threading a substitution through
//! every step. Each rule returns the substitution it discovered together
//! with the type of the subexpression, already rewritten by that
//! substitution. Implements Hindley-Milner type inference with:
//! - Let-polymorphism (generalize at `let`, instantiate at each use)
//! - Occurs check (rejects infinite types)
//! - Persistent environments, so no scope ever needs restoring
//! - First-error propagation with `?`

use algow_ast::Expr;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::config::InferOptions;
use crate::env::TypeEnv;
use crate::error::{Result, TypeError};
use crate::subst::{Substitution, Types};
use crate::ty::{Scheme, Ty, TyVar};
use crate::unify::mgu;

/// Inference state for a single top-level run.
///
/// Owns the fresh variable supply. Every name minted by one `InferCtx` is
/// distinct and never equal to a reserved name; two contexts are
/// independent and may mint the same names.
pub struct InferCtx {
    /// Next counter value to try.
    supply: u32,
    /// Fresh variables are named `<prefix><supply>`.
    prefix: String,
    /// Names already in use by the caller, typically the free variables of
    /// the initial environment. Minting skips them.
    reserved: FxHashSet<TyVar>,
}

impl InferCtx {
    /// Create a context with the default options.
    pub fn new() -> Self {
        Self::with_options(&InferOptions::default())
    }

    pub fn with_options(options: &InferOptions) -> Self {
        InferCtx {
            supply: 0,
            prefix: options.var_prefix.clone(),
            reserved: FxHashSet::default(),
        }
    }

    /// Create a context for inferring under `env`: every variable free in
    /// `env` is reserved so no fresh variable can alias it.
    pub fn for_env(env: &TypeEnv, options: &InferOptions) -> Self {
        let mut ctx = Self::with_options(options);
        ctx.reserve(env.free_vars());
        ctx
    }

    /// Keep `vars` out of the fresh name supply.
    pub fn reserve(&mut self, vars: impl IntoIterator<Item = TyVar>) {
        self.reserved.extend(vars);
    }

    // ── Type Variable Creation ──────────────────────────────────────────

    /// Mint a fresh type variable.
    pub fn fresh_var(&mut self) -> Ty {
        let prefix = self.prefix.clone();
        self.fresh_var_with_prefix(&prefix)
    }

    /// Mint a fresh type variable named `<prefix><n>`. The counter is shared
    /// with `fresh_var`, so names stay unique across prefixes; counter values
    /// whose name is reserved are skipped.
    pub fn fresh_var_with_prefix(&mut self, prefix: &str) -> Ty {
        loop {
            let var = TyVar(format!("{}{}", prefix, self.supply));
            self.supply += 1;
            if !self.reserved.contains(&var) {
                return Ty::Var(var);
            }
        }
    }

    /// How far the fresh name counter has advanced, reserved names included.
    pub fn vars_minted(&self) -> u32 {
        self.supply
    }

    // ── Instantiation ───────────────────────────────────────────────────

    /// Instantiate a polymorphic scheme with fresh type variables.
    ///
    /// Each quantified variable is replaced by a newly minted one, so no two
    /// instantiations share a variable.
    pub fn instantiate(&mut self, scheme: &Scheme) -> Ty {
        if scheme.is_mono() {
            return scheme.ty.clone();
        }
        let renaming: Substitution = scheme
            .vars
            .iter()
            .map(|v| (v.clone(), self.fresh_var()))
            .collect();
        scheme.ty.apply(&renaming)
    }

    // ── Traversal ───────────────────────────────────────────────────────

    /// Infer the type of `expr` under `env`.
    ///
    /// Returns the substitution discovered along the way and the type of
    /// `expr` with that substitution applied.
    pub fn infer_expr(&mut self, env: &TypeEnv, expr: &Expr) -> Result<(Substitution, Ty)> {
        match expr {
            Expr::Variable(name) => self.infer_var(env, name),
            Expr::IntLiteral(_) => Ok((Substitution::empty(), Ty::Int)),
            Expr::BoolLiteral(_) => Ok((Substitution::empty(), Ty::Bool)),
            Expr::Apply(func, arg) => self.infer_apply(env, func, arg),
            Expr::Abstraction(param, body) => self.infer_abstraction(env, param, body),
            Expr::Let(name, bound, body) => self.infer_let(env, name, bound, body),
            Expr::If(cond, then_branch, else_branch) => {
                self.infer_if(env, cond, then_branch, else_branch)
            }
            Expr::Cons(head, tail) => self.infer_cons(env, head, tail),
            Expr::Nil => Ok((Substitution::empty(), Ty::list(self.fresh_var()))),
        }
    }

    fn infer_var(&mut self, env: &TypeEnv, name: &str) -> Result<(Substitution, Ty)> {
        let scheme = env
            .lookup(name)
            .ok_or_else(|| TypeError::UnboundVariable(name.to_string()))?;
        Ok((Substitution::empty(), self.instantiate(scheme)))
    }

    /// `func arg`: the function's type must unify with `arg_ty -> ret`.
    fn infer_apply(
        &mut self,
        env: &TypeEnv,
        func: &Expr,
        arg: &Expr,
    ) -> Result<(Substitution, Ty)> {
        let ret = self.fresh_var();
        let (s1, func_ty) = self.infer_expr(env, func)?;
        let (s2, arg_ty) = self.infer_expr(&env.apply(&s1), arg)?;
        let s3 = mgu(&func_ty.apply(&s2), &Ty::fun(arg_ty, ret.clone()))?;
        Ok((s3.compose(&s2.compose(&s1)), ret.apply(&s3)))
    }

    /// `\param -> body`: the parameter is monomorphic inside the body.
    fn infer_abstraction(
        &mut self,
        env: &TypeEnv,
        param: &str,
        body: &Expr,
    ) -> Result<(Substitution, Ty)> {
        let param_ty = self.fresh_var();
        let body_env = env.extend(param, Scheme::mono(param_ty.clone()));
        let (s1, body_ty) = self.infer_expr(&body_env, body)?;
        let fun = Ty::fun(param_ty.apply(&s1), body_ty);
        Ok((s1, fun))
    }

    /// `let name = bound in body`.
    ///
    /// The bound type is generalized before the body is inferred, so each
    /// use of `name` in the body instantiates it independently.
    fn infer_let(
        &mut self,
        env: &TypeEnv,
        name: &str,
        bound: &Expr,
        body: &Expr,
    ) -> Result<(Substitution, Ty)> {
        let (s1, bound_ty) = self.infer_expr(env, bound)?;
        let env1 = env.apply(&s1);
        let scheme = env1.generalize(&bound_ty);
        trace!(name, %scheme, "generalize");
        let (s2, body_ty) = self.infer_expr(&env1.extend(name, scheme), body)?;
        Ok((s2.compose(&s1), body_ty))
    }

    /// `if cond then a else b`: `cond` is `Bool`, both branches agree.
    fn infer_if(
        &mut self,
        env: &TypeEnv,
        cond: &Expr,
        then_branch: &Expr,
        else_branch: &Expr,
    ) -> Result<(Substitution, Ty)> {
        let (s1, cond_ty) = self.infer_expr(env, cond)?;
        let s2 = mgu(&cond_ty.apply(&s1), &Ty::Bool)?;
        let s_cond = s2.compose(&s1);

        let then_env = env.apply(&s_cond);
        let (s3, then_ty) = self.infer_expr(&then_env, then_branch)?;

        let else_env = then_env.apply(&s3);
        let (s4, else_ty) = self.infer_expr(&else_env, else_branch)?;

        let s5 = mgu(&then_ty.apply(&s4), &else_ty)?;
        let subst = s5.compose(&s4.compose(&s3.compose(&s_cond)));
        Ok((subst, else_ty.apply(&s5)))
    }

    /// `head :: tail`: `tail` must be a list of `head`'s type.
    fn infer_cons(
        &mut self,
        env: &TypeEnv,
        head: &Expr,
        tail: &Expr,
    ) -> Result<(Substitution, Ty)> {
        let (s1, head_ty) = self.infer_expr(env, head)?;
        let (s2, tail_ty) = self.infer_expr(&env.apply(&s1), tail)?;
        let elem_ty = head_ty.apply(&s2);
        let s3 = mgu(&tail_ty, &Ty::list(elem_ty.clone()))?;
        Ok((s3.compose(&s2.compose(&s1)), Ty::list(elem_ty.apply(&s3))))
    }
}

impl Default for InferCtx {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer the principal type of `expr` under `env`, minting fresh variables
/// according to `options`.
///
/// A new `InferCtx` is created for every call, so independent calls never
/// share a variable supply. Fresh names never collide with variables free in
/// `env`.
pub fn infer_with(env: &TypeEnv, expr: &Expr, options: &InferOptions) -> Result<Ty> {
    let mut ctx = InferCtx::for_env(env, options);
    match ctx.infer_expr(env, expr) {
        Ok((subst, ty)) => {
            let ty = ty.apply(&subst);
            debug!(%ty, vars = ctx.vars_minted(), "inferred");
            Ok(ty)
        }
        Err(err) => {
            debug!(%err, vars = ctx.vars_minted(), "inference failed");
            Err(err)
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
