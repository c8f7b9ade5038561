//! Type representation for the algow type system.
//!
//! Defines the core `Ty` enum, type variables (`TyVar`), and polymorphic type
//! schemes (`Scheme`). These form the foundation of Hindley-Milner type
//! inference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A type variable, identified by name.
///
/// Variables minted during inference are named `<prefix><n>` (`a0`, `a1`, ...)
/// by the owning `InferCtx`, skipping any name free in the initial
/// environment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TyVar(pub String);

impl TyVar {
    pub fn new(name: impl Into<String>) -> Self {
        TyVar(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TyVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An algow type.
///
/// - `Var`: an inference variable (to be resolved by unification)
/// - `Int`, `Bool`: the primitive types
/// - `Fun`: a function type `argument -> result`
/// - `List`: a homogeneous list `[element]`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ty {
    Var(TyVar),
    Int,
    Bool,
    Fun(Box<Ty>, Box<Ty>),
    List(Box<Ty>),
}

impl Ty {
    /// Create a type variable with the given name.
    pub fn var(name: impl Into<String>) -> Ty {
        Ty::Var(TyVar::new(name))
    }

    /// Create a function type.
    pub fn fun(arg: Ty, ret: Ty) -> Ty {
        Ty::Fun(Box::new(arg), Box::new(ret))
    }

    /// Create a list type.
    pub fn list(elem: Ty) -> Ty {
        Ty::List(Box::new(elem))
    }

    /// Whether `var` occurs anywhere in this type.
    pub fn contains_var(&self, var: &TyVar) -> bool {
        match self {
            Ty::Var(v) => v == var,
            Ty::Int | Ty::Bool => false,
            Ty::Fun(arg, ret) => arg.contains_var(var) || ret.contains_var(var),
            Ty::List(elem) => elem.contains_var(var),
        }
    }

    /// Type variables of this type in first-occurrence order, without
    /// duplicates.
    pub fn vars_in_order(&self) -> Vec<TyVar> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut Vec<TyVar>) {
        match self {
            Ty::Var(v) => {
                if !out.contains(v) {
                    out.push(v.clone());
                }
            }
            Ty::Int | Ty::Bool => {}
            Ty::Fun(arg, ret) => {
                arg.collect_vars(out);
                ret.collect_vars(out);
            }
            Ty::List(elem) => elem.collect_vars(out),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Var(v) => write!(f, "{}", v),
            Ty::Int => write!(f, "Int"),
            Ty::Bool => write!(f, "Bool"),
            Ty::Fun(arg, ret) => {
                if matches!(**arg, Ty::Fun(..)) {
                    write!(f, "({}) -> {}", arg, ret)
                } else {
                    write!(f, "{} -> {}", arg, ret)
                }
            }
            Ty::List(elem) => write!(f, "[{}]", elem),
        }
    }
}

/// A polymorphic type scheme: a type with universally quantified variables.
///
/// For example, the type of `identity` is `forall a. a -> a`, represented as
/// `Scheme { vars: [a], ty: Fun(Var(a), Var(a)) }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheme {
    /// The quantified (generic) type variables.
    pub vars: Vec<TyVar>,
    /// The underlying type (may reference vars).
    pub ty: Ty,
}

impl Scheme {
    /// Create a monomorphic scheme (no quantified variables).
    pub fn mono(ty: Ty) -> Self {
        Scheme {
            vars: Vec::new(),
            ty,
        }
    }

    pub fn poly(vars: Vec<TyVar>, ty: Ty) -> Self {
        Scheme { vars, ty }
    }

    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vars.is_empty() {
            return write!(f, "{}", self.ty);
        }
        write!(f, "forall")?;
        for v in &self.vars {
            write!(f, " {}", v)?;
        }
        write!(f, ". {}", self.ty)
    }
}
