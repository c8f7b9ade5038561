//! Expression tree for the algow language.
//!
//! The tree is built by an external front end (a parser, a REPL, or a test)
//! and handed to `algow-typeck` as-is. It is deliberately small: variables,
//! integer and boolean literals, application, single-parameter abstraction,
//! `let`, `if`, and list construction via `Cons` / `Nil`.
//!
//! `Expr` derives serde's `Serialize` and `Deserialize`, so a front end living
//! in another process can ship a tree over any serde format.

use serde::{Deserialize, Serialize};

/// An algow expression.
///
/// The variant set is closed; every consumer matches on it exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// A reference to a bound identifier: `x`.
    Variable(String),
    /// An integer literal: `42`.
    IntLiteral(i64),
    /// A boolean literal: `true`.
    BoolLiteral(bool),
    /// Function application: `f x`.
    Apply(Box<Expr>, Box<Expr>),
    /// Lambda abstraction over one parameter: `\x -> body`.
    Abstraction(String, Box<Expr>),
    /// `let name = bound in body`. The bound expression is not recursive.
    Let(String, Box<Expr>, Box<Expr>),
    /// `if cond then a else b`.
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    /// List construction: `head :: tail`.
    Cons(Box<Expr>, Box<Expr>),
    /// The empty list.
    Nil,
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }

    pub fn int(value: i64) -> Expr {
        Expr::IntLiteral(value)
    }

    pub fn bool(value: bool) -> Expr {
        Expr::BoolLiteral(value)
    }

    pub fn apply(func: Expr, arg: Expr) -> Expr {
        Expr::Apply(Box::new(func), Box::new(arg))
    }

    pub fn abs(param: impl Into<String>, body: Expr) -> Expr {
        Expr::Abstraction(param.into(), Box::new(body))
    }

    pub fn let_in(name: impl Into<String>, bound: Expr, body: Expr) -> Expr {
        Expr::Let(name.into(), Box::new(bound), Box::new(body))
    }

    pub fn if_then_else(cond: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        Expr::If(Box::new(cond), Box::new(then_branch), Box::new(else_branch))
    }

    pub fn cons(head: Expr, tail: Expr) -> Expr {
        Expr::Cons(Box::new(head), Box::new(tail))
    }

    /// Build a list literal `[e1, e2, ...]` as right-nested `Cons` cells
    /// terminated by `Nil`.
    pub fn list(elems: impl IntoIterator<Item = Expr>) -> Expr {
        let elems: Vec<Expr> = elems.into_iter().collect();
        elems
            .into_iter()
            .rev()
            .fold(Expr::Nil, |tail, head| Expr::cons(head, tail))
    }

    /// Apply `func` to each argument in turn: `f a b c`.
    pub fn apply_many(func: Expr, args: impl IntoIterator<Item = Expr>) -> Expr {
        args.into_iter().fold(func, Expr::apply)
    }
}
