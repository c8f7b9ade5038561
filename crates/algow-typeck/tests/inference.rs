//! Integration tests for the algow type inference engine.
//!
//! These tests build expression trees, run `algow_typeck::infer()`, and assert
//! on the rendered principal types and errors. They exercise the core
//! behaviors of Algorithm W: literals, let-bindings, let-polymorphism, occurs
//! check, if-branches, function application, lists, and host environments.

use algow_ast::Expr;
use algow_typeck::{
    infer, infer_scheme, infer_with, InferOptions, Scheme, Ty, TyVar, TypeEnv, TypeError,
};

// ── Helpers ────────────────────────────────────────────────────────────

/// Infer under the empty environment and render the type or the error.
fn render(expr: &Expr) -> String {
    render_in(&TypeEnv::new(), expr)
}

fn render_in(env: &TypeEnv, expr: &Expr) -> String {
    match infer(env, expr) {
        Ok(ty) => ty.to_string(),
        Err(err) => format!("error: {}", err),
    }
}

/// A small host prelude: arithmetic, comparison and list primitives.
fn prelude() -> TypeEnv {
    let e = || Ty::var("e");
    let f = || Ty::var("f");
    TypeEnv::new()
        .extend("plus", Scheme::mono(Ty::fun(Ty::Int, Ty::fun(Ty::Int, Ty::Int))))
        .extend("iszero", Scheme::mono(Ty::fun(Ty::Int, Ty::Bool)))
        .extend(
            "head",
            Scheme::poly(vec![TyVar::new("e")], Ty::fun(Ty::list(e()), e())),
        )
        .extend(
            "map",
            Scheme::poly(
                vec![TyVar::new("e"), TyVar::new("f")],
                Ty::fun(Ty::fun(e(), f()), Ty::fun(Ty::list(e()), Ty::list(f()))),
            ),
        )
}

fn id() -> Expr {
    Expr::abs("x", Expr::var("x"))
}

// ── Literal Inference ──────────────────────────────────────────────────

#[test]
fn test_integer_literal_is_int() {
    assert_eq!(infer(&TypeEnv::new(), &Expr::int(12)), Ok(Ty::Int));
}

#[test]
fn test_bool_literal_is_bool() {
    assert_eq!(infer(&TypeEnv::new(), &Expr::bool(false)), Ok(Ty::Bool));
}

// ── Let Binding Inference ──────────────────────────────────────────────

#[test]
fn test_let_int() {
    let expr = Expr::let_in("n", Expr::int(12), Expr::var("n"));
    assert_eq!(infer(&TypeEnv::new(), &expr), Ok(Ty::Int));
}

#[test]
fn test_let_function() {
    let expr = Expr::let_in("id", id(), Expr::var("id"));
    insta::assert_snapshot!(render(&expr), @"a1 -> a1");
}

#[test]
fn test_let_shadowing() {
    let expr = Expr::let_in(
        "x",
        Expr::bool(true),
        Expr::let_in("x", Expr::int(1), Expr::var("x")),
    );
    insta::assert_snapshot!(render(&expr), @"Int");
}

// ── Let-polymorphism ───────────────────────────────────────────────────

#[test]
fn test_let_polymorphism_self_application() {
    let expr = Expr::let_in("id", id(), Expr::apply(Expr::var("id"), Expr::var("id")));
    insta::assert_snapshot!(render(&expr), @"a3 -> a3");
}

#[test]
fn test_let_polymorphism_two_types() {
    // let id = \x -> x in if id true then id 1 else 2
    let expr = Expr::let_in(
        "id",
        id(),
        Expr::if_then_else(
            Expr::apply(Expr::var("id"), Expr::bool(true)),
            Expr::apply(Expr::var("id"), Expr::int(1)),
            Expr::int(2),
        ),
    );
    insta::assert_snapshot!(render(&expr), @"Int");
}

#[test]
fn test_const_function() {
    // let k = \x -> \y -> x in k 1 true
    let k = Expr::abs("x", Expr::abs("y", Expr::var("x")));
    let expr = Expr::let_in(
        "k",
        k,
        Expr::apply_many(Expr::var("k"), [Expr::int(1), Expr::bool(true)]),
    );
    insta::assert_snapshot!(render(&expr), @"Int");
}

#[test]
fn test_lambda_bound_is_monomorphic() {
    // \f -> if f true then f 1 else 0
    let expr = Expr::abs(
        "f",
        Expr::if_then_else(
            Expr::apply(Expr::var("f"), Expr::bool(true)),
            Expr::apply(Expr::var("f"), Expr::int(1)),
            Expr::int(0),
        ),
    );
    insta::assert_snapshot!(render(&expr), @"error: type mismatch: cannot unify `Bool` with `Int`");
}

#[test]
fn test_let_does_not_generalize_env_vars() {
    // \x -> let y = x in if y then 1 else 2
    let expr = Expr::abs(
        "x",
        Expr::let_in(
            "y",
            Expr::var("x"),
            Expr::if_then_else(Expr::var("y"), Expr::int(1), Expr::int(2)),
        ),
    );
    insta::assert_snapshot!(render(&expr), @"Bool -> Int");
}

// ── Function Inference ─────────────────────────────────────────────────

#[test]
fn test_identity() {
    insta::assert_snapshot!(render(&id()), @"a0 -> a0");
}

#[test]
fn test_apply_combinator() {
    // \f -> \x -> f x
    let expr = Expr::abs("f", Expr::abs("x", Expr::apply(Expr::var("f"), Expr::var("x"))));
    insta::assert_snapshot!(render(&expr), @"(a1 -> a2) -> a1 -> a2");
}

#[test]
fn test_apply_non_function() {
    let expr = Expr::apply(Expr::int(1), Expr::int(2));
    assert_eq!(
        infer(&TypeEnv::new(), &expr),
        Err(TypeError::TypeMismatch(Ty::Int, Ty::fun(Ty::Int, Ty::var("a0"))))
    );
}

// ── If Expressions ─────────────────────────────────────────────────────

#[test]
fn test_conditional_branch() {
    let expr = Expr::if_then_else(Expr::bool(true), Expr::int(1), Expr::int(2));
    assert_eq!(infer(&TypeEnv::new(), &expr), Ok(Ty::Int));
}

#[test]
fn test_conditional_int_condition() {
    let expr = Expr::if_then_else(Expr::int(1), Expr::int(1), Expr::int(2));
    assert_eq!(
        infer(&TypeEnv::new(), &expr),
        Err(TypeError::TypeMismatch(Ty::Int, Ty::Bool))
    );
}

#[test]
fn test_conditional_branch_mismatch() {
    let expr = Expr::if_then_else(Expr::bool(true), Expr::int(1), Expr::bool(false));
    insta::assert_snapshot!(render(&expr), @"error: type mismatch: cannot unify `Int` with `Bool`");
}

// ── Errors ─────────────────────────────────────────────────────────────

#[test]
fn test_unbound_variable() {
    assert_eq!(
        infer(&TypeEnv::new(), &Expr::var("undefined")),
        Err(TypeError::UnboundVariable("undefined".into()))
    );
}

#[test]
fn test_occurs_check() {
    // \x -> x x
    let expr = Expr::abs("x", Expr::apply(Expr::var("x"), Expr::var("x")));
    assert_eq!(
        infer(&TypeEnv::new(), &expr),
        Err(TypeError::OccursCheck(
            TyVar::new("a0"),
            Ty::fun(Ty::var("a0"), Ty::var("a1"))
        ))
    );
}

#[test]
fn test_first_error_wins() {
    // (unknown 1) :: true  -- the unbound name is reached before the mismatch
    let expr = Expr::cons(
        Expr::apply(Expr::var("unknown"), Expr::int(1)),
        Expr::bool(true),
    );
    insta::assert_snapshot!(render(&expr), @"error: unbound variable `unknown`");
}

// ── Lists ──────────────────────────────────────────────────────────────

#[test]
fn test_empty_list() {
    insta::assert_snapshot!(render(&Expr::Nil), @"[a0]");
}

#[test]
fn test_int_list() {
    let expr = Expr::list([Expr::int(1), Expr::int(2), Expr::int(3)]);
    insta::assert_snapshot!(render(&expr), @"[Int]");
}

#[test]
fn test_nested_list() {
    let expr = Expr::list([Expr::list([Expr::bool(true)]), Expr::Nil]);
    insta::assert_snapshot!(render(&expr), @"[[Bool]]");
}

#[test]
fn test_heterogeneous_list() {
    let expr = Expr::list([Expr::bool(true), Expr::int(1)]);
    insta::assert_snapshot!(render(&expr), @"error: type mismatch: cannot unify `Int` with `Bool`");
}

#[test]
fn test_cons_onto_int() {
    let expr = Expr::cons(Expr::int(1), Expr::int(2));
    insta::assert_snapshot!(render(&expr), @"error: type mismatch: cannot unify `Int` with `[Int]`");
}

#[test]
fn test_polymorphic_nil_in_let() {
    // let empty = [] in let ints = 1 :: empty in true :: empty
    let expr = Expr::let_in(
        "empty",
        Expr::Nil,
        Expr::let_in(
            "ints",
            Expr::cons(Expr::int(1), Expr::var("empty")),
            Expr::cons(Expr::bool(true), Expr::var("empty")),
        ),
    );
    insta::assert_snapshot!(render(&expr), @"[Bool]");
}

// ── Host Environments ──────────────────────────────────────────────────

#[test]
fn test_prelude_arithmetic() {
    let expr = Expr::apply_many(Expr::var("plus"), [Expr::int(1), Expr::int(2)]);
    insta::assert_snapshot!(render_in(&prelude(), &expr), @"Int");
}

#[test]
fn test_prelude_partial_application() {
    let expr = Expr::apply(Expr::var("plus"), Expr::int(1));
    insta::assert_snapshot!(render_in(&prelude(), &expr), @"Int -> Int");
}

#[test]
fn test_prelude_polymorphic_head() {
    let expr = Expr::apply(Expr::var("head"), Expr::list([Expr::bool(true)]));
    insta::assert_snapshot!(render_in(&prelude(), &expr), @"Bool");
}

#[test]
fn test_prelude_map() {
    // map iszero [1, 2]
    let expr = Expr::apply_many(
        Expr::var("map"),
        [Expr::var("iszero"), Expr::list([Expr::int(1), Expr::int(2)])],
    );
    insta::assert_snapshot!(render_in(&prelude(), &expr), @"[Bool]");
}

#[test]
fn test_prelude_map_wrong_element() {
    // map iszero [true]
    let expr = Expr::apply_many(
        Expr::var("map"),
        [Expr::var("iszero"), Expr::list([Expr::bool(true)])],
    );
    insta::assert_snapshot!(render_in(&prelude(), &expr), @"error: type mismatch: cannot unify `Int` with `Bool`");
}

#[test]
fn test_prelude_untouched_by_inference() {
    let env = prelude();
    let before = env.clone();
    let expr = Expr::let_in("plus", Expr::bool(true), Expr::var("plus"));
    assert_eq!(infer(&env, &expr), Ok(Ty::Bool));
    assert_eq!(env, before);
}

#[test]
fn test_env_var_named_like_fresh_var_stays_free() {
    // `g : a0` is a host variable; the lambda parameter must get its own name.
    let env = TypeEnv::new().extend("g", Scheme::mono(Ty::var("a0")));
    let expr = Expr::abs("x", Expr::var("g"));
    insta::assert_snapshot!(render_in(&env, &expr), @"a1 -> a0");
}

#[test]
fn test_apply_env_var_named_like_fresh_var() {
    // `f : a0` applied to an Int is fine: the result is a new variable.
    let env = TypeEnv::new().extend("f", Scheme::mono(Ty::var("a0")));
    let expr = Expr::apply(Expr::var("f"), Expr::int(1));
    assert_eq!(infer(&env, &expr), Ok(Ty::var("a1")));
}

#[test]
fn test_infer_scheme_with_env_var_named_like_fresh_var() {
    let env = TypeEnv::new().extend("g", Scheme::mono(Ty::var("a0")));
    let expr = Expr::abs("x", Expr::var("g"));
    let scheme = infer_scheme(&env, &expr).unwrap();
    insta::assert_snapshot!(scheme.to_string(), @"forall a1. a1 -> a0");
}

// ── Options and Schemes ────────────────────────────────────────────────

#[test]
fn test_custom_var_prefix() {
    let expr = Expr::let_in("id", id(), Expr::var("id"));
    let ty = infer_with(&TypeEnv::new(), &expr, &InferOptions::with_var_prefix("t")).unwrap();
    insta::assert_snapshot!(ty.to_string(), @"t1 -> t1");
}

#[test]
fn test_infer_scheme_closes_type() {
    let scheme = infer_scheme(&TypeEnv::new(), &id()).unwrap();
    insta::assert_snapshot!(scheme.to_string(), @"forall a0. a0 -> a0");
}

#[test]
fn test_infer_scheme_keeps_env_vars_free() {
    // With `g : q` in scope, `\x -> g` cannot quantify over `q`.
    let env = TypeEnv::new().extend("g", Scheme::mono(Ty::var("q")));
    let expr = Expr::abs("x", Expr::var("g"));
    let scheme = infer_scheme(&env, &expr).unwrap();
    insta::assert_snapshot!(scheme.to_string(), @"forall a0. a0 -> q");
}

#[test]
fn test_independent_runs_restart_names() {
    let first = render(&id());
    let second = render(&id());
    assert_eq!(first, second);
    assert_eq!(first, "a0 -> a0");
}
