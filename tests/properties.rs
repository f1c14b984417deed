use letcalc::{ast::ArithmeticFunction, evaluate, interpreter::lexer::Keyword};
use proptest::prelude::*;

fn apply(function: ArithmeticFunction, a: i32, b: i32) -> i32 {
    match function {
        ArithmeticFunction::Add => a.wrapping_add(b),
        ArithmeticFunction::Sub => a.wrapping_sub(b),
        ArithmeticFunction::Multi => a.wrapping_mul(b),
        ArithmeticFunction::Div => a.wrapping_div(b),
    }
}

fn function_strategy() -> impl Strategy<Value = ArithmeticFunction> {
    prop::sample::select(ArithmeticFunction::ALL.to_vec())
}

/// Literal-only expressions, always wrapped in at least one call.
fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = any::<i32>().prop_map(|n| n.to_string());
    let tree = leaf.prop_recursive(4, 32, 2, |inner| {
                       (function_strategy(), inner.clone(), inner).prop_map(|(f, a, b)| {
                                                                     format!("{f}({a},{b})")
                                                                 })
                   });

    (function_strategy(), tree.clone(), tree).prop_map(|(f, a, b)| format!("{f}({a},{b})"))
}

/// Variable names that the lexer classifies as identifiers.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_filter("keywords cannot be bound", |name| {
                    Keyword::from_word(name).is_none()
                })
}

/// Inserts whitespace in front of non-letters. Function names stay intact
/// because the keyword check runs before whitespace is removed.
fn with_whitespace(src: &str, gaps: &[bool]) -> String {
    let mut spaced = String::new();
    for (i, c) in src.chars().enumerate() {
        if !c.is_ascii_alphabetic() && gaps.get(i).copied().unwrap_or(false) {
            spaced.push(if i % 2 == 0 { ' ' } else { '\t' });
        }
        spaced.push(c);
    }
    spaced
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// A single call computes the expected 32-bit result.
    #[test]
    fn prop_single_call_matches_wrapping_arithmetic(function in function_strategy(),
                                                    a in any::<i32>(),
                                                    b in any::<i32>()) {
        prop_assume!(function != ArithmeticFunction::Div || b != 0);

        let src = format!("{function}({a},{b})");
        prop_assert_eq!(evaluate(src.as_str()), Ok(apply(function, a, b)));
    }

    /// Whitespace anywhere in the input does not change the outcome.
    #[test]
    fn prop_whitespace_is_irrelevant(src in expression_strategy(),
                                     gaps in prop::collection::vec(any::<bool>(), 0..128)) {
        let spaced = with_whitespace(&src, &gaps);
        prop_assert_eq!(evaluate(spaced.as_str()), evaluate(src.as_str()));
    }

    /// Upper-casing the input does not change the outcome.
    #[test]
    fn prop_case_is_irrelevant(src in expression_strategy()) {
        let upper = src.to_uppercase();
        prop_assert_eq!(evaluate(upper.as_str()), evaluate(src.as_str()));
    }

    /// Evaluating the same input again gives the same outcome.
    #[test]
    fn prop_evaluation_is_idempotent(src in expression_strategy()) {
        let first = evaluate(src.as_str());
        prop_assert_eq!(evaluate(src.as_str()), first.clone());
        prop_assert_eq!(evaluate(src.as_str()), first);
    }

    /// A binding behaves like using its value directly.
    #[test]
    fn prop_let_binds_value_in_body(name in name_strategy(),
                                    value in any::<i32>(),
                                    other in any::<i32>()) {
        let src = format!("let({name},{value},add({name},{other}))");
        prop_assert_eq!(evaluate(src.as_str()), Ok(value.wrapping_add(other)));
    }

    /// The innermost binding of a name wins.
    #[test]
    fn prop_inner_binding_shadows_outer(name in name_strategy(),
                                        outer in any::<i32>(),
                                        inner in any::<i32>()) {
        let src = format!("let({name},{outer},let({name},{inner},multi({name},1)))");
        prop_assert_eq!(evaluate(src.as_str()), Ok(inner));
    }
}
