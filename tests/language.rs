use std::{
    fs,
    time::{Duration, Instant},
};

use letcalc::{
    error::{ErrorKind, EvaluationError},
    evaluate,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_example_lines(&content) {
            count += 1;
            let (expression, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("Example in {path:?} has no '=>': {line}"));
            let actual = evaluate(expression);
            let expected = expected.trim();

            if let Some(kind) = expected.strip_prefix("error:") {
                let kind = kind.trim();
                match actual {
                    Err(e) => assert_eq!(format!("{:?}", e.kind()), kind, "{path:?}: {line}"),
                    Ok(v) => panic!("{path:?}: {line} evaluated to {v}, expected {kind}"),
                }
            } else {
                let expected: i32 = expected.parse()
                                            .unwrap_or_else(|_| panic!("Bad expectation in {path:?}: {line}"));
                assert_eq!(actual, Ok(expected), "{path:?}: {line}");
            }
        }
    }

    assert!(count > 0, "No letcalc examples found in docs");
}

fn extract_example_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```letcalc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

fn assert_result(src: &str, expected: i32) {
    match evaluate(src) {
        Ok(v) => assert_eq!(v, expected, "Expression: {src}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: ErrorKind) {
    match evaluate(src) {
        Ok(v) => panic!("Expression '{src}' evaluated to {v} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), expected, "Expression: {src}, error: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("add(1,2)", 3);
    assert_result("add(1,multi(2,3))", 7);
    assert_result("multi(add(2,2),div(9,3))", 12);
    assert_result("sub(7, 3)", 4);
    assert_result("sub(-7, -3)", -4);
    assert_result("multi(7, -3)", -21);
    assert_result("multi(-7, -3)", 21);
}

#[test]
fn division_truncates_toward_zero() {
    assert_result("div(7, 3)", 2);
    assert_result("div(7, -3)", -2);
    assert_result("div(-7, 3)", -2);
    assert_result("div(-7, -3)", 2);
    assert_result("div(0, 5)", 0);
}

#[test]
fn arithmetic_wraps_at_32_bits() {
    let (min, max) = (i32::MIN, i32::MAX);

    assert_result(&format!("add({min},{max})"), min.wrapping_add(max));
    assert_result(&format!("sub({min},{max})"), min.wrapping_sub(max));
    assert_result(&format!("multi({min},{max})"), min.wrapping_mul(max));
    assert_result(&format!("div({min},{max})"), min / max);
    assert_result(&format!("div({min},-1)"), min);
}

#[test]
fn let_substitutes_value_into_body() {
    assert_result("let(a, 5, add(a, a))", 10);
    assert_result("let(a, add(5, 5), add(a , 5))", 15);
    assert_result("let(a, add(2, 3), a)", 5);
}

#[test]
fn nested_let_bindings() {
    assert_result("let(a,5,let(b,multi(a,10),add(b,a)))", 55);
    assert_result("let(a,let(b,10,add(b,b)),let(b,20,add(a,b)))", 40);
    assert_result("let(a,5,let(b,a,add(b,b)))", 10);
    assert_result("let(a,5,let(b,add(a,1),multi(b,b)))", 36);
}

#[test]
fn inner_let_shadows_outer_binding() {
    assert_result("let(a,5,let(a,3,add(a,5)))", 8);
    assert_result("let(a,5,add(let(a,1,a),a))", 6);
    assert_result("let(x,2,let(x,multi(x,x),let(x,multi(x,x),x)))", 16);
}

#[test]
fn binding_matches_leaf_text() {
    assert_result("let(x,1,let(5,3,add(x,5)))", 4);
    assert_result("let(x,5,let(5,3,add(x,1)))", 6);
}

/// `let(x,1,let(a,x,let(aa,add(a,a),let(aaa,add(aa,aa),...))))`, where every
/// binding doubles the previous one.
fn doubling_chain(levels: usize) -> String {
    let mut src = String::from("let(x,1,let(a,x,");
    for level in 2..=levels {
        let previous = "a".repeat(level - 1);
        src.push_str(&format!("let({},add({previous},{previous}),", "a".repeat(level)));
    }
    src.push_str(&"a".repeat(levels));
    src.push_str(&")".repeat(levels + 1));
    src
}

#[test]
fn long_let_chain_evaluates_quickly() {
    let src = doubling_chain(25);
    let start = Instant::now();

    assert_result(&src, 1 << 24);
    assert!(start.elapsed() < Duration::from_secs(2),
            "25 chained bindings took {:?}",
            start.elapsed());
}

#[test]
fn deeply_nested_calls_do_not_overflow_the_stack() {
    let depth = 20_000;
    let src = format!("{}1{}", "add(1,".repeat(depth), ")".repeat(depth));

    assert_result(&src, 20_001);
}

#[test]
fn deeply_nested_lets_do_not_overflow_the_stack() {
    let depth = 20_000;
    let src = format!("{}add(a,a){}", "let(a,1,".repeat(depth), ")".repeat(depth));

    assert_result(&src, 2);
}

#[test]
fn keywords_and_names_are_case_insensitive() {
    assert_result("LET(A,LET(B,10,ADD(B,b)),LET(B,20,ADD(A,b)))", 40);
    assert_result("Let(Value, 3, Multi(value, VALUE))", 9);
}

#[test]
fn whitespace_is_ignored() {
    assert_result(" let (a , let( b,    10, add ( b , b ) ) , let ( b, 20 , add ( a , b )))",
                  40);
    assert_result("\tadd(\n1,\r\n2 )\n", 3);
    assert_result("let(a b, 5, add(ab, 1))", 6);
}

#[test]
fn repeated_evaluation_is_stable() {
    for _ in 0..3 {
        assert_result("multi(add(2,2),div(9,3))", 12);
    }
}

#[test]
fn missing_input_is_error() {
    assert_eq!(evaluate(""), Err(EvaluationError::InputMissing));
    assert_eq!(evaluate(None::<&str>), Err(EvaluationError::InputMissing));
}

#[test]
fn invalid_input_is_error() {
    assert_failure("invalidexpression", ErrorKind::InputInvalid);
    assert_failure("add(a5,5)", ErrorKind::InputInvalid);
    assert_failure("add(5,5a)", ErrorKind::InputInvalid);
    assert_failure("add/5,5a)", ErrorKind::InputInvalid);
    assert_failure("add(5-3,1)", ErrorKind::InputInvalid);
    assert_failure("add(-,1)", ErrorKind::InputInvalid);
    assert_failure("add(a-b,1)", ErrorKind::InputInvalid);
    assert_failure("add[1,2]", ErrorKind::InputInvalid);
    assert_failure("   ", ErrorKind::InputInvalid);
    assert_failure("let(a,5,a)", ErrorKind::InputInvalid);
}

#[test]
fn missing_arithmetic_function_has_its_own_message() {
    let err = evaluate("let(a,5,a)").unwrap_err();

    assert_eq!(err, EvaluationError::NoArithmeticFunction);
    assert_eq!(err.kind(), ErrorKind::InputInvalid);
    assert_eq!(err.to_string(),
               "Input expression is not valid: it names none of add, sub, multi or div.");
}

#[test]
fn invalid_character_reports_its_position() {
    assert_eq!(evaluate("add(1, 2_)"),
               Err(EvaluationError::InputInvalid { fragment: "_".to_string(),
                                                   position: 7, }));
}

#[test]
fn parenthesis_mismatch_is_error() {
    assert_failure("let(a,5,add(a,a)", ErrorKind::ParenthesisMismatch);
    assert_failure("add(1,2))", ErrorKind::ParenthesisMismatch);
    assert_failure("add)1,2(", ErrorKind::ParenthesisMismatch);
    assert_failure("let(a,5,add)", ErrorKind::ParenthesisMismatch);
}

#[test]
fn wrong_arity_is_error() {
    assert_failure("add(55)", ErrorKind::InvalidArguments);
    assert_failure("let(a,add(a,a))", ErrorKind::InvalidArguments);
    assert_failure("add(1,2,3)", ErrorKind::InvalidArguments);
    assert_failure("add()", ErrorKind::InvalidArguments);
    assert_failure("add(,2)", ErrorKind::InvalidArguments);
    assert_failure("add(1,2)add(3,4)", ErrorKind::InvalidArguments);
    assert_failure("add((1),2)", ErrorKind::InvalidArguments);
}

#[test]
fn free_variable_is_error() {
    assert_failure("let(a,5,add(a,b))", ErrorKind::InvalidArguments);
    assert_failure("add(x,1)", ErrorKind::InvalidArguments);
}

#[test]
fn literal_out_of_range_is_error() {
    assert_failure("add(99999999999,1)", ErrorKind::InvalidArguments);
    assert_failure("let(a,add(1,1),99999999999)", ErrorKind::CalculationError);
}

#[test]
fn non_integer_result_is_error() {
    assert_failure("let(a,add(1,1),b)", ErrorKind::CalculationError);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("div(1,0)", ErrorKind::CalculationError);
    assert_failure("let(z,sub(3,3),div(10,z))", ErrorKind::CalculationError);
}
