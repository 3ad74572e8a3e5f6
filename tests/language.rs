use std::fs::{self};

use pemdas::{
    config::Config,
    error::{ErrorKind, EvalError, LexError, ParseError},
    interpreter::evaluator::core::Evaluation,
    run, run_with,
};
use rstest::rstest;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/book/src")).into_iter()
                                                                       .filter_map(Result::ok)
                                                                       .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let result = run(&example.expression);
            match (&example.expected, &result) {
                (Expected::Value(expected), Ok(evaluation)) => {
                    assert!(close(evaluation.value, *expected),
                            "Example {} in {:?} ({}) evaluated to {}, expected {}",
                            i + 1,
                            path,
                            example.expression,
                            evaluation.value,
                            expected);
                },
                (Expected::Error(kind), Err(e)) => {
                    assert_eq!(&e.kind().to_string(),
                               kind,
                               "Example {} in {:?} ({}) failed differently: {}",
                               i + 1,
                               path,
                               example.expression,
                               e);
                },
                _ => panic!("Example {} in {:?} ({}) gave {:?}",
                            i + 1,
                            path,
                            example.expression,
                            result),
            }
        }
    }

    assert!(count > 0, "No pemdas examples found in book/src");
}

enum Expected {
    Value(f64),
    Error(String),
}

struct Example {
    expression: String,
    expected:   Expected,
}

fn extract_examples(content: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut inside = false;
    let mut buf: Vec<String> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```pemdas") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            let [expression, expected] = buf.as_slice() else {
                panic!("Malformed example block: {buf:?}");
            };
            let expected = if let Some(value) = expected.strip_prefix("= ") {
                Expected::Value(value.parse().unwrap_or_else(|e| panic!("Bad value {value}: {e}")))
            } else if let Some(kind) = expected.strip_prefix("! ") {
                Expected::Error(kind.to_string())
            } else {
                panic!("Expected '= value' or '! ErrorKind', found {expected}")
            };
            examples.push(Example { expression: expression.clone(),
                                    expected });
            continue;
        }
        if inside && !trimmed.is_empty() {
            buf.push(trimmed.to_string());
        }
    }

    examples
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn assert_success(src: &str) -> Evaluation {
    run(src).unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"))
}

fn assert_failure(src: &str) -> EvalError {
    match run(src) {
        Ok(evaluation) => panic!("Expression {src:?} succeeded with {} but was expected to fail",
                                 evaluation.value),
        Err(e) => e,
    }
}

fn descriptions(evaluation: &Evaluation) -> Vec<&str> {
    evaluation.steps
              .iter()
              .map(|step| step.description.as_str())
              .collect()
}

#[rstest]
#[case("2^3^2", 512.0)]
#[case("2^(3^2)", 512.0)]
#[case("(2^3)^2", 64.0)]
#[case("(3+5)*2", 16.0)]
#[case("3+5*2", 13.0)]
#[case("2 + (3 * (4 - 1))", 11.0)]
#[case("(3 + 5) * 2 ^ 3 - 10 / 2", 59.0)]
#[case("-5 + 3", -2.0)]
#[case("3*-2", -6.0)]
#[case("(-5+2)", -3.0)]
#[case("2 - -3", 5.0)]
#[case("--4", 4.0)]
#[case("-2^2", 4.0)]
#[case("-(2^2)", -4.0)]
#[case("2^-1", 0.5)]
#[case("8 / -2 ^ 2", 2.0)]
#[case("10 - 4 - 3", 3.0)]
#[case("100 / 10 / 5", 2.0)]
#[case("1.5 * 4", 6.0)]
#[case("0.1 + 0.2", 0.3)]
#[case("  7  ", 7.0)]
#[case("(((1)))", 1.0)]
#[case("2 * (3 + 4) ^ 2", 98.0)]
#[case("-(2 + 3) * 2", -10.0)]
#[case("1 - 2 + 3 - 4 + 5", 3.0)]
#[case("2 * 3 / 4 * 5", 7.5)]
#[case("\t1\n+\r\n2", 3.0)]
fn evaluates_with_standard_precedence(#[case] input: &str, #[case] expected: f64) {
    let evaluation = assert_success(input);
    assert!(close(evaluation.value, expected),
            "{input} evaluated to {}, expected {expected}",
            evaluation.value);
}

#[rstest]
#[case("10 / 0", ErrorKind::DivisionByZero)]
#[case("5/(2-2)", ErrorKind::DivisionByZero)]
#[case("1 / (0.5 - 0.5)", ErrorKind::DivisionByZero)]
#[case("2 + (3 * (4 / (1 - 1)))", ErrorKind::DivisionByZero)]
#[case("((", ErrorKind::UnbalancedParens)]
#[case("(1 + 2", ErrorKind::UnbalancedParens)]
#[case("1 + 2)", ErrorKind::UnbalancedParens)]
#[case(")(", ErrorKind::UnbalancedParens)]
#[case("3 @ 4", ErrorKind::InvalidCharacter)]
#[case("x + 1", ErrorKind::InvalidCharacter)]
#[case("1,5", ErrorKind::InvalidCharacter)]
#[case("1.2.3", ErrorKind::MalformedNumber)]
#[case(".5", ErrorKind::MalformedNumber)]
#[case("5.", ErrorKind::MalformedNumber)]
#[case("1 +", ErrorKind::MissingOperand)]
#[case("()", ErrorKind::MissingOperand)]
#[case("", ErrorKind::MissingOperand)]
#[case("   ", ErrorKind::MissingOperand)]
#[case("*2", ErrorKind::MissingOperand)]
#[case("2 * / 3", ErrorKind::MissingOperand)]
#[case("-", ErrorKind::MissingOperand)]
#[case("2 3", ErrorKind::MissingOperator)]
#[case("2(3+4)", ErrorKind::MissingOperator)]
#[case("(1)(2)", ErrorKind::MissingOperator)]
#[case("(1 2)", ErrorKind::MissingOperator)]
#[case("0^0", ErrorKind::NumericDomainError)]
#[case("10^400", ErrorKind::NumericDomainError)]
#[case("(-8)^(1/3)", ErrorKind::NumericDomainError)]
#[case("0 ^ -1", ErrorKind::NumericDomainError)]
fn rejects_invalid_expressions(#[case] input: &str, #[case] expected: ErrorKind) {
    let err = assert_failure(input);
    assert_eq!(err.kind(), expected, "{input} failed with {err}");
}

#[test]
fn main_scenario_trace() {
    let evaluation = assert_success("(3 + 5) * 2 ^ 3 - 10 / 2");

    assert_eq!(descriptions(&evaluation),
               ["3 + 5 = 8", "2 ^ 3 = 8", "8 * 8 = 64", "10 / 2 = 5", "64 - 5 = 59"]);

    let before: Vec<_> = evaluation.steps
                                   .iter()
                                   .map(|s| s.expression_before.as_str())
                                   .collect();
    assert_eq!(before,
               ["(3 + 5) * 2 ^ 3 - 10 / 2",
                "8 * 2 ^ 3 - 10 / 2",
                "8 * 8 - 10 / 2",
                "64 - 10 / 2",
                "64 - 5"]);
    assert_eq!(evaluation.steps[4].expression_after, "59");

    let order: Vec<_> = evaluation.steps.iter().map(|s| s.order).collect();
    assert_eq!(order, [1, 2, 3, 4, 5]);
    assert!(evaluation.has_walkthrough());
}

#[test]
fn bare_literal_has_no_steps() {
    let evaluation = assert_success("42");
    assert_eq!(evaluation.value, 42.0);
    assert!(evaluation.steps.is_empty());
    assert!(!evaluation.has_walkthrough());
}

#[test]
fn single_operation_has_one_step_but_no_walkthrough() {
    let evaluation = assert_success("10 / 2");
    assert_eq!(descriptions(&evaluation), ["10 / 2 = 5"]);
    assert!(!evaluation.has_walkthrough());
}

#[test]
fn exponent_chain_resolves_right_to_left() {
    let evaluation = assert_success("2 ^ 3 ^ 2");
    assert_eq!(descriptions(&evaluation), ["3 ^ 2 = 9", "2 ^ 9 = 512"]);
    assert_eq!(evaluation.steps[0].expression_after, "2 ^ 9");
}

#[test]
fn left_most_exponent_chain_goes_first() {
    let evaluation = assert_success("2 ^ 3 * 4 ^ 2 ^ 1");
    assert_eq!(descriptions(&evaluation),
               ["2 ^ 3 = 8", "2 ^ 1 = 2", "4 ^ 2 = 16", "8 * 16 = 128"]);
}

#[test]
fn written_parentheses_are_honored_even_when_redundant() {
    let evaluation = assert_success("(2 + 3) + 4 * 5");
    assert_eq!(descriptions(&evaluation), ["2 + 3 = 5", "4 * 5 = 20", "5 + 20 = 25"]);
}

#[test]
fn inner_groups_finish_before_outer_operators() {
    let evaluation = assert_success("(1 + 2) * ((3 + 4) * 5)");
    assert_eq!(descriptions(&evaluation),
               ["1 + 2 = 3", "3 + 4 = 7", "7 * 5 = 35", "3 * 35 = 105"]);

    let after: Vec<_> = evaluation.steps
                                  .iter()
                                  .map(|s| s.expression_after.as_str())
                                  .collect();
    assert_eq!(after, ["3 * ((3 + 4) * 5)", "3 * (7 * 5)", "3 * 35", "105"]);
}

#[test]
fn nested_groups_in_addition() {
    let evaluation = assert_success("2 + (3 * (4 - 1))");
    assert_eq!(descriptions(&evaluation), ["4 - 1 = 3", "3 * 3 = 9", "2 + 9 = 11"]);
    assert_eq!(evaluation.steps[0].expression_after, "2 + (3 * 3)");
}

#[test]
fn negation_folds_without_a_step() {
    let evaluation = assert_success("-5 + 3");
    assert_eq!(descriptions(&evaluation), ["-5 + 3 = -2"]);

    let evaluation = assert_success("-(2 + 3) * 2");
    assert_eq!(evaluation.steps[0].expression_before, "-(2 + 3) * 2");
    assert_eq!(evaluation.steps[0].expression_after, "-5 * 2");
    assert_eq!(descriptions(&evaluation), ["2 + 3 = 5", "-5 * 2 = -10"]);
}

#[test]
fn negative_bases_are_shown_in_parentheses() {
    let evaluation = assert_success("(0 - 2) ^ 2");
    assert_eq!(evaluation.steps[0].expression_after, "(-2) ^ 2");
    assert_eq!(evaluation.steps[1].description, "(-2) ^ 2 = 4");
}

#[test]
fn negated_groups_under_an_exponent_are_shown_in_parentheses() {
    let evaluation = assert_success("-(1 + 1) ^ 2");
    assert_eq!(evaluation.value, 4.0);
    assert_eq!(evaluation.steps[0].expression_before, "(-(1 + 1)) ^ 2");
    assert_eq!(evaluation.steps[0].expression_after, "(-2) ^ 2");
    assert_eq!(evaluation.steps[1].description, "(-2) ^ 2 = 4");
}

#[test]
fn decimals_are_rounded_for_display_only() {
    let evaluation = assert_success("1 / 3 * 3");
    assert_eq!(descriptions(&evaluation), ["1 / 3 = 0.3333333333", "0.3333333333 * 3 = 1"]);

    let config = Config::default().with_decimal_places(2);
    let evaluation = run_with("1 / 3", &config).unwrap();
    assert_eq!(evaluation.steps[0].description, "1 / 3 = 0.33");
    assert!(close(evaluation.value, 1.0 / 3.0));
}

#[test]
fn errors_point_at_the_offending_character() {
    assert_eq!(assert_failure("3 @ 4"),
               EvalError::Lex(LexError::InvalidCharacter { position:  2,
                                                           character: '@', }));
    assert_eq!(assert_failure("12 + é"),
               EvalError::Lex(LexError::InvalidCharacter { position:  5,
                                                           character: 'é', }));
    assert_eq!(assert_failure("1 + 2.3.4"),
               EvalError::Lex(LexError::MalformedNumber { position: 4,
                                                          text:     "2.3.4".to_string(), }));
    assert_eq!(assert_failure("(1 + 2"),
               EvalError::Parse(ParseError::UnbalancedParens { position: 0 }));
    assert_eq!(assert_failure("1 + 2)"),
               EvalError::Parse(ParseError::UnbalancedParens { position: 5 }));
    assert_eq!(assert_failure("1 +"),
               EvalError::Parse(ParseError::MissingOperand { position: 2 }));
    assert_eq!(assert_failure("(1 + )"),
               EvalError::Parse(ParseError::MissingOperand { position: 5 }));
    assert_eq!(assert_failure("2 3"),
               EvalError::Parse(ParseError::MissingOperator { position: 2 }));
    assert_eq!(assert_failure("3 @ 4").position(), Some(2));
    assert_eq!(assert_failure("10 / 0").position(), None);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(assert_failure("3 @ 4").to_string(),
               "Invalid character '@' at position 2.");
    assert_eq!(assert_failure("10 / 0").to_string(),
               "Division by zero: 10 / 0 is undefined.");
    assert_eq!(assert_failure("0 ^ 0").to_string(),
               "0 ^ 0 has no finite real result.");
    assert_eq!(assert_failure("((").to_string(),
               "Unbalanced parenthesis at position 1.");
}

#[test]
fn nesting_limit_is_enforced() {
    let at_limit = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    assert_eq!(assert_success(&at_limit).value, 1.0);

    let too_deep = format!("{}1{}", "(".repeat(65), ")".repeat(65));
    assert!(matches!(assert_failure(&too_deep),
                     EvalError::Parse(ParseError::TooDeep { limit: 64, position: 64 })));

    assert_eq!(assert_success(&format!("{}1", "-".repeat(64))).value, 1.0);
    assert_eq!(assert_failure(&format!("{}1", "-".repeat(65))).kind(),
               ErrorKind::TooDeep);

    let config = Config::default().with_max_depth(3);
    assert_eq!(run_with("2^2^2^2", &config).unwrap().value, 65536.0);
    assert_eq!(run_with("2^2^2^2^2", &config).unwrap_err().kind(),
               ErrorKind::TooDeep);
}

#[test]
fn input_length_limit_is_enforced() {
    let long = format!("{}1", "1+".repeat(600));
    assert_eq!(assert_failure(&long),
               EvalError::Lex(LexError::InputTooLong { length: 1201,
                                                       limit:  1024, }));

    let config = Config::default().with_max_input_length(2000);
    let evaluation = run_with(&long, &config).unwrap();
    assert_eq!(evaluation.value, 601.0);
    assert_eq!(evaluation.steps.len(), 600);
}

#[rstest]
#[case("1+", 5001.0)]
#[case("1-", -4999.0)]
#[case("1*", 1.0)]
fn long_operator_chains_evaluate(#[case] link: &str, #[case] expected: f64) {
    let long = format!("{}1", link.repeat(5000));
    let config = Config::default().with_max_input_length(long.len());

    let evaluation = run_with(&long, &config).unwrap();
    assert!(close(evaluation.value, expected), "{}", evaluation.value);
    assert_eq!(evaluation.steps.len(), 5000);
}

#[test]
fn failures_return_no_partial_result() {
    // The first two steps succeed before the division by zero.
    let err = assert_failure("(1 + 2) * (3 + 4) / (5 - 5)");
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);

    // A later call is unaffected.
    assert_eq!(assert_success("(1 + 2) * (3 + 4) / (5 - 4)").value, 21.0);
}
