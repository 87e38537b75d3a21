use logoterp::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::apply_operator,
            core::{Context, Status},
            expression::reduce_operators,
            primitive::core::Primitives,
        },
        output::{Discard, Verbosity},
        token::{core::Token, operator::Operator},
        tokenizer::{TokenizeResult, tokenize},
        value::core::LogoValue,
    },
    util::num::parse_decimal,
};
use pretty_assertions::assert_eq;

fn context() -> Context {
    let mut context = Context::new(Box::new(Discard), Box::new(Discard), Verbosity::Silent);
    context.load_module(Box::new(Primitives));
    context
}

fn number(text: &str) -> LogoValue {
    LogoValue::Number(parse_decimal(text).unwrap())
}

/// Tokenizes and evaluates a single parenthesized expression.
fn evaluate(source: &str) -> Result<LogoValue, RuntimeError> {
    let TokenizeResult::Complete(mut tokens) = tokenize(source) else {
        panic!("Expected {source:?} to tokenize");
    };
    assert!(matches!(tokens.as_slice(), [Token::Expression { .. }]));

    let status = context().evaluate_expression(&mut tokens, 0)?;
    assert_eq!(status, Status::Complete);
    Ok(tokens[0].value().cloned().unwrap_or_default())
}

#[test]
fn two_plus_two() {
    assert_eq!(evaluate("(2 + 2)"), Ok(LogoValue::from(4)));
}

#[test]
fn tiers_reduce_in_fixed_order() {
    assert_eq!(evaluate("(2 + 3 * 4)"), Ok(LogoValue::from(14)));
    assert_eq!(evaluate("(8 / 2 * 2)"), Ok(LogoValue::from(2)));
    assert_eq!(evaluate("(10 - 2 + 3)"), Ok(LogoValue::from(5)));
    assert_eq!(evaluate("(1 + 1 = 2)"), Ok(LogoValue::Bool(true)));
}

#[test]
fn nested_expressions_and_calls() {
    assert_eq!(evaluate("((1 + 2) * 3)"), Ok(LogoValue::from(9)));
    assert_eq!(evaluate("(sum 1 2 * 10)"), Ok(LogoValue::from(21)));
}

#[test]
fn decimals_stay_exact() {
    assert_eq!(evaluate("(0.1 + 0.2)"), Ok(number("0.3")));
    assert_eq!(evaluate("(1 / 4)"), Ok(number("0.25")));
}

#[test]
fn undefined_words_are_errors_inside_expressions() {
    assert_eq!(evaluate("(1 + nope)"),
               Err(RuntimeError::UndefinedProcedure { name: "nope".into() }));
}

#[test]
fn operators_need_operands() {
    assert_eq!(evaluate("(* 2)"),
               Err(RuntimeError::MissingOperand { operator: "*".into() }));
    assert_eq!(evaluate("(2 -)"),
               Err(RuntimeError::MissingOperand { operator: "-".into() }));
}

#[test]
fn leftover_values_are_malformed() {
    assert!(matches!(evaluate("(1 2)"), Err(RuntimeError::MalformedExpression { .. })));
    assert!(matches!(evaluate("()"), Err(RuntimeError::MalformedExpression { .. })));
}

#[test]
fn reduce_operators_on_literals() {
    let mut tokens = vec![Token::literal(LogoValue::from(7)),
                          Token::Operator { op: Operator::Subtract },
                          Token::literal(LogoValue::from(2)),
                          Token::Operator { op: Operator::Equals },
                          Token::literal(LogoValue::from(5))];

    assert_eq!(reduce_operators(&mut tokens), Ok(LogoValue::Bool(true)));
    assert_eq!(tokens.len(), 1);
}

#[test]
fn addition_concatenates_text() {
    let text = LogoValue::Text("abc".into());
    let word = LogoValue::Word("def".into());

    assert_eq!(apply_operator(Operator::Add, &text, &word),
               Ok(LogoValue::Text("abcdef".into())));
    assert_eq!(apply_operator(Operator::Add, &LogoValue::from(1), &word),
               Ok(LogoValue::Text("1def".into())));
}

#[test]
fn unknown_operands_take_the_other_side_default() {
    assert_eq!(apply_operator(Operator::Add, &LogoValue::Unknown, &LogoValue::from(3)),
               Ok(LogoValue::from(3)));
    assert_eq!(apply_operator(Operator::Add, &LogoValue::Text("x".into()), &LogoValue::Unknown),
               Ok(LogoValue::Text("x".into())));
}

#[test]
fn arithmetic_type_errors() {
    let list = LogoValue::List(Vec::new());

    assert!(matches!(apply_operator(Operator::Add, &LogoValue::from(1), &list),
                     Err(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(apply_operator(Operator::Multiply, &LogoValue::Text("a".into()), &LogoValue::from(2)),
                     Err(RuntimeError::TypeMismatch { .. })));
    assert_eq!(apply_operator(Operator::Divide, &LogoValue::from(1), &LogoValue::from(0)),
               Err(RuntimeError::DivisionByZero));
}

#[test]
fn equality_compares_words_and_lists() {
    let a = LogoValue::Word("a".into());
    let also_a = LogoValue::Text("a".into());

    assert_eq!(apply_operator(Operator::Equals, &a, &also_a), Ok(LogoValue::Bool(true)));
    assert_eq!(apply_operator(Operator::Equals, &a, &LogoValue::from(1)),
               Ok(LogoValue::Bool(false)));
}
