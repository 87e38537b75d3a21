use logoterp::{
    error::TokenizeError,
    interpreter::{
        token::{core::Token, operator::Operator},
        tokenizer::{TokenizeResult, Tokenizer, tokenize},
        value::core::LogoValue,
    },
};
use pretty_assertions::assert_eq;

fn complete(text: &str) -> Vec<Token> {
    match tokenize(text) {
        TokenizeResult::Complete(tokens) => tokens,
        other => panic!("Expected {text:?} to tokenize completely, got {other:?}"),
    }
}

fn rejoined(text: &str) -> String {
    complete(text).iter().map(Token::text).collect::<Vec<_>>().join(" ")
}

#[test]
fn expression_has_three_children() {
    let tokens = complete("(2 + 2)");

    let [Token::Expression { children }] = tokens.as_slice() else {
        panic!("Expected one expression, got {tokens:?}");
    };
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].value(), Some(&LogoValue::from(2)));
    assert_eq!(children[1], Token::Operator { op: Operator::Add });
    assert_eq!(children[2].value(), Some(&LogoValue::from(2)));
}

#[test]
fn words_variables_and_literals() {
    let tokens = complete("make \"x :y 3.5 print");

    assert_eq!(tokens[0], Token::word("make"));
    assert_eq!(tokens[1].value(), Some(&LogoValue::Word("x".into())));
    assert_eq!(tokens[2], Token::Variable { text: ":y".into() });
    assert_eq!(tokens[3].text(), "3.5");
    assert!(tokens[3].value().and_then(LogoValue::as_number).is_some());
    assert_eq!(tokens[4], Token::word("print"));
}

#[test]
fn operators_split_words() {
    let tokens = complete("3*4");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].operator(), Some(Operator::Multiply));
}

#[test]
fn quoted_words_keep_operator_characters() {
    let tokens = complete("print \"a-b");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].value(), Some(&LogoValue::Word("a-b".into())));
}

#[test]
fn minus_before_a_digit_starts_a_number() {
    let negative = complete("print -3");
    assert_eq!(negative[1].value(), Some(&LogoValue::from(-3)));

    let subtraction = complete("5 - 3");
    assert_eq!(subtraction[1].operator(), Some(Operator::Subtract));

    let tight = complete("5-3");
    assert_eq!(tight.len(), 3);
    assert_eq!(tight[1].operator(), Some(Operator::Subtract));

    let after_operator = complete("3*-2");
    assert_eq!(after_operator.len(), 3);
    assert_eq!(after_operator[1].operator(), Some(Operator::Multiply));
    assert_eq!(after_operator[2].value(), Some(&LogoValue::from(-2)));
}

#[test]
fn nested_lists_are_tokenized_recursively() {
    let tokens = complete("[a [b c] (1 + 2)]");

    let [Token::List { children }] = tokens.as_slice() else {
        panic!("Expected one list, got {tokens:?}");
    };
    assert_eq!(children.len(), 3);
    assert!(matches!(&children[1], Token::List { children } if children.len() == 2));
    assert!(matches!(&children[2], Token::Expression { children } if children.len() == 3));
}

#[test]
fn comments_end_at_newline_or_end_of_text() {
    let tokens = complete("print 1 ; first\nprint 2 ; second");

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[2], Token::Comment { text: "; first".into() });
    assert_eq!(tokens[5], Token::Comment { text: "; second".into() });
}

#[test]
fn brackets_inside_list_comments_are_ignored() {
    let tokens = complete("[a ; ]\n b]");

    let [Token::List { children }] = tokens.as_slice() else {
        panic!("Expected one list, got {tokens:?}");
    };
    assert_eq!(children.len(), 3);
    assert!(children[1].is_comment());
}

#[test]
fn round_trip_reproduces_source_up_to_whitespace() {
    for source in ["print [1 2 3]",
                   "to square :n [output :n * :n]",
                   "repeat 4 [fd 10 rt 90]",
                   "print (2 + 3) * [a [b [c]]]",
                   "make \"x [ spaced   out ]"]
    {
        let normalized = source.split_whitespace()
                               .collect::<Vec<_>>()
                               .join(" ")
                               .replace("[ ", "[")
                               .replace(" ]", "]");
        assert_eq!(rejoined(source), normalized);
    }
}

#[test]
fn comments_inside_lists_survive_a_round_trip() {
    for source in ["[a ; c\n b]", "[to sq :n ; squares\n output :n * :n]", "[x [y ; z\n] w]"] {
        let tokens = complete(source);
        let text = rejoined(source);

        assert_eq!(complete(&text), tokens, "re-tokenizing {text:?}");
    }
    assert_eq!(rejoined("[a ; c\n b]"), "[a ; c\nb]");
}

#[test]
fn incomplete_then_complete_converges() {
    let source = "print [1 2\n[3 (4 + 5)]\n6] print 7";

    for split in 7..source.find("6]").unwrap_or(source.len()) {
        let (prefix, suffix) = source.split_at(split);

        let TokenizeResult::Incomplete { mut tokens, remainder } = tokenize(prefix) else {
            panic!("Expected {prefix:?} to be incomplete");
        };
        let TokenizeResult::Complete(rest) = tokenize(&format!("{remainder}{suffix}")) else {
            panic!("Expected the rest of {source:?} to complete at split {split}");
        };
        tokens.extend(rest);

        assert_eq!(tokens, complete(source), "split at {split}");
    }
}

#[test]
fn stateful_tokenizer_carries_open_lists() {
    let mut tokenizer = Tokenizer::default();

    assert!(matches!(tokenizer.tokenize("print [a"), TokenizeResult::Incomplete { .. }));
    assert!(matches!(tokenizer.tokenize("[b"), TokenizeResult::Incomplete { .. }));

    let TokenizeResult::Complete(tokens) = tokenizer.tokenize("c] d]") else {
        panic!("Expected the list to close");
    };
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text(), "[a [b c] d]");
    assert!(!tokenizer.is_pending());
}

#[test]
fn unmatched_close_fails() {
    assert_eq!(tokenize("print 1]"),
               TokenizeResult::Failure(TokenizeError::UnexpectedClose { symbol: ']' }));
}

#[test]
fn unterminated_nested_construct_fails() {
    assert!(matches!(tokenize("[a (b]"),
                     TokenizeResult::Failure(TokenizeError::UnterminatedExpression { .. })));
}
