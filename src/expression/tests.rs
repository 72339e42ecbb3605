use crate::expression::{
    ExpressionError, Operator, Token, evaluate_infix, evaluate_trace, format_trace,
};

fn n(value: u64) -> Token {
    Token::Number(value)
}

fn op(symbol: char) -> Token {
    match Operator::from_symbol(symbol) {
        Some(op) => Token::Op(op),
        None => panic!("not an operator: {}", symbol),
    }
}

#[test]
fn test_format_single_leaf() {
    assert_eq!(format_trace(&[n(7)]), Ok("7".to_string()));
}

#[test]
fn test_format_simple_operations() {
    assert_eq!(format_trace(&[n(2), n(2), op('+')]), Ok("2 + 2".to_string()));
    assert_eq!(format_trace(&[n(2), n(3), op('*')]), Ok("2 * 3".to_string()));
    assert_eq!(format_trace(&[n(9), n(3), op('/')]), Ok("9 / 3".to_string()));
}

#[test]
fn test_format_left_chain_needs_no_parens() {
    let trace = [n(7), n(3), op('-'), n(2), op('-')];
    assert_eq!(format_trace(&trace), Ok("7 - 3 - 2".to_string()));

    let trace = [n(2), n(3), op('+'), n(4), op('+')];
    assert_eq!(format_trace(&trace), Ok("2 + 3 + 4".to_string()));

    let trace = [n(24), n(2), op('/'), n(3), op('/')];
    assert_eq!(format_trace(&trace), Ok("24 / 2 / 3".to_string()));
}

#[test]
fn test_format_lower_precedence_left_operand() {
    let trace = [n(2), n(3), op('+'), n(4), op('*')];
    assert_eq!(format_trace(&trace), Ok("(2 + 3) * 4".to_string()));
}

#[test]
fn test_format_higher_precedence_operand_is_bare() {
    let trace = [n(2), n(3), n(4), op('*'), op('+')];
    assert_eq!(format_trace(&trace), Ok("2 + 3 * 4".to_string()));

    let trace = [n(3), n(4), op('*'), n(2), op('-')];
    assert_eq!(format_trace(&trace), Ok("3 * 4 - 2".to_string()));
}

#[test]
fn test_format_right_operand_of_non_associative_operator() {
    let trace = [n(10), n(5), n(3), op('-'), op('-')];
    assert_eq!(format_trace(&trace), Ok("10 - (5 - 3)".to_string()));

    let trace = [n(10), n(5), n(3), op('+'), op('-')];
    assert_eq!(format_trace(&trace), Ok("10 - (5 + 3)".to_string()));

    let trace = [n(100), n(10), n(2), op('/'), op('/')];
    assert_eq!(format_trace(&trace), Ok("100 / (10 / 2)".to_string()));
}

#[test]
fn test_format_lower_precedence_right_operand() {
    let trace = [n(2), n(5), n(3), op('-'), op('*')];
    assert_eq!(format_trace(&trace), Ok("2 * (5 - 3)".to_string()));
}

#[test]
fn test_format_nested_groups() {
    // (75 - 50) * (4 + 6) / 2
    let trace = [
        n(75),
        n(50),
        op('-'),
        n(4),
        n(6),
        op('+'),
        op('*'),
        n(2),
        op('/'),
    ];
    assert_eq!(
        format_trace(&trace),
        Ok("(75 - 50) * (4 + 6) / 2".to_string())
    );
}

#[test]
fn test_format_malformed_traces() {
    assert_eq!(format_trace(&[]), Err(ExpressionError::EmptyTrace));
    assert_eq!(
        format_trace(&[n(1), op('+')]),
        Err(ExpressionError::MissingOperand('+'))
    );
    assert_eq!(
        format_trace(&[n(1), n(2)]),
        Err(ExpressionError::UnreducedOperands(2))
    );
}

#[test]
fn test_formatted_text_evaluates_to_trace_value() {
    let traces = [
        vec![n(10), n(5), n(3), op('-'), op('-')],
        vec![n(100), n(10), n(2), op('/'), op('/')],
        vec![n(2), n(3), op('+'), n(4), op('*'), n(6), n(2), op('/'), op('-')],
        vec![n(8), n(4), n(2), op('-'), op('*'), n(3), op('+')],
    ];

    for trace in &traces {
        let text = format_trace(trace);
        let value = evaluate_trace(trace);
        assert!(text.is_ok() && value.is_ok(), "trace {:?}", trace);
        if let (Ok(text), Ok(value)) = (text, value) {
            assert_eq!(evaluate_infix(&text), Ok(value as i64), "text {}", text);
        }
    }
}

#[test]
fn test_evaluate_trace() {
    let trace = [n(75), n(50), op('-'), n(4), n(6), op('+'), op('*')];
    assert_eq!(evaluate_trace(&trace), Ok(250));
    assert_eq!(evaluate_trace(&[n(5)]), Ok(5));
}

#[test]
fn test_evaluate_trace_rejects_invalid_steps() {
    assert_eq!(
        evaluate_trace(&[n(3), n(5), op('-')]),
        Err(ExpressionError::NonPositiveResult)
    );
    assert_eq!(
        evaluate_trace(&[n(7), n(2), op('/')]),
        Err(ExpressionError::InexactDivision {
            dividend: 7,
            divisor: 2
        })
    );
    assert_eq!(evaluate_trace(&[]), Err(ExpressionError::EmptyTrace));
}

#[test]
fn test_evaluate_infix_precedence_and_associativity() {
    assert_eq!(evaluate_infix("2 + 3 * 4"), Ok(14));
    assert_eq!(evaluate_infix("(2 + 3) * 4"), Ok(20));
    assert_eq!(evaluate_infix("10 - 5 - 3"), Ok(2));
    assert_eq!(evaluate_infix("10 - (5 - 3)"), Ok(8));
    assert_eq!(evaluate_infix("100 / 10 / 2"), Ok(5));
    assert_eq!(evaluate_infix("100 / (10 / 2)"), Ok(20));
    assert_eq!(evaluate_infix("  42 "), Ok(42));
}

#[test]
fn test_evaluate_infix_errors() {
    assert_eq!(evaluate_infix(""), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(evaluate_infix("2 +"), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(evaluate_infix("(2 + 3"), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(
        evaluate_infix("2 + x"),
        Err(ExpressionError::UnexpectedToken {
            found: 'x',
            position: 4
        })
    );
    assert_eq!(
        evaluate_infix("2 3"),
        Err(ExpressionError::UnexpectedToken {
            found: '3',
            position: 2
        })
    );
    assert_eq!(evaluate_infix("4 / 0"), Err(ExpressionError::DivisionByZero));
    assert_eq!(
        evaluate_infix("7 / 2"),
        Err(ExpressionError::InexactDivision {
            dividend: 7,
            divisor: 2
        })
    );
}

#[test]
fn test_operator_classes() {
    assert!(Operator::Add.is_associative());
    assert!(Operator::Mul.is_associative());
    assert!(!Operator::Sub.is_associative());
    assert!(!Operator::Div.is_associative());
    assert_eq!(Operator::Sub.precedence(), 0);
    assert_eq!(Operator::Div.precedence(), 1);
    assert_eq!(Token::Number(3).precedence(), crate::expression::LEAF_PRECEDENCE);
    assert_eq!(Token::Op(Operator::Mul).to_string(), "*");
}
