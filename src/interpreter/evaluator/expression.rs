use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::apply_operator,
            core::{Context, EvalResult, Status},
            procedure::pending_word,
        },
        token::{core::Token, operator::Operator},
        value::core::{LogoValue, join_tokens},
    },
};

impl Context {
    /// Evaluates the parenthesized expression at `index` into one literal.
    ///
    /// Every child that is not an operator is evaluated first. Unknown words
    /// inside an expression are errors, not text. The resulting operands and
    /// operators are then reduced by [`reduce_operators`].
    ///
    /// # Errors
    /// `NotEnoughInputs` if a call inside the parentheses is short of inputs,
    /// and the errors of [`reduce_operators`].
    pub fn evaluate_expression(&mut self, tokens: &mut [Token], index: usize) -> EvalResult<Status> {
        let Token::Expression { children } = &mut tokens[index] else {
            return Ok(Status::Complete);
        };
        let mut children = std::mem::take(children);
        let source = format!("({})", join_tokens(&children));

        while let Some(position) = children.iter().position(|t| !t.is_literal() && !t.is_operator()) {
            if self.evaluate_operand(&mut children, position, false)? == Status::Incomplete {
                return Err(RuntimeError::NotEnoughInputs { procedure: pending_word(&children[position..]) });
            }
            if self.is_unwinding() {
                return Ok(Status::Complete);
            }
        }

        if children.is_empty() {
            return Err(RuntimeError::MalformedExpression { text: source });
        }

        let value = reduce_operators(&mut children)?;
        tokens[index] = Token::literal(value);
        Ok(Status::Complete)
    }
}

/// Reduces a run of literals and operators to one value.
///
/// Operators are applied one tier at a time in the fixed order multiply,
/// divide, add, subtract, equals; within a tier the leftmost goes first.
/// Each application replaces an `operand operator operand` window with its
/// result.
///
/// # Errors
/// - `MissingOperand` if an operator lacks a literal on either side.
/// - `MalformedExpression` if anything other than one value remains.
/// - Whatever [`apply_operator`] reports for the operands.
///
/// # Example
/// ```
/// use logoterp::interpreter::{
///     evaluator::expression::reduce_operators,
///     token::{core::Token, operator::Operator},
///     value::core::LogoValue,
/// };
///
/// let mut tokens = vec![Token::literal(LogoValue::from(2)),
///                       Token::Operator { op: Operator::Add },
///                       Token::literal(LogoValue::from(3)),
///                       Token::Operator { op: Operator::Multiply },
///                       Token::literal(LogoValue::from(4))];
///
/// assert_eq!(reduce_operators(&mut tokens), Ok(LogoValue::from(14)));
/// ```
pub fn reduce_operators(tokens: &mut Vec<Token>) -> EvalResult<LogoValue> {
    let source = join_tokens(tokens);

    for tier in Operator::PRECEDENCE {
        while let Some(position) = tokens.iter().position(|t| t.operator() == Some(tier)) {
            let missing = || RuntimeError::MissingOperand { operator: tier.to_string() };

            if position == 0 || position + 1 == tokens.len() {
                return Err(missing());
            }
            let (Some(left), Some(right)) = (tokens[position - 1].value(), tokens[position + 1].value())
            else {
                return Err(missing());
            };

            let result = apply_operator(tier, left, right)?;
            tokens.splice(position - 1..=position + 1, [Token::literal(result)]);
        }
    }

    match tokens.as_slice() {
        [only] => only.value()
                      .cloned()
                      .ok_or(RuntimeError::MalformedExpression { text: source }),
        _ => Err(RuntimeError::MalformedExpression { text: source }),
    }
}
