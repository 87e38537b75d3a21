use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::operator::Operator, value::core::LogoValue},
    util::num::{checked_divide, format_decimal},
};

/// Applies an infix operator to two evaluated operands.
///
/// An [`LogoValue::Unknown`] operand is first replaced by the default value
/// of the other operand's type, so an unassigned variable acts as `0` next
/// to a number and as the empty word next to text.
///
/// - `+` adds numbers and concatenates text. Text next to a number
///   concatenates with the number's rendering.
/// - `-`, `*` and `/` accept numbers only.
/// - `=` tests the operands for equality and never fails.
///
/// # Errors
/// - `TypeMismatch` for operand types the operator does not accept.
/// - `DivisionByZero` for `/` with a zero divisor.
///
/// # Example
/// ```
/// use logoterp::interpreter::{
///     evaluator::binary::apply_operator,
///     token::operator::Operator,
///     value::core::LogoValue,
/// };
///
/// let sum = apply_operator(Operator::Add, &LogoValue::from(2), &LogoValue::from(2));
/// assert_eq!(sum, Ok(LogoValue::from(4)));
///
/// let text = apply_operator(Operator::Add, &LogoValue::Text("n".into()), &LogoValue::from(1));
/// assert_eq!(text, Ok(LogoValue::Text("n1".into())));
///
/// let unset = apply_operator(Operator::Multiply, &LogoValue::Unknown, &LogoValue::from(3));
/// assert_eq!(unset, Ok(LogoValue::from(0)));
/// ```
pub fn apply_operator(op: Operator, left: &LogoValue, right: &LogoValue) -> EvalResult<LogoValue> {
    use LogoValue::Number;

    let left = if left.is_unknown() { right.default_like() } else { left.clone() };
    let right = if right.is_unknown() { left.default_like() } else { right.clone() };

    let mismatch = |value: &LogoValue| RuntimeError::TypeMismatch { procedure: op.to_string(),
                                                                    value:     value.describe(), };

    match op {
        Operator::Equals => Ok(LogoValue::Bool(left.equals(&right))),

        Operator::Add => match (&left, &right) {
            (Number(a), Number(b)) => Ok(Number(a + b)),
            (Number(a), b) if b.is_textual() => {
                Ok(LogoValue::Text(format!("{}{}", format_decimal(a), b)))
            },
            (a, Number(b)) if a.is_textual() => {
                Ok(LogoValue::Text(format!("{}{}", a, format_decimal(b))))
            },
            (a, b) if a.is_textual() && b.is_textual() => Ok(LogoValue::Text(format!("{a}{b}"))),
            (a, b) => Err(mismatch(if a.is_textual() || a.as_number().is_some() { b } else { a })),
        },

        Operator::Subtract | Operator::Multiply | Operator::Divide => {
            let (Number(a), Number(b)) = (&left, &right) else {
                return Err(mismatch(if left.as_number().is_some() { &right } else { &left }));
            };
            match op {
                Operator::Subtract => Ok(Number(a - b)),
                Operator::Multiply => Ok(Number(a * b)),
                _ => checked_divide(a, b).map(Number).ok_or(RuntimeError::DivisionByZero),
            }
        },
    }
}
