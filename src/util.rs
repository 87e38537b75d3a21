/// Decimal number helpers.
///
/// This module provides the conversions between source text, the
/// arbitrary-precision decimals used for Logo numbers, and the machine
/// integers that commands such as `repeat` and `item` need. Arithmetic that can
/// fail (division) returns `Option` so callers choose their own error.
pub mod num;
