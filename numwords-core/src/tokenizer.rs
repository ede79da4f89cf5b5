//! Locale-independent digit-group tokenizer
//!
//! Splits an integer into fixed-width digit groups, least-significant
//! group first. Every locale engine calls this one function; no rule set
//! carries its own copy.

use crate::error::Result;
use crate::number::Number;

/// Numeral system base
pub const RADIX: u64 = 10;

/// Default digits per group (thousands grouping)
pub const DEFAULT_GROUP_WIDTH: u32 = 3;

/// Split `number` into groups of `group_width` digits
///
/// Returns the groups least-significant first, so that the group at index
/// `i` scales by `10^(group_width * i)`. Zero tokenizes to `[0]`.
///
/// # Example
///
/// ```rust
/// use numwords_core::{tokenize, Number};
///
/// assert_eq!(tokenize(Number::Integer(1234), 3).unwrap(), vec![234, 1]);
/// assert_eq!(tokenize(Number::Integer(1234), 2).unwrap(), vec![34, 12]);
/// assert_eq!(tokenize(Number::Integer(0), 3).unwrap(), vec![0]);
/// ```
pub fn tokenize(number: Number, group_width: u32) -> Result<Vec<u64>> {
    let value = number.as_integer()?;

    if value == 0 {
        return Ok(vec![0]);
    }

    let base = RADIX.pow(group_width);
    let mut tokens = Vec::new();
    let mut rest = value;
    while rest > 0 {
        tokens.push(rest % base);
        rest /= base;
    }
    Ok(tokens)
}
