// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Grouping of fragments.
//!
//! The plain groups accept an empty operand; `()` is a valid pattern that
//! matches the empty string. The quantified groups validate their counts
//! the same way as the functions in the quantifier module but, unlike
//! them, do not require a non-empty operand.

use error::Result;
use escape::validate_identifier;
use fragment::{alternate, concat_nonempty, wrap};
use quantifier::Bounds;

/// Wrap the concatenation of `fragments` in a capturing group.
///
/// ```
/// use humre::group;
///
/// assert_eq!(group(vec!["cat".to_string(), group(&["dog"])]), "(cat(dog))");
/// ```
pub fn group<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(", fragments, ")")
}

/// Wrap the concatenation of `fragments` in a capturing group named `name`.
///
/// Fails with `Error::InvalidIdentifier` unless `name` is a letter or
/// underscore followed by word characters. Uniqueness of names within a
/// pattern is not checked.
pub fn named_group<I, S>(name: &str, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_identifier(name)?;
    Ok(wrap(&format!("(?P<{}>", name), fragments, ")"))
}

/// Wrap the concatenation of `fragments` in a non-capturing group: `(?:...)`.
pub fn noncapturing_group<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(?:", fragments, ")")
}

/// An optional capturing group: `(...)?`.
pub fn optional_group<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(", fragments, ")?")
}

/// A capturing group repeated zero or more times: `(...)*`.
pub fn zero_or_more_group<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(", fragments, ")*")
}

/// A capturing group repeated one or more times: `(...)+`.
pub fn one_or_more_group<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(", fragments, ")+")
}

/// A capturing group around the alternation of the non-empty `fragments`.
///
/// ```
/// assert_eq!(humre::group_either(&["cat", "", "dog"]), "(cat|dog)");
/// ```
pub fn group_either<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("({})", alternate(fragments))
}

fn quantified_group<I, S>(bounds: Result<Bounds>, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bounds = bounds?;
    let mut out = group(fragments);
    bounds.push_suffix(&mut out);
    Ok(out)
}

/// A capturing group repeated exactly `quantity` times: `(...){n}`.
pub fn group_exactly<I, S>(quantity: i64, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    quantified_group(Bounds::exactly(quantity), fragments)
}

/// A capturing group repeated between `minimum` and `maximum` times:
/// `(...){min,max}`.
pub fn group_between<I, S>(minimum: i64, maximum: i64, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    quantified_group(Bounds::between(minimum, maximum), fragments)
}

/// A capturing group repeated at least `minimum` times: `(...){min,}`.
pub fn group_at_least<I, S>(minimum: i64, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    quantified_group(Bounds::at_least(minimum), fragments)
}

/// A capturing group repeated at most `maximum` times: `(...){,max}`.
pub fn group_at_most<I, S>(maximum: i64, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    quantified_group(Bounds::at_most(maximum), fragments)
}

/// A capturing group around a character class: `([...])`.
pub fn group_chars<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(format!("([{}])", concat_nonempty(fragments)?))
}

/// A capturing group around a negated character class: `([^...])`.
pub fn group_nonchars<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(format!("([^{}])", concat_nonempty(fragments)?))
}
