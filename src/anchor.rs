// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Anchors, alternation and character classes.

use error::{Error, Result};
use fragment::{alternate, concat_nonempty, wrap};

/// Anchor the concatenation of `fragments` to the start: `^...`.
pub fn starts_with<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("^", fragments, "")
}

/// Anchor the concatenation of `fragments` to the end: `...$`.
pub fn ends_with<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("", fragments, "$")
}

/// Anchor the concatenation of `fragments` to both ends: `^...$`.
pub fn starts_and_ends_with<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("^", fragments, "$")
}

/// Join the non-empty `fragments` with `|`.
///
/// No group is added around the alternation; wrap the result in one of the
/// group functions if it must be delimited.
///
/// ```
/// use humre::{either, group};
///
/// assert_eq!(either(vec![group(&["cat"]), group(&["dog"])]).unwrap(), "(cat)|(dog)");
/// ```
pub fn either<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = alternate(fragments);
    if joined.is_empty() {
        trace!("rejected alternation without alternatives");
        return Err(Error::EmptyOperand);
    }
    Ok(joined)
}

/// A character class of the concatenation of `fragments`: `[...]`.
pub fn chars<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(format!("[{}]", concat_nonempty(fragments)?))
}

/// A negated character class of the concatenation of `fragments`: `[^...]`.
pub fn nonchars<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(format!("[^{}]", concat_nonempty(fragments)?))
}
