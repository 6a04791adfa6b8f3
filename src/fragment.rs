// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Helpers for assembling fragments.

use error::{Error, Result};

/// Concatenate `fragments` in order.
pub fn concat<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments.into_iter().fold(String::new(), |mut acc, fragment| {
        acc.push_str(fragment.as_ref());
        acc
    })
}

/// Concatenate `fragments` in order, failing if the result is empty.
pub fn concat_nonempty<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = concat(fragments);
    if joined.is_empty() {
        trace!("rejected empty operand");
        return Err(Error::EmptyOperand);
    }
    Ok(joined)
}

/// Join the non-empty `fragments` with the alternation operator.
///
/// Empty fragments are dropped before joining, so `["a", "", "b"]` becomes
/// `a|b` rather than `a||b`.
pub fn alternate<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('|');
        }
        out.push_str(fragment);
    }
    out
}

/// Wrap the concatenation of `fragments` between `open` and `close`.
pub fn wrap<I, S>(open: &str, fragments: I, close: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from(open);
    out.push_str(&concat(fragments));
    out.push_str(close);
    out
}
