// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Zero-width lookaround assertions.
//!
//! The asserted text takes part in deciding whether a match succeeds but is
//! never part of the matched span. An assertion over no fragments is
//! accepted.

use fragment::wrap;

/// Assert that the concatenation of `fragments` follows: `(?=...)`.
///
/// ```
/// assert_eq!(format!("kitty{}", humre::positive_lookahead(&["cat"])), "kitty(?=cat)");
/// ```
pub fn positive_lookahead<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(?=", fragments, ")")
}

/// Assert that the concatenation of `fragments` does not follow: `(?!...)`.
pub fn negative_lookahead<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(?!", fragments, ")")
}

/// Assert that the concatenation of `fragments` precedes: `(?<=...)`.
pub fn positive_lookbehind<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(?<=", fragments, ")")
}

/// Assert that the concatenation of `fragments` does not precede: `(?<!...)`.
pub fn negative_lookbehind<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    wrap("(?<!", fragments, ")")
}
