// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Repetition of fragments.
//!
//! Every function here appends a quantifier to the concatenation of its
//! fragments and fails with `Error::EmptyOperand` when there is nothing to
//! repeat. The bounded forms also validate their counts before looking at
//! the fragments.

use error::{Error, QuantityError, Result};
use fragment::concat_nonempty;

/// The bounds of a repetition, rendered as the `{...}` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bounds {
    Exactly(i64),
    Between(i64, i64),
    AtLeast(i64),
    AtMost(i64),
}

impl Bounds {
    pub(crate) fn exactly(quantity: i64) -> Result<Bounds> {
        check_count("quantity", quantity)?;
        Ok(Bounds::Exactly(quantity))
    }

    pub(crate) fn between(minimum: i64, maximum: i64) -> Result<Bounds> {
        check_count("minimum", minimum)?;
        check_count("maximum", maximum)?;
        if minimum > maximum {
            trace!("rejected range {{{},{}}}", minimum, maximum);
            return Err(QuantityError::Reversed { minimum, maximum }.into());
        }
        Ok(Bounds::Between(minimum, maximum))
    }

    pub(crate) fn at_least(minimum: i64) -> Result<Bounds> {
        check_count("minimum", minimum)?;
        Ok(Bounds::AtLeast(minimum))
    }

    pub(crate) fn at_most(maximum: i64) -> Result<Bounds> {
        check_count("maximum", maximum)?;
        Ok(Bounds::AtMost(maximum))
    }

    /// Append the quantifier for these bounds to `out`.
    pub(crate) fn push_suffix(&self, out: &mut String) {
        let suffix = match *self {
            Bounds::Exactly(n) => format!("{{{}}}", n),
            Bounds::Between(min, max) => format!("{{{},{}}}", min, max),
            Bounds::AtLeast(min) => format!("{{{},}}", min),
            Bounds::AtMost(max) => format!("{{,{}}}", max),
        };
        out.push_str(&suffix);
    }
}

fn check_count(name: &'static str, value: i64) -> Result<()> {
    if value < 0 {
        trace!("rejected {} of {}", name, value);
        return Err(QuantityError::Negative { name, value }.into());
    }
    Ok(())
}

fn suffixed<I, S>(fragments: I, suffix: &str) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = concat_nonempty(fragments)?;
    out.push_str(suffix);
    Ok(out)
}

fn bounded<I, S>(bounds: Result<Bounds>, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bounds = bounds?;
    let mut out = concat_nonempty(fragments)?;
    bounds.push_suffix(&mut out);
    Ok(out)
}

/// Make the concatenation of `fragments` optional: `X?`.
///
/// ```
/// assert_eq!(humre::optional(&["a"]).unwrap(), "a?");
/// ```
pub fn optional<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    suffixed(fragments, "?")
}

/// Match zero or more occurrences, greedily: `X*`.
pub fn zero_or_more<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    suffixed(fragments, "*")
}

/// Match zero or more occurrences, lazily: `X*?`.
pub fn zero_or_more_lazy<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    suffixed(fragments, "*?")
}

/// Match one or more occurrences, greedily: `X+`.
pub fn one_or_more<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    suffixed(fragments, "+")
}

/// Match one or more occurrences, lazily: `X+?`.
pub fn one_or_more_lazy<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    suffixed(fragments, "+?")
}

/// Match exactly `quantity` occurrences: `X{n}`.
///
/// ```
/// assert_eq!(humre::exactly(3, &["a"]).unwrap(), "a{3}");
/// ```
pub fn exactly<I, S>(quantity: i64, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    bounded(Bounds::exactly(quantity), fragments)
}

/// Match between `minimum` and `maximum` occurrences inclusive: `X{min,max}`.
pub fn between<I, S>(minimum: i64, maximum: i64, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    bounded(Bounds::between(minimum, maximum), fragments)
}

/// Match at least `minimum` occurrences: `X{min,}`.
pub fn at_least<I, S>(minimum: i64, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    bounded(Bounds::at_least(minimum), fragments)
}

/// Match at most `maximum` occurrences: `X{,max}`.
pub fn at_most<I, S>(maximum: i64, fragments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    bounded(Bounds::at_most(maximum), fragments)
}
