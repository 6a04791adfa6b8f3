// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for writing regular expressions as nested function calls.
//!
//! Each function names a regex construct (a group, a quantifier, a
//! lookaround, an anchor or a character class) and returns the pattern text
//! for it. The arguments are fragments of pattern text that are
//! concatenated in order, so small fragments compose into larger ones:
//!
//! ```
//! use humre::*;
//!
//! let phone = starts_and_ends_with(vec![
//!     exactly(3, &[DIGIT]).unwrap(),
//!     String::from("-"),
//!     exactly(4, &[DIGIT]).unwrap(),
//! ]);
//!
//! assert_eq!(phone, r"^\d{3}-\d{4}$");
//! ```
//!
//! The functions only produce text. Pass the result to `compile` (or to any
//! engine that accepts Perl-style syntax) to match with it.
//!
//! Functions that can reject their arguments return `Result<String>`:
//! quantifiers and character classes need a non-empty operand, counts must
//! not be negative and group names must be identifiers.

#![deny(missing_docs)]

extern crate fancy_regex;
extern crate regex;

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

mod anchor;
mod compile;
mod error;
mod escape;
mod fragment;
mod group;
mod lookaround;
mod quantifier;

pub mod constants;

pub use anchor::{chars, either, ends_with, nonchars, starts_and_ends_with, starts_with};
pub use compile::{compile, Flags};
pub use constants::*;
pub use error::{Error, QuantityError, Result};
pub use escape::escape;
pub use group::{
    group, group_at_least, group_at_most, group_between, group_chars, group_either,
    group_exactly, group_nonchars, named_group, noncapturing_group, one_or_more_group,
    optional_group, zero_or_more_group,
};
pub use lookaround::{
    negative_lookahead, negative_lookbehind, positive_lookahead, positive_lookbehind,
};
pub use quantifier::{
    at_least, at_most, between, exactly, one_or_more, one_or_more_lazy, optional, zero_or_more,
    zero_or_more_lazy,
};
