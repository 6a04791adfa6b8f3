// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt::{self, Display};
use std::result;

use fancy_regex;

/// The error type for the composition functions.
#[derive(Debug, Fail)]
pub enum Error {
    /// A numeric argument to a quantifier was negative, or a minimum was
    /// greater than its maximum.
    #[fail(display = "invalid quantity: {}.", _0)]
    InvalidQuantity(QuantityError),

    /// The fragments passed to an operation that needs content concatenated
    /// to the empty string.
    #[fail(display = "the fragments must contain at least one non-blank value.")]
    EmptyOperand,

    /// A group name was not a letter or underscore followed by word characters.
    #[fail(display = "invalid group name {:?}: must contain only letters, numbers and underscore and not start with a number.",
           _0)]
    InvalidIdentifier(String),

    /// The host regex engine rejected the composed pattern.
    #[fail(display = "the pattern could not be compiled.")]
    Compile(#[cause] fancy_regex::Error),
}

/// The reason a quantity was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// The argument `name` ("quantity", "minimum" or "maximum") was negative.
    Negative {
        /// The name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The minimum of a bounded repetition was greater than its maximum.
    Reversed {
        /// The requested minimum.
        minimum: i64,
        /// The requested maximum.
        maximum: i64,
    },
}

impl Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuantityError::Negative { name, value } => {
                write!(f, "{} must be a non-negative integer, not {}", name, value)
            }
            QuantityError::Reversed { minimum, maximum } => write!(
                f,
                "minimum ({}) is greater than maximum ({})",
                minimum, maximum
            ),
        }
    }
}

impl From<QuantityError> for Error {
    fn from(err: QuantityError) -> Error {
        Error::InvalidQuantity(err)
    }
}

impl From<fancy_regex::Error> for Error {
    fn from(err: fancy_regex::Error) -> Error {
        Error::Compile(err)
    }
}

/// A specialized Result type for the composition functions.
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_quantity_display_names_argument() {
        let sut: Error = QuantityError::Negative { name: "maximum", value: -3 }.into();

        assert_eq!(
            sut.to_string(),
            "invalid quantity: maximum must be a non-negative integer, not -3."
        );
    }

    #[test]
    fn reversed_quantity_display_gives_both_bounds() {
        let sut: Error = QuantityError::Reversed { minimum: 5, maximum: 2 }.into();

        assert_eq!(
            sut.to_string(),
            "invalid quantity: minimum (5) is greater than maximum (2)."
        );
    }

    #[test]
    fn quantity_errors_convert_to_invalid_quantity() {
        let sut: Error = QuantityError::Reversed { minimum: 1, maximum: 0 }.into();

        assert_matches!(sut, Error::InvalidQuantity(QuantityError::Reversed { .. }));
    }
}
