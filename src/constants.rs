// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Ready-made fragments for common classes and escaped metacharacters.
//!
//! The extended letter classes cover ASCII letters plus the Latin-1 range
//! `À` (U+00C0) to `ÿ` (U+00FF). Note that `A-z` also spans the six
//! punctuation characters between `Z` and `a`.

/// Any decimal digit.
pub const DIGIT: &str = r"\d";
/// Any word character.
pub const WORD: &str = r"\w";
/// Any whitespace character.
pub const WHITESPACE: &str = r"\s";
/// Any character that is not a decimal digit.
pub const NONDECIMAL: &str = r"\D";
/// Any character that is not a word character.
pub const NONWORD: &str = r"\W";
/// Any character that is not whitespace.
pub const NONWHITESPACE: &str = r"\S";

/// A word boundary.
pub const BOUNDARY: &str = r"\b";
/// An inline flag making the rest of the pattern case-insensitive.
pub const IGNORE_DIRECTIVE: &str = "(?i)";

/// A letter, including accented Latin-1 letters.
pub const LETTER: &str = "[A-zÀ-ÿ]";
/// Anything but a letter.
pub const NONLETTER: &str = "[^A-zÀ-ÿ]";
/// An uppercase letter.
pub const UPPERCASE: &str = "[A-ZÀ-Ÿ]";
/// Anything but an uppercase letter.
pub const NONUPPERCASE: &str = "[^A-ZÀ-Ÿ]";
/// A lowercase letter.
pub const LOWERCASE: &str = "[a-zà-ÿ]";
/// Anything but a lowercase letter.
pub const NONLOWERCASE: &str = "[^a-zà-ÿ]";
/// A letter or a decimal digit.
pub const ALPHANUMERIC: &str = "[A-zÀ-ÿ0-9]";
/// Anything but a letter or a decimal digit.
pub const NONALPHANUMERIC: &str = "[^A-zÀ-ÿ0-9]";
/// A hexadecimal digit.
pub const HEXADECIMAL: &str = "[0-9A-f]";
/// Anything but a hexadecimal digit.
pub const NONHEXADECIMAL: &str = "[^0-9A-f]";

/// A signed number with comma thousands separators and a period decimal
/// point, e.g. `-1,200.3456789`.
pub const NUMBER: &str = r"(?:\+|-)?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?";
/// A signed number with period thousands separators and a comma decimal
/// point, e.g. `-1.200,3456789`.
pub const EURO_NUMBER: &str = r"(?:\+|-)?(?:\d{1,3}(?:\.\d{3})+|\d+)(?:,\d+)?";

/// Anything, as little as possible.
pub const ANYTHING: &str = ".*?";
/// Anything, as much as possible.
pub const EVERYTHING: &str = ".*";
/// At least one character, as much as possible.
pub const GREEDY_SOMETHING: &str = ".+";
/// At least one character, as little as possible.
pub const SOMETHING: &str = ".+?";
/// Any single character.
pub const ANYCHAR: &str = ".";

/// A literal `.`.
pub const PERIOD: &str = r"\.";
/// A literal `^`.
pub const CARET: &str = r"\^";
/// A literal `$`.
pub const DOLLAR_SIGN: &str = r"\$";
/// A literal `*`.
pub const ASTERISK: &str = r"\*";
/// A literal `+`.
pub const PLUS_SIGN: &str = r"\+";
/// A literal `?`.
pub const QUESTION_MARK: &str = r"\?";
/// A literal `{`.
pub const OPEN_BRACE: &str = r"\{";
/// A literal `}`.
pub const CLOSE_BRACE: &str = r"\}";
/// A literal `[`.
pub const OPEN_BRACKET: &str = r"\[";
/// A literal `]`.
pub const CLOSE_BRACKET: &str = r"\]";
/// A literal `\`.
pub const BACKSLASH: &str = r"\\";
/// A literal `|`.
pub const PIPE: &str = r"\|";
/// A literal `(`.
pub const OPEN_PAREN: &str = r"\(";
/// A literal `(`.
pub const OPEN_PARENTHESIS: &str = OPEN_PAREN;
/// A literal `)`.
pub const CLOSE_PAREN: &str = r"\)";
/// A literal `)`.
pub const CLOSE_PARENTHESIS: &str = CLOSE_PAREN;

/// A newline.
pub const NEWLINE: &str = r"\n";
/// A tab.
pub const TAB: &str = r"\t";
/// A single quote.
pub const QUOTE: &str = r"\'";
/// A double quote.
pub const DOUBLE_QUOTE: &str = r#"\""#;
