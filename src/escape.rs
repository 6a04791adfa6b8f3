// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use regex::{self, Regex};

use error::{Error, Result};
use fragment::concat;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_]\w*$").unwrap();
}

/// Escape the regex metacharacters in the concatenation of `fragments`.
///
/// Whitespace is escaped too, so the result matches the concatenated text
/// literally even when compiled with `Flags::VERBOSE`. Escaping text that
/// contains neither metacharacters nor whitespace returns it unchanged.
///
/// ```
/// assert_eq!(humre::escape(&["1.5", "+2"]), r"1\.5\+2");
/// assert_eq!(humre::escape(&["a b"]), r"a\x{20}b");
/// ```
pub fn escape<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let escaped = regex::escape(&concat(fragments));
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '\t' => out.push_str(r"\t"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            c if c.is_whitespace() => out.push_str(&format!(r"\x{{{:X}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Check that `name` can name a capture group.
///
/// A valid name is a letter or underscore followed by any number of word
/// characters.
pub fn validate_identifier(name: &str) -> Result<()> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        trace!("rejected group name {:?}", name);
        Err(Error::InvalidIdentifier(name.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::iter;

    #[test]
    fn escape_of_nothing_is_empty() {
        assert_eq!(escape(iter::empty::<&str>()), "");
    }

    #[test]
    fn escape_escapes_every_metacharacter() {
        let result = escape(&[r".^$*+?{}[]\|()"]);

        assert_eq!(result, r"\.\^\$\*\+\?\{\}\[\]\\\|\(\)");
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape(&["hello", "_", "world42"]), "hello_world42");
    }

    #[test]
    fn escape_escapes_whitespace() {
        let result = escape(&["a b\tc\nd\re\u{a0}f"]);

        assert_eq!(result, r"a\x{20}b\tc\nd\re\x{A0}f");
    }

    #[test]
    fn escaped_text_matches_itself_when_verbose() {
        use compile::{compile, Flags};

        let text = "a b#c\td";
        let regex = compile(&[escape(&[text])], Flags::VERBOSE).expect("Unexpected compile error.");

        assert!(regex.is_match(text).expect("Unexpected match error."));
        assert!(!regex.is_match("ab#c\td").expect("Unexpected match error."));
    }

    #[test]
    fn identifier_starting_with_digit_is_error() {
        let result = validate_identifier("2yr");

        assert_matches!(result, Err(Error::InvalidIdentifier(ref name)) if name == "2yr");
    }

    #[test]
    fn identifier_with_trailing_digit_is_ok() {
        assert_matches!(validate_identifier("yr2"), Ok(()));
    }

    #[test]
    fn identifier_with_leading_underscore_is_ok() {
        assert_matches!(validate_identifier("_private"), Ok(()));
    }

    #[test]
    fn empty_identifier_is_error() {
        assert_matches!(validate_identifier(""), Err(Error::InvalidIdentifier(_)));
    }

    #[test]
    fn identifier_with_punctuation_is_error() {
        assert_matches!(validate_identifier("first-name"), Err(Error::InvalidIdentifier(_)));
    }

    quickcheck! {
        fn prop_escape_is_idempotent_for_plain_text(text: String) -> bool {
            let plain: String = text.chars().filter(|c| c.is_alphanumeric() || *c == '_').collect();

            escape(&[escape(&[plain.as_str()])]) == plain
        }
    }
}
