// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Hands a composed pattern to the host regex engine.
//!
//! The host engine is `fancy_regex`, which understands the lookaround and
//! `(?P<name>...)` syntax the composition functions emit.

use fancy_regex::{Regex, RegexBuilder};

use error::Result;
use fragment::concat;

bitflags! {
    /// A set of compile flags.
    ///
    /// The bit values follow the conventional `re` flag numbering so that
    /// flag sets can be exchanged as plain integers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u32 {
        /// Match letters regardless of case.
        const IGNORECASE = 2;
        /// Locale-dependent classes. Carried but ignored.
        const LOCALE = 4;
        /// `^` and `$` match at line boundaries.
        const MULTILINE = 8;
        /// `.` matches newlines.
        const DOTALL = 16;
        /// Whitespace and `#` comments in the pattern are ignored.
        const VERBOSE = 64;
        /// Print debug information about the compiled pattern. Carried but
        /// ignored.
        const DEBUG = 128;
        /// Make `\w`, `\b`, `\d` and `\s` ASCII-only. Not supported by the
        /// host engine; carried but ignored.
        const ASCII = 256;
    }
}

impl Flags {
    /// Short alias for `ASCII`.
    pub const A: Flags = Flags::ASCII;
    /// Short alias for `IGNORECASE`.
    pub const I: Flags = Flags::IGNORECASE;
    /// Short alias for `LOCALE`.
    pub const L: Flags = Flags::LOCALE;
    /// Short alias for `MULTILINE`.
    pub const M: Flags = Flags::MULTILINE;
    /// Short alias for `DOTALL`.
    pub const S: Flags = Flags::DOTALL;
    /// Short alias for `VERBOSE`.
    pub const X: Flags = Flags::VERBOSE;
}

/// Compile the concatenation of `fragments` with the host regex engine.
///
/// `IGNORECASE`, `MULTILINE`, `DOTALL` and `VERBOSE` are applied; the other
/// flags have no counterpart in the host engine and are ignored.
///
/// ```
/// use humre::{compile, one_or_more, Flags};
///
/// let regex = compile(&[one_or_more(&["[a-z]"]).unwrap()], Flags::IGNORECASE).unwrap();
///
/// assert_eq!(regex.find("Hello").unwrap().unwrap().as_str(), "Hello");
/// ```
pub fn compile<I, S>(fragments: I, flags: Flags) -> Result<Regex>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pattern = concat(fragments);
    if flags.contains(Flags::VERBOSE) {
        pattern.insert_str(0, "(?x)");
    }
    debug!("compiling {:?} with {:?}", pattern, flags);

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(flags.contains(Flags::IGNORECASE))
        .multi_line(flags.contains(Flags::MULTILINE))
        .dot_matches_new_line(flags.contains(Flags::DOTALL))
        .build()?;
    Ok(regex)
}

#[cfg(test)]
mod test {
    use super::*;
    use error::Error;

    #[test]
    fn flags_combine_with_bitor() {
        let sut = Flags::IGNORECASE | Flags::MULTILINE;

        assert_eq!(sut.bits(), 10);
        assert!(sut.contains(Flags::IGNORECASE));
        assert!(!sut.contains(Flags::DOTALL));
    }

    #[test]
    fn flags_default_is_empty() {
        let sut: Flags = Default::default();

        assert!(sut.is_empty());
        assert_eq!(sut, Flags::empty());
    }

    #[test]
    fn flags_keep_unknown_bits_when_retained() {
        let sut = Flags::from_bits_retain(2 | 1024);

        assert!(sut.contains(Flags::IGNORECASE));
        assert_eq!(sut.bits(), 1026);
        assert_eq!(Flags::from_bits(1024), None);
    }

    #[test]
    fn short_aliases_equal_long_names() {
        assert_eq!(Flags::A, Flags::ASCII);
        assert_eq!(Flags::I, Flags::IGNORECASE);
        assert_eq!(Flags::L, Flags::LOCALE);
        assert_eq!(Flags::M, Flags::MULTILINE);
        assert_eq!(Flags::S, Flags::DOTALL);
        assert_eq!(Flags::X, Flags::VERBOSE);
    }

    #[test]
    fn short_aliases_apply_when_compiling() {
        let regex = compile(&["^b"], Flags::I | Flags::M).expect("Unexpected compile error.");

        assert!(regex.is_match("a\nB").expect("Unexpected match error."));
    }

    #[test]
    fn flags_debug_names_members() {
        let sut = Flags::DOTALL | Flags::VERBOSE;

        assert_eq!(format!("{:?}", sut), "Flags(DOTALL | VERBOSE)");
    }

    #[test]
    fn compile_concatenates_fragments() {
        let regex = compile(&["ab", "c"], Flags::empty()).expect("Unexpected compile error.");

        assert!(regex.is_match("xabcx").expect("Unexpected match error."));
    }

    #[test]
    fn compile_applies_ignorecase() {
        let regex = compile(&["abc"], Flags::IGNORECASE).expect("Unexpected compile error.");

        assert!(regex.is_match("ABC").expect("Unexpected match error."));
    }

    #[test]
    fn compile_applies_verbose() {
        let regex = compile(&["a b c"], Flags::VERBOSE).expect("Unexpected compile error.");

        assert!(regex.is_match("abc").expect("Unexpected match error."));
    }

    #[test]
    fn compile_ignores_unsupported_flags() {
        let result = compile(&["abc"], Flags::ASCII | Flags::LOCALE | Flags::DEBUG);

        assert!(result.is_ok());
    }

    #[test]
    fn compile_of_malformed_pattern_is_error() {
        let result = compile(&["(abc"], Flags::empty());

        assert_matches!(result, Err(Error::Compile(_)));
    }
}
