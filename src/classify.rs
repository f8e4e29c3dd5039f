//! Line classification — decides what each input line is before dispatch.
//!
//! A documentation comment line starts with `///` after optional leading
//! whitespace. A directive is an `@keyword` followed by whitespace and a
//! payload, anywhere inside such a line. Unknown keywords are not an error:
//! the line degrades to a plain passthrough comment.

use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*///").unwrap());

static RE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\w+)\s+").unwrap());

/// Recognized directive keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Function,
    Param,
    Return,
}

/// What a single input line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Not a documentation comment.
    Code,
    /// Documentation comment with no recognized directive.
    Comment,
    /// Documentation comment declaring a directive.
    Directive(Directive),
}

/// Classify one input line. Pure — no state, no side effects.
pub fn classify(line: &str) -> LineClass {
    if !RE_COMMENT.is_match(line) {
        return LineClass::Code;
    }
    if let Some(caps) = RE_DIRECTIVE.captures(line) {
        return match &caps[1] {
            "function" => LineClass::Directive(Directive::Function),
            "param" => LineClass::Directive(Directive::Param),
            "return" => LineClass::Directive(Directive::Return),
            // Unknown keyword — passthrough, never an error
            _ => LineClass::Comment,
        };
    }
    LineClass::Comment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_line() {
        assert_eq!(classify("function add(a, b) {"), LineClass::Code);
        assert_eq!(classify(""), LineClass::Code);
        assert_eq!(classify("// plain comment"), LineClass::Code);
    }

    #[test]
    fn plain_comment() {
        assert_eq!(classify("/// just some text"), LineClass::Comment);
        assert_eq!(classify("  /// indented text"), LineClass::Comment);
        assert_eq!(classify("\t///"), LineClass::Comment);
    }

    #[test]
    fn function_directive() {
        assert_eq!(
            classify("/// @function a.b.c"),
            LineClass::Directive(Directive::Function)
        );
    }

    #[test]
    fn param_directive() {
        assert_eq!(
            classify("  /// @param {int} x the value"),
            LineClass::Directive(Directive::Param)
        );
    }

    #[test]
    fn return_directive() {
        assert_eq!(
            classify("/// @return {bool} ok"),
            LineClass::Directive(Directive::Return)
        );
    }

    #[test]
    fn unknown_directive_is_comment() {
        assert_eq!(classify("/// @deprecated use add2"), LineClass::Comment);
        assert_eq!(classify("/// @example add(1, 2)"), LineClass::Comment);
    }

    #[test]
    fn directive_requires_payload() {
        // No whitespace-separated payload after the keyword
        assert_eq!(classify("/// @function"), LineClass::Comment);
        assert_eq!(classify("/// @param"), LineClass::Comment);
    }

    #[test]
    fn at_sign_in_prose() {
        // "@" followed by a word still looks like a directive attempt;
        // unrecognized keywords stay passthrough
        assert_eq!(classify("/// mail us @support anytime"), LineClass::Comment);
    }
}
