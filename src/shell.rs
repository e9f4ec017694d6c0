//! POSIX shell quoting for exported option values
//!
//! The installer consumes the mapping as shell variables, so `env` output has
//! to survive `eval` in BusyBox ash. Single quotes preserve every byte except
//! the single quote itself, which is spliced as `'\''`.

/// Quote a value for safe use in a POSIX shell assignment.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        assert_eq!(quote("us us"), "'us us'");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_embedded_single_quote() {
        assert_eq!(quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn test_newlines_survive() {
        assert_eq!(quote("auto lo\niface lo\n"), "'auto lo\niface lo\n'");
    }

    #[test]
    fn test_double_quotes_and_dollars_are_inert() {
        assert_eq!(quote("say \"$HOME\""), "'say \"$HOME\"'");
    }
}
