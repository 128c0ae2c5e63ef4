//! Indentation formatter
//!
//! Indents every line of a fragment by one unit. Nesting is expressed by
//! applying it once per enclosing block, never by passing a depth.

/// One nesting level in emitted Python
pub const INDENT_UNIT: &str = "    ";

/// Indent every line of `fragment` by [`INDENT_UNIT`].
pub fn indent(fragment: &str) -> String {
    indent_with(fragment, INDENT_UNIT)
}

/// Prefix every line of `fragment`, terminator included, with `unit`.
///
/// A trailing line without a terminator is indented too. An empty fragment
/// stays empty.
pub fn indent_with(fragment: &str, unit: &str) -> String {
    let lines = fragment.split_inclusive('\n');
    let mut out = String::with_capacity(fragment.len() + unit.len() * lines.clone().count());
    for line in lines {
        out.push_str(unit);
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_each_line() {
        assert_eq!(indent("a = 1\nb = 2\n"), "    a = 1\n    b = 2\n");
    }

    #[test]
    fn test_indent_empty() {
        assert_eq!(indent(""), "");
    }

    #[test]
    fn test_repeated_application_nests() {
        let inner = indent("x = 0\n");
        let outer = indent(&format!("while x:\n{}", inner));

        assert_eq!(outer, "    while x:\n        x = 0\n");
    }

    #[test]
    fn test_unterminated_last_line() {
        assert_eq!(indent_with("a\nb", "\t"), "\ta\n\tb");
    }

    #[test]
    fn test_blank_lines_are_indented() {
        assert_eq!(indent_with("\n", "--"), "--\n");
    }
}
