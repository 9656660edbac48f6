//! Backslash escapes in templates typed on the command line.

/// Interpret `\n`, `\t`, `\r`, `\\`, `\"`, `\0`, `\e` and `\a`
///
/// Any other backslash sequence is kept as written, including a trailing
/// lone backslash.
pub fn unescape(input: &str) -> String
{
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('0') => out.push('\0'),
            Some('e') => out.push('\u{1b}'),
            Some('a') => out.push('\u{7}'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
