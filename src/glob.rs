//! Shell-glob to regex translation
//!
//! Supports `*`, `?` and bracket classes (`[abc]`, `[a-z]`, `[!abc]`). The
//! translated pattern is anchored at the start of the key and left open at
//! the end, so `ip` matches `ip addr` but not `ship`.

/// Translate a shell-style wildcard pattern into regex source
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        i += 1;

        match ch {
            '*' => {
                // Runs of stars are equivalent to one
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                regex.push_str(".*");
            }
            '?' => regex.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut regex, &chars[i..end]);
                    i = end + 1;
                }
                // Unterminated class is a literal bracket
                None => regex.push_str(r"\["),
            },
            _ => push_literal(&mut regex, ch),
        }
    }

    regex
}

/// Index of the `]` closing a class whose body starts at `start`
///
/// A `]` directly after `[` or `[!` belongs to the class body.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

/// Emit a class body, with ranges spelled out and every other member literal
///
/// In `x--y` the `x` stands alone and `--y` is the range `-`..`y`. A
/// descending range is kept as written and fails to compile.
fn push_class(regex: &mut String, body: &[char]) {
    regex.push('[');

    let body = match body.split_first() {
        Some((&'!', rest)) => {
            regex.push('^');
            rest
        }
        _ => body,
    };

    let mut k = 0;
    while k < body.len() {
        let is_range = body.get(k + 1) == Some(&'-')
            && k + 2 < body.len()
            && !(body[k + 2] == '-' && k + 3 < body.len());

        push_class_member(regex, body[k]);
        if is_range {
            regex.push('-');
            push_class_member(regex, body[k + 2]);
            k += 3;
        } else {
            k += 1;
        }
    }

    regex.push(']');
}

fn push_class_member(regex: &mut String, ch: char) {
    if matches!(ch, '\\' | '[' | ']' | '&' | '~' | '^' | '-') {
        regex.push('\\');
    }
    regex.push(ch);
}

fn push_literal(regex: &mut String, ch: char) {
    let mut buf = [0u8; 4];
    regex.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
}
