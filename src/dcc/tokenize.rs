//! Whitespace tokenizer with double-quoted-field support, for DCC's
//! `"quoted filename"` convention.

/// Split a DCC body into whitespace-separated tokens, honoring
/// double-quoted segments (with `\"` and `\\` escapes inside them).
pub fn tokenize(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = s.trim().chars().peekable();

    while chars.peek().is_some() {
        while chars.peek() == Some(&' ') {
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }

        let mut token = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => match chars.peek() {
                        Some('"') | Some('\\') => token.push(chars.next().unwrap()),
                        _ => token.push('\\'),
                    },
                    '"' => break,
                    c => token.push(c),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c == ' ' {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }

        tokens.push(token);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("a b  c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_quoted_space() {
        assert_eq!(
            tokenize("DCC SEND \"my file.txt\" 123 456"),
            vec!["DCC", "SEND", "my file.txt", "123", "456"]
        );
    }

    #[test]
    fn unescapes_quote_inside_quotes() {
        assert_eq!(tokenize("\"a \\\"b\\\" c\""), vec!["a \"b\" c"]);
    }
}
