//! IRC-specific ASCII case folding: `{|}^` fold to `[]\~` in addition to
//! the usual `A-Z` -> `a-z`, per RFC 1459's channel-name casemapping.

/// Lowercase `s` under IRC casemapping rules rather than ASCII/locale rules.
pub fn irc_to_lower(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '[' => '{',
            ']' => '}',
            '\\' => '|',
            '~' => '^',
            'A'..='Z' => c.to_ascii_lowercase(),
            _ => c,
        })
        .collect()
}

/// Compare `a` and `b` for equality under IRC casemapping rules.
pub fn irc_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.chars().zip(b.chars()).all(|(ca, cb)| {
        let ca_lower = match ca {
            '[' => '{',
            ']' => '}',
            '\\' => '|',
            '~' => '^',
            'A'..='Z' => ca.to_ascii_lowercase(),
            _ => ca,
        };
        let cb_lower = match cb {
            '[' => '{',
            ']' => '}',
            '\\' => '|',
            '~' => '^',
            'A'..='Z' => cb.to_ascii_lowercase(),
            _ => cb,
        };
        ca_lower == cb_lower
    })
}
