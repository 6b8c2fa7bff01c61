//! Tokenizer for raw annotation strings of the form `key:"value" other:"value"`.

use std::borrow::Cow;

/// Iterator over the `(key, value)` pairs of an annotation string.
///
/// Scanning stops at the first malformed pair.
pub struct TagPairs<'a> {
    rest: &'a str,
}

/// Iterate the pairs of `annotation` in order.
pub fn pairs(annotation: &str) -> TagPairs<'_> {
    TagPairs { rest: annotation }
}

/// Value of the first pair named `key`, if any.
pub fn lookup<'a>(annotation: &'a str, key: &str) -> Option<Cow<'a, str>> {
    pairs(annotation).find(|(k, _)| *k == key).map(|(_, v)| v)
}

impl<'a> Iterator for TagPairs<'a> {
    type Item = (&'a str, Cow<'a, str>);

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.rest.trim_start_matches(' ');
        if tag.is_empty() {
            self.rest = tag;
            return None;
        }

        let bytes = tag.as_bytes();
        let key_len = bytes
            .iter()
            .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
            .unwrap_or(bytes.len());
        if key_len == 0
            || key_len + 1 >= bytes.len()
            || bytes[key_len] != b':'
            || bytes[key_len + 1] != b'"'
        {
            self.rest = "";
            return None;
        }
        let key = &tag[..key_len];

        // Opening quote is at value_start - 1.
        let value_start = key_len + 2;
        let mut i = value_start;
        let mut escaped = false;
        while i < bytes.len() && bytes[i] != b'"' {
            if bytes[i] == b'\\' {
                escaped = true;
                i += 1;
            }
            i += 1;
        }
        if i >= bytes.len() {
            self.rest = "";
            return None;
        }

        let raw = &tag[value_start..i];
        self.rest = &tag[i + 1..];
        let value = if escaped {
            Cow::Owned(unescape(raw))
        } else {
            Cow::Borrowed(raw)
        };
        Some((key, value))
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
