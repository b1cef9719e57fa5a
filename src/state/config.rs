//! Persisted capability paths.
//!
//! [`PersistentConfig`] is an ordered key → path map stored as flat
//! `key=value` text. The format follows the usual properties conventions:
//! `#` and `!` start comments, `:` is accepted as a separator, and
//! backslash escapes the characters that would otherwise be special.
//! Characters outside printable ASCII are written as `\uXXXX` UTF-16 units.

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::Chars;

use chrono::Utc;

/// Ordered mapping of settings key to last resolved path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistentConfig {
    entries: BTreeMap<String, String>,
}

impl PersistentConfig {
    /// Get a saved path. Empty values count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Save a path under `key`, replacing any previous value.
    pub fn set(&mut self, key: &str, path: &str) {
        self.entries.insert(key.to_string(), path.to_string());
    }

    /// Remove a key. Returns the previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Parse properties text. Malformed lines become keys with empty values.
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();
        let mut logical = String::new();

        for raw in content.lines() {
            let line = raw.trim_start();
            if logical.is_empty()
                && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
            {
                continue;
            }

            // An odd number of trailing backslashes continues the line.
            let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
            if trailing % 2 == 1 {
                logical.push_str(&line[..line.len() - 1]);
                continue;
            }
            logical.push_str(line);

            let (key, value) = split_entry(&logical);
            config.entries.insert(key, value);
            logical.clear();
        }

        if !logical.is_empty() {
            let (key, value) = split_entry(&logical);
            config.entries.insert(key, value);
        }
        config
    }

    /// Render as properties text with a timestamp header.
    pub fn render(&self) -> String {
        let mut out = format!("#{}\n", Utc::now().format("%a %b %d %H:%M:%S UTC %Y"));
        for (key, value) in &self.entries {
            out.push_str(&escape(key, true));
            out.push('=');
            out.push_str(&escape(value, false));
            out.push('\n');
        }
        out
    }
}

/// Split a logical line at the first unescaped `=`, `:` or whitespace.
fn split_entry(line: &str) -> (String, String) {
    let mut key = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(decoded) = read_escape(&mut chars) {
                    key.push(decoded);
                }
            }
            '=' | ':' => break,
            c if c.is_whitespace() => {
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                if matches!(chars.peek(), Some('=') | Some(':')) {
                    chars.next();
                }
                break;
            }
            c => key.push(c),
        }
    }

    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }

    let mut value = String::new();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(decoded) = read_escape(&mut chars) {
                value.push(decoded);
            }
        } else {
            value.push(c);
        }
    }

    (key, value)
}

/// Decode the escape after a backslash. `\u` takes four hex digits and may
/// be followed by the low half of a surrogate pair. Malformed units are dropped.
fn read_escape(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let c = chars.next()?;
    if c != 'u' {
        return Some(unescape_char(c));
    }

    let unit = read_hex_unit(chars)?;
    if !(0xD800..0xDC00).contains(&unit) {
        return Some(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    let mut ahead = chars.clone();
    let low = match (ahead.next(), ahead.next()) {
        (Some('\\'), Some('u')) => read_hex_unit(&mut ahead),
        _ => None,
    };
    match low.and_then(|low| char::decode_utf16([unit, low]).next()?.ok()) {
        Some(decoded) => {
            *chars = ahead;
            Some(decoded)
        }
        None => Some(char::REPLACEMENT_CHARACTER),
    }
}

fn read_hex_unit(chars: &mut Peekable<Chars<'_>>) -> Option<u16> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(&digits, 16).ok()
}

fn unescape_char(c: char) -> char {
    match c {
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        'f' => '\x0c',
        other => other,
    }
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' | '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            c if !(' '..='~').contains(&c) => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
            c => out.push(c),
        }
    }
    out
}
