//! Mapping keys

use std::fmt;

/// Key of a mapping: a non-negative integer or a string.
///
/// On disk every key is a string. In memory, strings made only of ASCII
/// digits are held as [`Key::Int`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Int(u64),
    Str(String),
}

impl Key {
    /// Convert an on-disk key, turning digit-only strings into integers.
    ///
    /// Digit strings that overflow `u64` stay strings.
    pub fn parse(s: &str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = s.parse::<u64>() {
                return Key::Int(n);
            }
        }
        Key::Str(s.to_string())
    }

    pub fn as_int(&self) -> Option<u64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{}", n),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Key {
    fn from(v: u64) -> Self {
        Key::Int(v)
    }
}

impl From<u32> for Key {
    fn from(v: u32) -> Self {
        Key::Int(v as u64)
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        Key::Int(v as u64)
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Str(v)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Str(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        assert_eq!(Key::parse("3"), Key::Int(3));
        assert_eq!(Key::parse("0"), Key::Int(0));
        assert_eq!(Key::parse("cluster_group"), Key::from("cluster_group"));
        assert_eq!(Key::parse("-3"), Key::from("-3"));
        assert_eq!(Key::parse("3.0"), Key::from("3.0"));
        assert_eq!(Key::parse(""), Key::from(""));
        assert_eq!(Key::parse(" 3"), Key::from(" 3"));
    }

    #[test]
    fn parse_overflow_stays_string() {
        let big = "99999999999999999999999";
        assert_eq!(Key::parse(big), Key::from(big));
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(Key::Int(42).to_string(), "42");
        assert_eq!(Key::from("x").to_string(), "x");
    }
}
