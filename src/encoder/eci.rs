//! ECI designators for character sets (ISO/IEC 18004 section 5.3.1.1)
//!
//! The registry is a constant table, so lookups need no initialization and are
//! safe from any thread. Names are matched exactly. Some aliases appear under
//! more than one designator; lookup by name returns the lowest one.

use std::fmt;

/// A character set and the ECI designator that selects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterSetEci {
    value: u32,
    encoding_name: &'static str,
}

const CHARACTER_SETS: &[(u32, &[&str])] = &[
    (0, &["Cp437"]),
    (1, &["ISO8859_1", "ISO-8859-1"]),
    (2, &["Cp437"]),
    (3, &["ISO8859_1", "ISO-8859-1"]),
    (4, &["ISO8859_2", "ISO-8859-2"]),
    (5, &["ISO8859_3", "ISO-8859-3"]),
    (6, &["ISO8859_4", "ISO-8859-4"]),
    (7, &["ISO8859_5", "ISO-8859-5"]),
    (8, &["ISO8859_6", "ISO-8859-6"]),
    (9, &["ISO8859_7", "ISO-8859-7"]),
    (10, &["ISO8859_8", "ISO-8859-8"]),
    (11, &["ISO8859_9", "ISO-8859-9"]),
    (13, &["ISO8859_11", "ISO-8859-11"]),
    (15, &["ISO8859_13", "ISO-8859-13"]),
    (16, &["ISO8859_14", "ISO-8859-14"]),
    (17, &["ISO8859_15", "ISO-8859-15"]),
    (18, &["ISO8859_16", "ISO-8859-16"]),
    (20, &["SJIS", "Shift_JIS"]),
];

impl CharacterSetEci {
    /// Entry registered under `name`, or `None` for names without a designator.
    pub fn by_name(name: &str) -> Option<Self> {
        CHARACTER_SETS
            .iter()
            .find(|(_, names)| names.iter().any(|n| *n == name))
            .map(|&(value, names)| Self {
                value,
                encoding_name: names[0],
            })
    }

    /// Entry for a designator value, or `None` if unassigned here.
    pub fn for_value(value: u32) -> Option<Self> {
        CHARACTER_SETS
            .iter()
            .find(|(v, _)| *v == value)
            .map(|&(value, names)| Self {
                value,
                encoding_name: names[0],
            })
    }

    /// ECI designator
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Canonical name of the character set
    pub fn encoding_name(&self) -> &'static str {
        self.encoding_name
    }
}

impl fmt::Display for CharacterSetEci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ECI {})", self.encoding_name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_designator() {
        let dashed = CharacterSetEci::by_name("ISO-8859-1").unwrap();
        let underscored = CharacterSetEci::by_name("ISO8859_1").unwrap();
        assert_eq!(dashed.value(), 1);
        assert_eq!(dashed, underscored);
        assert_eq!(dashed.encoding_name(), "ISO8859_1");
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(CharacterSetEci::by_name("Cp437").unwrap().value(), 0);
        assert_eq!(CharacterSetEci::by_name("ISO-8859-2").unwrap().value(), 4);
        assert_eq!(CharacterSetEci::by_name("ISO8859_9").unwrap().value(), 11);
        assert_eq!(CharacterSetEci::by_name("ISO-8859-11").unwrap().value(), 13);
        assert_eq!(CharacterSetEci::by_name("ISO8859_16").unwrap().value(), 18);
        assert_eq!(CharacterSetEci::by_name("Shift_JIS").unwrap().value(), 20);
        assert_eq!(CharacterSetEci::by_name("SJIS").unwrap().value(), 20);
    }

    #[test]
    fn test_unknown_name_is_not_an_error() {
        assert_eq!(CharacterSetEci::by_name("UTF-8"), None);
        assert_eq!(CharacterSetEci::by_name("iso-8859-1"), None);
        assert_eq!(CharacterSetEci::by_name(""), None);
    }

    #[test]
    fn test_lookup_by_value() {
        assert_eq!(CharacterSetEci::for_value(3).unwrap().encoding_name(), "ISO8859_1");
        assert_eq!(CharacterSetEci::for_value(2).unwrap().encoding_name(), "Cp437");
        assert_eq!(CharacterSetEci::for_value(12), None);
        assert_eq!(CharacterSetEci::for_value(21), None);
    }

    #[test]
    fn test_display() {
        let sjis = CharacterSetEci::for_value(20).unwrap();
        assert_eq!(sjis.to_string(), "SJIS (ECI 20)");
    }
}
