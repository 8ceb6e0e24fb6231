// Toolbox - core/contacts.rs
//
// In-memory contact book: name -> phone, iterated in insertion order.
// Core layer: no I/O. Owned by the REPL for one session and never persisted.

use crate::util::error::CommandError;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

// =============================================================================
// Phone number
// =============================================================================

/// A validated phone number: decimal digits (any Unicode `Nd` digit) with an
/// optional single leading `+`.
///
/// No length bound and no country-code semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate `raw`, returning `CommandError::InvalidPhone` if it does not
    /// match `^\+?\d+$`.
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"^\+?\d+$").expect("phone number regex is valid")
        });
        if re.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(CommandError::InvalidPhone {
                phone: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Contact store
// =============================================================================

/// Mapping from case-sensitive contact name to phone number.
///
/// Overwriting an existing name keeps its original position, so listings
/// always follow first-insertion order.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<(String, PhoneNumber)>,
    index: HashMap<String, usize>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`.
    pub fn upsert(&mut self, name: &str, phone: PhoneNumber) {
        match self.index.get(name) {
            Some(&pos) => self.contacts[pos].1 = phone,
            None => {
                self.index.insert(name.to_string(), self.contacts.len());
                self.contacts.push((name.to_string(), phone));
            }
        }
    }

    /// Overwrite the phone of an existing contact.
    ///
    /// Leaves the store untouched and returns `NotFound` if `name` is absent.
    pub fn update(&mut self, name: &str, phone: PhoneNumber) -> Result<(), CommandError> {
        match self.index.get(name) {
            Some(&pos) => {
                self.contacts[pos].1 = phone;
                Ok(())
            }
            None => Err(CommandError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PhoneNumber> {
        self.index.get(name).map(|&pos| &self.contacts[pos].1)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// `(name, phone)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PhoneNumber)> {
        self.contacts.iter().map(|(n, p)| (n.as_str(), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::parse(s).unwrap()
    }

    #[test]
    fn test_phone_accepts_digits_and_leading_plus() {
        assert_eq!(phone("123").as_str(), "123");
        assert_eq!(phone("+3800000").as_str(), "+3800000");
        assert_eq!(phone("0").to_string(), "0");
        assert_eq!(phone("١٢٣").as_str(), "١٢٣");
        assert_eq!(phone("+١٢٣").as_str(), "+١٢٣");
    }

    #[test]
    fn test_phone_rejects_invalid() {
        for raw in ["", "+", "abc", "12a3", "++123", "1+23", "123+", " 123", "12 3", "-123", "+-1", "½"] {
            assert!(
                matches!(PhoneNumber::parse(raw), Err(CommandError::InvalidPhone { .. })),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_upsert_overwrite_keeps_position() {
        let mut store = ContactStore::new();
        store.upsert("Alice", phone("1"));
        store.upsert("Bob", phone("2"));
        store.upsert("Alice", phone("3"));
        let listed: Vec<_> = store.iter().map(|(n, p)| (n, p.as_str())).collect();
        assert_eq!(listed, vec![("Alice", "3"), ("Bob", "2")]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let mut store = ContactStore::new();
        store.upsert("Alice", phone("1"));
        let result = store.update("Bob", phone("2"));
        assert_eq!(
            result,
            Err(CommandError::NotFound {
                name: "Bob".to_string()
            })
        );
        assert_eq!(store.len(), 1);
        assert!(store.get("Bob").is_none());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut store = ContactStore::new();
        store.upsert("alice", phone("1"));
        assert!(store.get("Alice").is_none());
        assert_eq!(store.get("alice").map(PhoneNumber::as_str), Some("1"));
    }
}
