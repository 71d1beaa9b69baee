//! Identifiers for constituents in generated code.
//!
//! A constituent's human-readable name is mapped to a C++ identifier by lower-casing it and substituting spaces and
//! hyphens:
//!
//! | source | identifier |
//! |--------|------------|
//! | ` `    | `_`        |
//! | `-`    | `__`       |
//!
//! So `"Acetic Acid"` becomes `acetic_acid` while `"acetic-acid"` becomes `acetic__acid`. The mapping is not
//! injective in general (`"a b"` and `"a_b"` collide); [`find_collisions`] reports such pairs so validation can
//! reject or warn about them.

use std::collections::HashMap;
use std::fmt;

/// A normalized constituent identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Normalize a display name.
    pub fn from_name(name: &str) -> Self {
        let mut ident = String::with_capacity(name.len());
        for ch in name.chars().flat_map(char::to_lowercase) {
            match ch {
                ' ' => ident.push('_'),
                '-' => ident.push_str("__"),
                other => ident.push(other),
            }
        }
        Self(ident)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is usable as a C++ variable name.
    pub fn is_valid_cpp(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) if first == '_' || first.is_ascii_alphabetic() => {
                chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
            }
            _ => false,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two distinct names that normalize to the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub identifier: Identifier,
    pub first: String,
    pub second: String,
}

/// Find pairs of distinct names sharing an identifier.
///
/// Identical names are not collisions (they are duplicates, reported separately). Each later name is paired with
/// the first name that claimed the identifier.
pub fn find_collisions<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Collision> {
    let mut claimed: HashMap<Identifier, &str> = HashMap::new();
    let mut collisions = Vec::new();

    for name in names {
        let identifier = Identifier::from_name(name);
        match claimed.get(&identifier) {
            Some(first) if *first != name => collisions.push(Collision {
                identifier,
                first: first.to_string(),
                second: name.to_string(),
            }),
            Some(_) => {}
            None => {
                claimed.insert(identifier, name);
            }
        }
    }

    collisions
}
