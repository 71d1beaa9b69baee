//! Insertion-ordered concentration maps.

use super::real::Real;

/// Mapping from constituent name to analytical concentration.
///
/// Entries keep the order in which names were first inserted so generated sources are reproducible for identical
/// descriptions. Re-inserting a name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConcentrationMap {
    entries: Vec<(String, Real)>,
}

impl ConcentrationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, concentration: Real) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, value)) => *value = concentration,
            None => self.entries.push((name, concentration)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Real> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, value)| value)
    }

    pub fn entries(&self) -> &[(String, Real)] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
