//! Non-ideality corrections applied by both the reference generator and the generated test.

use std::fmt;

/// Which non-ideality corrections are enabled.
///
/// The selector is a bitmask: 1 = Debye-Hückel, 2 = Onsager-Fuoss, 4 = viscosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Corrections {
    pub debye_huckel: bool,
    pub onsager_fuoss: bool,
    pub viscosity: bool,
}

impl Corrections {
    pub const DEBYE_HUCKEL: u8 = 1;
    pub const ONSAGER_FUOSS: u8 = 2;
    pub const VISCOSITY: u8 = 4;

    pub fn none() -> Self {
        Self::default()
    }

    /// Decode a selector; bits above 4 are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            debye_huckel: bits & Self::DEBYE_HUCKEL != 0,
            onsager_fuoss: bits & Self::ONSAGER_FUOSS != 0,
            viscosity: bits & Self::VISCOSITY != 0,
        }
    }

    pub fn bits(self) -> u8 {
        let mut bits = 0;
        if self.debye_huckel {
            bits |= Self::DEBYE_HUCKEL;
        }
        if self.onsager_fuoss {
            bits |= Self::ONSAGER_FUOSS;
        }
        if self.viscosity {
            bits |= Self::VISCOSITY;
        }
        bits
    }

    /// Flags in selector order (Debye-Hückel, Onsager-Fuoss, viscosity).
    pub fn flags(self) -> [bool; 3] {
        [self.debye_huckel, self.onsager_fuoss, self.viscosity]
    }
}

impl fmt::Display for Corrections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled: Vec<&str> = [
            (self.debye_huckel, "Debye-Hückel"),
            (self.onsager_fuoss, "Onsager-Fuoss"),
            (self.viscosity, "viscosity"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        if enabled.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&enabled.join(", "))
        }
    }
}
