//! Parse the result file written by the reference generator.
//!
//! The grammar is strictly line-based:
//!
//! ```text
//! results    := bge blank eigenzone*
//! bge        := pH conductivity ionic-strength buffer-capacity
//! eigenzone  := mobility uEMD a2t pH conductivity blank
//! ```
//!
//! with one number per line and nothing after the final blank line. Any deviation is a
//! [`ReferenceError::BadFormat`] naming the line and the expectation that failed.

use crate::model::Real;

use super::ReferenceError;

/// Properties of the background electrolyte.
#[derive(Debug, Clone, PartialEq)]
pub struct BgeProperties {
    pub ph: Real,
    pub conductivity: Real,
    pub ionic_strength: Real,
    pub buffer_capacity: Real,
}

impl BgeProperties {
    /// Values in the order the harness' `checkBGE` expects.
    pub fn values(&self) -> [&Real; 4] {
        [&self.ph, &self.conductivity, &self.ionic_strength, &self.buffer_capacity]
    }
}

/// Properties of one eigenzone.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenzoneProperties {
    pub mobility: Real,
    /// Electromigration dispersion coefficient
    pub u_emd: Real,
    pub a2t: Real,
    pub ph: Real,
    pub conductivity: Real,
}

impl EigenzoneProperties {
    /// Values in the order the harness' `checkEigenzone` expects.
    pub fn values(&self) -> [&Real; 5] {
        [&self.mobility, &self.u_emd, &self.a2t, &self.ph, &self.conductivity]
    }
}

/// Everything a normal reference run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedResults {
    pub bge: BgeProperties,
    pub eigenzones: Vec<EigenzoneProperties>,
}

/// Parse the complete text of a result file.
pub fn parse_results(text: &str) -> Result<ExpectedResults, ReferenceError> {
    let mut cursor = LineCursor::new(text);

    let bge = BgeProperties {
        ph: cursor.real("background electrolyte pH")?,
        conductivity: cursor.real("background electrolyte conductivity")?,
        ionic_strength: cursor.real("background electrolyte ionic strength")?,
        buffer_capacity: cursor.real("background electrolyte buffer capacity")?,
    };
    cursor.blank("the background electrolyte record")?;

    let mut eigenzones = Vec::new();
    while !cursor.is_exhausted() {
        let zone = EigenzoneProperties {
            mobility: cursor.real("eigenzone mobility")?,
            u_emd: cursor.real("eigenzone uEMD")?,
            a2t: cursor.real("eigenzone a2t")?,
            ph: cursor.real("eigenzone pH")?,
            conductivity: cursor.real("eigenzone conductivity")?,
        };
        cursor.blank("an eigenzone record")?;
        eigenzones.push(zone);
    }

    Ok(ExpectedResults { bge, eigenzones })
}

/// Line reader that tracks 1-based line numbers for error reporting.
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    next: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            next: 0,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.next >= self.lines.len()
    }

    fn line_number(&self) -> usize {
        self.next + 1
    }

    fn take(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.next).copied();
        if line.is_some() {
            self.next += 1;
        }
        line
    }

    fn error(&self, reason: String) -> ReferenceError {
        ReferenceError::BadFormat {
            line: self.line_number(),
            reason,
        }
    }

    fn real(&mut self, what: &str) -> Result<Real, ReferenceError> {
        let Some(line) = self.lines.get(self.next).copied() else {
            return Err(self.error(format!("expected {what}, found end of output")));
        };
        let value = line
            .parse::<Real>()
            .map_err(|_| self.error(format!("expected {what}, found '{line}'")))?;
        self.take();
        Ok(value)
    }

    fn blank(&mut self, after: &str) -> Result<(), ReferenceError> {
        match self.lines.get(self.next).copied() {
            Some("") => {
                self.take();
                Ok(())
            }
            Some(line) => Err(self.error(format!("expected an empty line after {after}, found '{line}'"))),
            None => Err(self.error(format!("expected an empty line after {after}, found end of output"))),
        }
    }
}
