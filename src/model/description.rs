//! Experiment description: the decoded form of the input JSON.
//!
//! ```json
//! {
//!   "constituents": [
//!     {
//!       "name": "Li", "type": "N", "role": "B",
//!       "chargeLow": 0, "chargeHigh": 1,
//!       "pKas": [13.8], "mobilities": [0.0, 40.1],
//!       "viscosityCoefficient": 0.0,
//!       "concentrationBGE": 10.0, "concentrationSample": 8.0,
//!       "complexForms": [
//!         { "nucleusCharge": 1,
//!           "ligandGroups": [ { "ligands": [
//!             { "name": "b-CD", "charge": 0, "maxCount": 1, "pBs": [1.5], "mobilities": [10.0] } ] } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::Deserialize;

use super::ident::Identifier;
use super::real::Real;
use super::validate::ValidationError;

/// Top-level experiment description.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentDescription {
    pub constituents: Vec<Constituent>,
}

impl ExperimentDescription {
    /// Decode a description from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ValidationError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a description from an already parsed JSON document.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Whether a constituent is a complexation nucleus or a ligand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ConstituentKind {
    #[serde(rename = "N")]
    Nucleus,
    #[serde(rename = "L")]
    Ligand,
}

/// Which concentration contexts a constituent participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    /// Present in the background electrolyte and in the sample (`"B"`)
    BackgroundElectrolyte,
    /// Present in the sample only (any other role string)
    SampleOnly,
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        if role == "B" { Role::BackgroundElectrolyte } else { Role::SampleOnly }
    }
}

/// A chemical species of the separation system.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constituent {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ConstituentKind,
    pub role: Role,
    pub charge_low: i32,
    pub charge_high: i32,
    #[serde(rename = "pKas")]
    pub pkas: Vec<Real>,
    pub mobilities: Vec<Real>,
    pub viscosity_coefficient: Real,
    #[serde(rename = "concentrationBGE", default)]
    pub concentration_bge: Option<Real>,
    pub concentration_sample: Real,
    /// `None` when the key is absent; `Some(vec![])` when present but empty.
    #[serde(default)]
    pub complex_forms: Option<Vec<ComplexForm>>,
}

impl Constituent {
    pub fn identifier(&self) -> Identifier {
        Identifier::from_name(&self.name)
    }

    pub fn is_background(&self) -> bool {
        self.role == Role::BackgroundElectrolyte
    }
}

/// Complexation of a nucleus in one charge state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexForm {
    pub nucleus_charge: i32,
    pub ligand_groups: Vec<LigandGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LigandGroup {
    pub ligands: Vec<LigandForm>,
}

/// One ligand charge form binding to the nucleus.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigandForm {
    pub name: String,
    pub charge: i32,
    pub max_count: u32,
    /// Consecutive complexation constants, one per bound ligand
    #[serde(rename = "pBs")]
    pub pbs: Vec<Real>,
    pub mobilities: Vec<Real>,
}
