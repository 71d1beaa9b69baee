//! Split a description into its background-electrolyte and sample compositions.

use super::concentrations::ConcentrationMap;
use super::description::{Constituent, ExperimentDescription};
use super::validate::ValidationError;

/// Constituent lists and concentration maps of both concentration contexts.
///
/// Every constituent belongs to the sample; background-electrolyte constituents also belong to the BGE.
#[derive(Debug, Clone)]
pub struct Composition<'a> {
    pub background: Vec<&'a Constituent>,
    pub sample: Vec<&'a Constituent>,
    pub background_concentrations: ConcentrationMap,
    pub sample_concentrations: ConcentrationMap,
}

impl<'a> Composition<'a> {
    pub fn from_description(desc: &'a ExperimentDescription) -> Result<Self, ValidationError> {
        let mut composition = Self {
            background: Vec::new(),
            sample: Vec::new(),
            background_concentrations: ConcentrationMap::new(),
            sample_concentrations: ConcentrationMap::new(),
        };

        for c in &desc.constituents {
            composition.sample.push(c);
            composition
                .sample_concentrations
                .insert(c.name.clone(), c.concentration_sample.clone());

            if c.is_background() {
                let concentration = c
                    .concentration_bge
                    .clone()
                    .ok_or_else(|| ValidationError::MissingBgeConcentration { name: c.name.clone() })?;
                composition.background.push(c);
                composition.background_concentrations.insert(c.name.clone(), concentration);
            }
        }

        Ok(composition)
    }
}
