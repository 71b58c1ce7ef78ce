use crate::core::models::residue::{AminoAcidType, ParseAminoAcidError};
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static KYTE_DOOLITTLE: Map<char, f64> = phf_map! {
    'A' => 1.8, 'R' => -4.5, 'N' => -3.5, 'D' => -3.5, 'C' => 2.5,
    'Q' => -3.5, 'E' => -3.5, 'G' => -0.4, 'H' => -3.2, 'I' => 4.5,
    'L' => 3.8, 'K' => -3.9, 'M' => 1.9, 'F' => 2.8, 'P' => -1.6,
    'S' => -0.8, 'T' => -0.7, 'W' => -0.9, 'Y' => -1.3, 'V' => 4.2,
};

static HOPP_WOODS: Map<char, f64> = phf_map! {
    'A' => -0.5, 'R' => 3.0, 'N' => 0.2, 'D' => 3.0, 'C' => -1.0,
    'Q' => 0.2, 'E' => 3.0, 'G' => 0.0, 'H' => -0.5, 'I' => -1.8,
    'L' => -1.8, 'K' => 3.0, 'M' => -1.3, 'F' => -2.5, 'P' => 0.0,
    'S' => 0.3, 'T' => -0.4, 'W' => -3.4, 'Y' => -2.3, 'V' => -1.5,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HydropathyScale {
    #[serde(rename = "kd")]
    KyteDoolittle,
    #[serde(rename = "hw")]
    HoppWoods,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown hydropathy scale '{0}'. Available scales: kd (Kyte&Doolittle), hw (Hopp&Woods)")]
pub struct ParseScaleError(pub String);

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ScaleError {
    #[error("Residue '{symbol}' at position {position} is not covered by the {scale} scale")]
    UnknownResidue {
        position: usize,
        symbol: char,
        scale: HydropathyScale,
    },
}

impl HydropathyScale {
    pub const ALL: [HydropathyScale; 2] = [HydropathyScale::KyteDoolittle, HydropathyScale::HoppWoods];

    pub fn key(&self) -> &'static str {
        match self {
            HydropathyScale::KyteDoolittle => "kd",
            HydropathyScale::HoppWoods => "hw",
        }
    }

    /// Axis label describing what the scale measures.
    pub fn description(&self) -> &'static str {
        match self {
            HydropathyScale::KyteDoolittle => "Kyte&Doolittle hydrophobicity",
            HydropathyScale::HoppWoods => "Hopp&Woods hydrophilicity",
        }
    }

    fn table(&self) -> &'static Map<char, f64> {
        match self {
            HydropathyScale::KyteDoolittle => &KYTE_DOOLITTLE,
            HydropathyScale::HoppWoods => &HOPP_WOODS,
        }
    }

    pub fn score(&self, residue: AminoAcidType) -> f64 {
        // Both tables cover the full 20-letter alphabet.
        self.table().get(&residue.code()).copied().unwrap_or(f64::NAN)
    }

    /// Maps every residue of `sequence` to its score on this scale.
    ///
    /// Any symbol outside the 20 standard one-letter codes is rejected; positions
    /// in errors are 1-based residue numbers.
    pub fn project(&self, sequence: &str) -> Result<Vec<f64>, ScaleError> {
        sequence
            .chars()
            .enumerate()
            .map(|(i, symbol)| {
                AminoAcidType::from_code(symbol)
                    .map(|residue| self.score(residue))
                    .map_err(|ParseAminoAcidError(symbol)| ScaleError::UnknownResidue {
                        position: i + 1,
                        symbol,
                        scale: *self,
                    })
            })
            .collect()
    }
}

impl FromStr for HydropathyScale {
    type Err = ParseScaleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kd" => Ok(HydropathyScale::KyteDoolittle),
            "hw" => Ok(HydropathyScale::HoppWoods),
            _ => Err(ParseScaleError(s.to_string())),
        }
    }
}

impl fmt::Display for HydropathyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
