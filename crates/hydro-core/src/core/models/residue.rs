use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcidType {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // A
    Glycine,    // G
    Isoleucine, // I
    Leucine,    // L
    Proline,    // P
    Valine,     // V

    // --- Aromatic ---
    Phenylalanine, // F
    Tryptophan,    // W
    Tyrosine,      // Y

    // --- Polar, Uncharged ---
    Asparagine, // N
    Cysteine,   // C
    Glutamine,  // Q
    Serine,     // S
    Threonine,  // T
    Methionine, // M

    // --- Positively Charged (Basic) ---
    Arginine,  // R
    Histidine, // H
    Lysine,    // K

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // D
    GlutamicAcid, // E
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid amino acid code: '{0}'")]
pub struct ParseAminoAcidError(pub char);

impl AminoAcidType {
    pub const ALL: [AminoAcidType; 20] = [
        AminoAcidType::Alanine,
        AminoAcidType::Glycine,
        AminoAcidType::Isoleucine,
        AminoAcidType::Leucine,
        AminoAcidType::Proline,
        AminoAcidType::Valine,
        AminoAcidType::Phenylalanine,
        AminoAcidType::Tryptophan,
        AminoAcidType::Tyrosine,
        AminoAcidType::Asparagine,
        AminoAcidType::Cysteine,
        AminoAcidType::Glutamine,
        AminoAcidType::Serine,
        AminoAcidType::Threonine,
        AminoAcidType::Methionine,
        AminoAcidType::Arginine,
        AminoAcidType::Histidine,
        AminoAcidType::Lysine,
        AminoAcidType::AsparticAcid,
        AminoAcidType::GlutamicAcid,
    ];

    pub fn from_code(code: char) -> Result<Self, ParseAminoAcidError> {
        match code.to_ascii_uppercase() {
            'A' => Ok(AminoAcidType::Alanine),
            'G' => Ok(AminoAcidType::Glycine),
            'I' => Ok(AminoAcidType::Isoleucine),
            'L' => Ok(AminoAcidType::Leucine),
            'P' => Ok(AminoAcidType::Proline),
            'V' => Ok(AminoAcidType::Valine),
            'F' => Ok(AminoAcidType::Phenylalanine),
            'W' => Ok(AminoAcidType::Tryptophan),
            'Y' => Ok(AminoAcidType::Tyrosine),
            'N' => Ok(AminoAcidType::Asparagine),
            'C' => Ok(AminoAcidType::Cysteine),
            'Q' => Ok(AminoAcidType::Glutamine),
            'S' => Ok(AminoAcidType::Serine),
            'T' => Ok(AminoAcidType::Threonine),
            'M' => Ok(AminoAcidType::Methionine),
            'R' => Ok(AminoAcidType::Arginine),
            'H' => Ok(AminoAcidType::Histidine),
            'K' => Ok(AminoAcidType::Lysine),
            'D' => Ok(AminoAcidType::AsparticAcid),
            'E' => Ok(AminoAcidType::GlutamicAcid),
            _ => Err(ParseAminoAcidError(code)),
        }
    }

    pub fn code(&self) -> char {
        match self {
            AminoAcidType::Alanine => 'A',
            AminoAcidType::Glycine => 'G',
            AminoAcidType::Isoleucine => 'I',
            AminoAcidType::Leucine => 'L',
            AminoAcidType::Proline => 'P',
            AminoAcidType::Valine => 'V',
            AminoAcidType::Phenylalanine => 'F',
            AminoAcidType::Tryptophan => 'W',
            AminoAcidType::Tyrosine => 'Y',
            AminoAcidType::Asparagine => 'N',
            AminoAcidType::Cysteine => 'C',
            AminoAcidType::Glutamine => 'Q',
            AminoAcidType::Serine => 'S',
            AminoAcidType::Threonine => 'T',
            AminoAcidType::Methionine => 'M',
            AminoAcidType::Arginine => 'R',
            AminoAcidType::Histidine => 'H',
            AminoAcidType::Lysine => 'K',
            AminoAcidType::AsparticAcid => 'D',
            AminoAcidType::GlutamicAcid => 'E',
        }
    }
}

impl FromStr for AminoAcidType {
    type Err = ParseAminoAcidError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c),
            (Some(c), Some(_)) => Err(ParseAminoAcidError(c)),
            (None, _) => Err(ParseAminoAcidError(' ')),
        }
    }
}

impl fmt::Display for AminoAcidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn from_code_accepts_all_twenty_standard_residues() {
        let parsed: HashSet<_> = "ACDEFGHIKLMNPQRSTVWY"
            .chars()
            .map(|c| AminoAcidType::from_code(c).unwrap())
            .collect();
        assert_eq!(parsed.len(), 20);
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(
            AminoAcidType::from_code('w'),
            Ok(AminoAcidType::Tryptophan)
        );
        assert_eq!(AminoAcidType::from_code('K'), Ok(AminoAcidType::Lysine));
    }

    #[test]
    fn from_code_rejects_non_standard_symbols() {
        for c in ['X', 'B', 'Z', 'U', 'O', '*', '-', '1'] {
            assert_eq!(AminoAcidType::from_code(c), Err(ParseAminoAcidError(c)));
        }
    }

    #[test]
    fn code_round_trips_through_from_code_for_every_variant() {
        for aa in AminoAcidType::ALL {
            assert_eq!(AminoAcidType::from_code(aa.code()), Ok(aa));
        }
    }

    #[test]
    fn from_str_requires_exactly_one_character() {
        assert_eq!("G".parse::<AminoAcidType>(), Ok(AminoAcidType::Glycine));
        assert!("GL".parse::<AminoAcidType>().is_err());
        assert!("".parse::<AminoAcidType>().is_err());
    }
}
