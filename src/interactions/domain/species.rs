use crate::shared::error::ProtlinksError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Longest NCBI taxonomy identifier accepted
const MAX_SPECIES_ID_LENGTH: usize = 10;

/// NewType wrapper for an NCBI taxonomy identifier (e.g. `9606` for human)
///
/// The value is templated into download URLs, so only ASCII digits are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpeciesId(String);

impl SpeciesId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();

        let reason = if trimmed.is_empty() {
            Some("identifier cannot be empty".to_string())
        } else if trimmed.len() > MAX_SPECIES_ID_LENGTH {
            Some(format!(
                "identifier is too long ({} characters, at most {})",
                trimmed.len(),
                MAX_SPECIES_ID_LENGTH
            ))
        } else if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            Some("identifier must contain only digits".to_string())
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ProtlinksError::InvalidSpecies { value, reason }.into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpeciesId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        SpeciesId::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_species() {
        let species = SpeciesId::new("9606").unwrap();
        assert_eq!(species.as_str(), "9606");
        assert_eq!(format!("{}", species), "9606");
    }

    #[test]
    fn test_species_is_trimmed() {
        let species = SpeciesId::new(" 1500304 ").unwrap();
        assert_eq!(species.as_str(), "1500304");
    }

    #[test]
    fn test_empty_species() {
        let err = SpeciesId::new("").unwrap_err();
        assert!(format!("{}", err).contains("cannot be empty"));
    }

    #[test]
    fn test_non_numeric_species() {
        let err = SpeciesId::new("homo sapiens").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProtlinksError>(),
            Some(ProtlinksError::InvalidSpecies { .. })
        ));
    }

    #[test]
    fn test_path_characters_rejected() {
        assert!(SpeciesId::new("../9606").is_err());
        assert!(SpeciesId::new("9606/x").is_err());
    }

    #[test]
    fn test_too_long_species() {
        assert!(SpeciesId::new("12345678901").is_err());
    }

    #[test]
    fn test_from_str() {
        let species: SpeciesId = "10090".parse().unwrap();
        assert_eq!(species.as_str(), "10090");
    }
}
