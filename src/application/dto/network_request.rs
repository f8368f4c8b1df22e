use crate::interactions::domain::SpeciesId;
use crate::shared::error::ProtlinksError;
use crate::shared::Result;

/// NetworkRequest - input of the STRING network query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRequest {
    /// Protein names or STRING identifiers
    pub identifiers: Vec<String>,
    /// NCBI taxonomy id the identifiers belong to
    pub species: SpeciesId,
    /// Minimum combined score (0-1000); the service default applies when absent
    pub required_score: Option<u32>,
}

impl NetworkRequest {
    pub fn new(identifiers: Vec<String>, species: SpeciesId) -> Result<Self> {
        let identifiers: Vec<String> = identifiers
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        if identifiers.is_empty() {
            return Err(ProtlinksError::Validation {
                message: "at least one protein identifier is required".to_string(),
            }
            .into());
        }

        Ok(Self {
            identifiers,
            species,
            required_score: None,
        })
    }

    pub fn with_required_score(mut self, required_score: u32) -> Self {
        self.required_score = Some(required_score);
        self
    }
}
