use uuid::Uuid;

use crate::domain::errors::{CatalogError, CatalogResult};

/// Mutable fields of a football team
///
/// Validated on construction; the store assigns the identifier when the
/// details are first persisted.
///
/// # Invariants
/// - Name cannot be empty
/// - Country cannot be empty
///
/// # Example
/// ```
/// use ventacamisetas_api::domain::team::TeamDetails;
///
/// let details = TeamDetails::new("Real Madrid", "España").expect("valid team");
/// assert_eq!(details.name(), "Real Madrid");
/// assert!(TeamDetails::new("", "España").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDetails {
    name: String,
    country: String,
}

impl TeamDetails {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> CatalogResult<Self> {
        let name = name.into();
        let country = country.into();

        if name.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "Team name cannot be empty".to_string(),
            ));
        }
        if country.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "Team country cannot be empty".to_string(),
            ));
        }

        Ok(Self { name, country })
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the country the team belongs to
    pub fn country(&self) -> &str {
        &self.country
    }
}

/// Team aggregate root
///
/// A football team whose shirts are sold by the shop. Teams are referenced
/// by shirts through `team_id` and cannot be removed while referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    details: TeamDetails,
}

impl Team {
    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        self.details.name()
    }

    pub fn country(&self) -> &str {
        self.details.country()
    }

    pub fn details(&self) -> &TeamDetails {
        &self.details
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// This method bypasses validation since the data is already validated
    /// and stored in the database.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(id: Uuid, name: String, country: String) -> Self {
        Self {
            id,
            details: TeamDetails { name, country },
        }
    }

    /// Attaches a store-assigned identifier to validated details
    pub fn with_id(id: Uuid, details: TeamDetails) -> Self {
        Self { id, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_details_with_valid_fields() {
        let details = TeamDetails::new("Real Madrid", "España").unwrap();

        assert_eq!(details.name(), "Real Madrid");
        assert_eq!(details.country(), "España");
    }

    #[test]
    fn empty_name_fails() {
        let result = TeamDetails::new("", "España");

        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
        assert!(result.unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn blank_country_fails() {
        let result = TeamDetails::new("Boca Juniors", "   ");

        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn team_getters() {
        let id = Uuid::new_v4();
        let team = Team::from_persistence(id, "Ajax".to_string(), "Netherlands".to_string());

        assert_eq!(team.id(), id);
        assert_eq!(team.name(), "Ajax");
        assert_eq!(team.country(), "Netherlands");
    }

    #[test]
    fn with_id_keeps_details() {
        let details = TeamDetails::new("Ajax", "Netherlands").unwrap();
        let id = Uuid::new_v4();
        let team = Team::with_id(id, details.clone());

        assert_eq!(team.details(), &details);
    }
}
