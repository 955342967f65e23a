use rust_decimal::Decimal;
use uuid::Uuid;

use super::value_objects::{validate_discount, validate_price, ShirtSize};
use crate::domain::errors::{CatalogError, CatalogResult};

/// Unvalidated shirt fields as received from a client
#[derive(Debug, Clone)]
pub struct ShirtInput {
    pub team_id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: Decimal,
    pub discount: Option<Decimal>,
    pub size: String,
}

/// Validated, persistable fields of a shirt
///
/// # Invariants
/// - Price is strictly positive
/// - Discount lies in `[0, 100]` (defaults to 0)
/// - Size is one of S, M, L, XL
/// - Name, description and image are not empty
///
/// The existence of `team_id` is a cross-collection rule and is checked by
/// the shirt service, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShirtDetails {
    team_id: Uuid,
    name: String,
    description: String,
    image: String,
    price: Decimal,
    discount: Decimal,
    size: ShirtSize,
}

impl ShirtDetails {
    /// Validates raw input
    ///
    /// Checks run in order: text fields, price, discount, size, then the
    /// team reference format. A malformed `team_id` can never name a live
    /// team, so it is reported as a missing team.
    ///
    /// # Example
    /// ```
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    /// use ventacamisetas_api::domain::shirt::{ShirtDetails, ShirtInput, ShirtSize};
    ///
    /// let details = ShirtDetails::new(ShirtInput {
    ///     team_id: Uuid::new_v4().to_string(),
    ///     name: "Camiseta local 2025".to_string(),
    ///     description: "Camiseta oficial".to_string(),
    ///     image: "https://images.com/realmadrid2025.jpg".to_string(),
    ///     price: Decimal::from(90),
    ///     discount: None,
    ///     size: "M".to_string(),
    /// })
    /// .expect("valid shirt");
    ///
    /// assert_eq!(details.discount(), Decimal::ZERO);
    /// assert_eq!(details.size(), ShirtSize::M);
    /// ```
    pub fn new(input: ShirtInput) -> CatalogResult<Self> {
        require_text("name", &input.name)?;
        require_text("description", &input.description)?;
        require_text("image", &input.image)?;

        let price = validate_price(input.price)?;
        let discount = validate_discount(input.discount.unwrap_or(Decimal::ZERO))?;
        let size: ShirtSize = input.size.parse()?;

        let team_id = Uuid::parse_str(&input.team_id)
            .map_err(|_| CatalogError::NotFound("Team does not exist".to_string()))?;

        Ok(Self {
            team_id,
            name: input.name,
            description: input.description,
            image: input.image,
            price,
            discount,
            size,
        })
    }

    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the image URL
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the discount percentage
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn size(&self) -> ShirtSize {
        self.size
    }
}

fn require_text(field: &str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidInput(format!(
            "Shirt {} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Shirt aggregate
///
/// A piece of team merchandise. Always references a live team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shirt {
    id: Uuid,
    details: ShirtDetails,
}

impl Shirt {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn team_id(&self) -> Uuid {
        self.details.team_id
    }

    pub fn details(&self) -> &ShirtDetails {
        &self.details
    }

    /// Attaches a store-assigned identifier to validated details
    pub fn with_id(id: Uuid, details: ShirtDetails) -> Self {
        Self { id, details }
    }

    /// Reconstructs a Shirt from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations; the store's check
    /// constraints already hold for persisted rows.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        team_id: Uuid,
        name: String,
        description: String,
        image: String,
        price: Decimal,
        discount: Decimal,
        size: ShirtSize,
    ) -> Self {
        Self {
            id,
            details: ShirtDetails {
                team_id,
                name,
                description,
                image,
                price,
                discount,
                size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ShirtInput {
        ShirtInput {
            team_id: Uuid::new_v4().to_string(),
            name: "Camiseta local 2025".to_string(),
            description: "Camiseta oficial del Real Madrid temporada 2025".to_string(),
            image: "https://images.com/realmadrid2025.jpg".to_string(),
            price: Decimal::new(9000, 2),
            discount: Some(Decimal::from(10)),
            size: "M".to_string(),
        }
    }

    #[test]
    fn valid_input_builds_details() {
        let raw = input();
        let details = ShirtDetails::new(raw.clone()).unwrap();

        assert_eq!(details.team_id().to_string(), raw.team_id);
        assert_eq!(details.price(), Decimal::from(90));
        assert_eq!(details.discount(), Decimal::from(10));
        assert_eq!(details.size(), ShirtSize::M);
    }

    #[test]
    fn missing_discount_defaults_to_zero() {
        let details = ShirtDetails::new(ShirtInput {
            discount: None,
            ..input()
        })
        .unwrap();

        assert_eq!(details.discount(), Decimal::ZERO);
    }

    #[test]
    fn non_positive_price_fails() {
        for price in [Decimal::ZERO, Decimal::from(-1)] {
            let result = ShirtDetails::new(ShirtInput { price, ..input() });
            assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
        }
    }

    #[test]
    fn price_checked_before_team_reference() {
        let result = ShirtDetails::new(ShirtInput {
            price: Decimal::ZERO,
            team_id: "missing".to_string(),
            ..input()
        });

        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn discount_out_of_range_fails() {
        for discount in [Decimal::from(-1), Decimal::from(101)] {
            let result = ShirtDetails::new(ShirtInput {
                discount: Some(discount),
                ..input()
            });
            assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
        }
    }

    #[test]
    fn invalid_size_fails() {
        let result = ShirtDetails::new(ShirtInput {
            size: "XXL".to_string(),
            ..input()
        });

        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn malformed_team_id_reported_as_missing_team() {
        let result = ShirtDetails::new(ShirtInput {
            team_id: "64f1c0ffee".to_string(),
            ..input()
        });

        assert_eq!(
            result,
            Err(CatalogError::NotFound("Team does not exist".to_string()))
        );
    }

    #[test]
    fn empty_image_fails() {
        let result = ShirtDetails::new(ShirtInput {
            image: String::new(),
            ..input()
        });

        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }
}
