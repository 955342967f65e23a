use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::errors::CatalogError;

/// Sizes a shirt can be sold in
///
/// Stored as the `shirt_size` PostgreSQL enum and serialized with the same
/// upper-case labels clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "shirt_size", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ShirtSize {
    S,
    M,
    L,
    Xl,
}

impl ShirtSize {
    pub const ALL: [ShirtSize; 4] = [ShirtSize::S, ShirtSize::M, ShirtSize::L, ShirtSize::Xl];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShirtSize::S => "S",
            ShirtSize::M => "M",
            ShirtSize::L => "L",
            ShirtSize::Xl => "XL",
        }
    }
}

impl FromStr for ShirtSize {
    type Err = CatalogError;

    /// Labels are matched exactly; `m` or `xxl` are rejected.
    ///
    /// # Example
    /// ```
    /// use ventacamisetas_api::domain::shirt::ShirtSize;
    ///
    /// assert_eq!("XL".parse::<ShirtSize>().unwrap(), ShirtSize::Xl);
    /// assert!("XXL".parse::<ShirtSize>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShirtSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| {
                CatalogError::InvalidInput(format!(
                    "Invalid size '{}'. Valid sizes: S, M, L, XL",
                    s
                ))
            })
    }
}

impl std::fmt::Display for ShirtSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upper bound of a discount percentage
pub const MAX_DISCOUNT: Decimal = Decimal::ONE_HUNDRED;

/// Checks that a price is strictly positive
pub fn validate_price(price: Decimal) -> Result<Decimal, CatalogError> {
    if price <= Decimal::ZERO {
        return Err(CatalogError::InvalidInput(
            "Price must be greater than zero".to_string(),
        ));
    }
    Ok(price)
}

/// Checks that a discount percentage lies in `[0, 100]`
pub fn validate_discount(discount: Decimal) -> Result<Decimal, CatalogError> {
    if discount < Decimal::ZERO || discount > MAX_DISCOUNT {
        return Err(CatalogError::InvalidInput(
            "Discount must be between 0 and 100".to_string(),
        ));
    }
    Ok(discount)
}
