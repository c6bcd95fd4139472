//! Service pricing rule
//!
//! A service's visible price is derived from the experience of the provider
//! who renders it. The stored base value on the service row is never shown.
//!
//! The rule is a pure function of the provider's years of experience and must
//! be evaluated on every read; nothing here is cached.

use rust_decimal::Decimal;

/// Base price of every service, before the experience surcharge (50.00)
pub fn base_price() -> Decimal {
    Decimal::new(5000, 2)
}

/// Surcharge tier selected by a provider's years of experience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    /// Under 2 years (and any value not covered below)
    Base,
    /// Exactly 2 years
    Intermediate,
    /// More than 2, up to 5 years
    Experienced,
    /// More than 5 years
    Senior,
}

impl PriceTier {
    /// Select the tier for a provider's experience
    pub fn for_experience(years: i64) -> Self {
        match years {
            2 => PriceTier::Intermediate,
            3..=5 => PriceTier::Experienced,
            y if y > 5 => PriceTier::Senior,
            _ => PriceTier::Base,
        }
    }

    /// Multiplier applied to the base price
    pub fn multiplier(&self) -> Decimal {
        match self {
            PriceTier::Base => Decimal::ONE,
            PriceTier::Intermediate => Decimal::new(120, 2),
            PriceTier::Experienced => Decimal::new(140, 2),
            PriceTier::Senior => Decimal::new(165, 2),
        }
    }
}

/// Price of a service rendered by a provider with `experience_years`
pub fn derived_price(experience_years: i64) -> Decimal {
    (base_price() * PriceTier::for_experience(experience_years).multiplier()).round_dp(2)
}
