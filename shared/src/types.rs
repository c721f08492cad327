//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Product type of a stock variant
///
/// Normal rolls are measured as width (cm) x length (m); cut pieces as
/// width (cm) x height (cm). The serialized names match the labels the
/// plant uses on delivery notes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProductType {
    Normal,
    #[serde(rename = "Kesilmiş")]
    Cut,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Normal => "Normal",
            ProductType::Cut => "Kesilmiş",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Normal" => Some(ProductType::Normal),
            "Kesilmiş" => Some(ProductType::Cut),
            _ => None,
        }
    }
}

/// User roles
///
/// Admins may create, edit and delete records; viewers only read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Viewer => "viewer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }
}

/// Units of measure accepted for raw material purchases
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnitOfMeasure {
    Kilogram,
    Adet,
    Litre,
}

impl UnitOfMeasure {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOfMeasure::Kilogram => "Kilogram",
            UnitOfMeasure::Adet => "Adet",
            UnitOfMeasure::Litre => "Litre",
        }
    }
}

/// Currencies accepted for raw material purchases
///
/// TL entries always apply an exchange rate of 1; USD and EUR entries apply
/// the stored rate at entry time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyCode {
    TL,
    USD,
    EUR,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::TL => "TL",
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TL" => Some(CurrencyCode::TL),
            "USD" => Some(CurrencyCode::USD),
            "EUR" => Some(CurrencyCode::EUR),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_type_serializes_with_turkish_label() {
        assert_eq!(
            serde_json::to_string(&ProductType::Cut).unwrap(),
            "\"Kesilmiş\""
        );
        assert_eq!(
            serde_json::to_string(&ProductType::Normal).unwrap(),
            "\"Normal\""
        );
    }

    #[test]
    fn role_round_trips() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("viewer"), Some(Role::Viewer));
        assert_eq!(Role::parse("manager"), None);
        assert_eq!(Role::Admin.as_str(), "admin");
    }
}
