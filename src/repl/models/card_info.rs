//! Card metadata returned by the BIN lookup service
//!
//! Mirrors the binlist response shape. Every field is optional; services
//! routinely return partial records, and an entirely absent record counts as
//! "no data".

use serde::{Deserialize, Serialize};

/// Attributes of the card number itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luhn: Option<bool>,
}

/// Issuing bank details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bank {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Country of issue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Issuer and card metadata for a BIN prefix
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepaid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

impl CardInfo {
    /// True when the service returned a record with nothing in it
    pub fn is_empty(&self) -> bool {
        self.scheme.is_none()
            && self.card_type.is_none()
            && self.brand.is_none()
            && self.prepaid.is_none()
            && self.number.is_none()
            && self.bank.is_none()
            && self.country.is_none()
    }

    /// Short one-line description, e.g. "visa debit (Visa/Dankort)"
    pub fn headline(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(scheme) = &self.scheme {
            parts.push(scheme);
        }
        if let Some(card_type) = &self.card_type {
            parts.push(card_type);
        }
        let mut headline = parts.join(" ");
        if let Some(brand) = &self.brand {
            if headline.is_empty() {
                headline = brand.clone();
            } else {
                headline.push_str(&format!(" ({brand})"));
            }
        }
        headline
    }
}
