use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw JSON structure
/// This matches the business.json file structure exactly
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBusiness {
    name: String,
    legal_name: Option<String>,
    phone: RawPhone,
    email: String,
    website: Option<String>,
    vertical: String,
    address: Address,
    geo: Option<Geo>,
    hours: Hours,
    #[serde(default)]
    licenses: Vec<String>,
    #[serde(default)]
    certifications: Vec<String>,
    established: i32,
    rating: f64,
    review_count: u32,
    description: String,
    tagline: Option<String>,
    #[serde(default)]
    features: Features,
    response_time: Option<String>,
    warranty_years: Option<u32>,
    #[serde(default)]
    social: Social,
    theme: String,
    seo: Seo,
}

#[derive(Debug, Deserialize)]
struct RawPhone {
    display: String,
    dial: String,
}

/// Parse business.json from a file path
pub fn load_business<P: AsRef<Path>>(path: P) -> Result<BusinessRecord> {
    let content = fs::read_to_string(path)?;
    parse_business_str(&content)
}

/// Parse business.json from a string (useful for testing)
pub fn parse_business_str(content: &str) -> Result<BusinessRecord> {
    let raw: RawBusiness = serde_json::from_str(content)?;

    let name = raw.name.trim();
    if name.is_empty() {
        return Err(Error::InvalidData("'name' must not be empty".to_string()));
    }

    if !(0.0..=5.0).contains(&raw.rating) {
        return Err(Error::InvalidData(format!(
            "'rating' must be between 0 and 5, got {}",
            raw.rating
        )));
    }

    if !(1850..=2100).contains(&raw.established) {
        return Err(Error::InvalidData(format!(
            "'established' year out of range: {}",
            raw.established
        )));
    }

    let phone = Phone {
        display: raw.phone.display,
        dial: validate_dial(&raw.phone.dial)?,
    };

    if raw.vertical.trim().is_empty() {
        return Err(Error::InvalidData(
            "'vertical' must not be empty".to_string(),
        ));
    }

    Ok(BusinessRecord {
        name: name.to_string(),
        legal_name: raw.legal_name,
        phone,
        email: raw.email,
        website: raw.website,
        vertical: raw.vertical,
        address: raw.address,
        geo: raw.geo,
        hours: raw.hours,
        licenses: raw.licenses,
        certifications: raw.certifications,
        established: raw.established,
        rating: raw.rating,
        review_count: raw.review_count,
        description: raw.description,
        tagline: raw.tagline,
        features: raw.features,
        response_time: raw.response_time,
        warranty_years: raw.warranty_years,
        social: raw.social,
        theme: raw.theme,
        seo: raw.seo,
    })
}

/// Validate the dial-able phone form.
///
/// Accepts an optional leading `+` followed by digits only. The display
/// form is free text, but the dial form ends up in `tel:` links and
/// must be machine-usable.
fn validate_dial(dial: &str) -> Result<String> {
    let trimmed = dial.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidData(format!(
            "'phone.dial' must be digits with an optional leading '+', got '{}'",
            dial
        )));
    }

    if digits.len() < 7 {
        return Err(Error::InvalidData(format!(
            "'phone.dial' too short to be a dialable number: '{}'",
            dial
        )));
    }

    Ok(trimmed.to_string())
}
