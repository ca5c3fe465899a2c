use chrono::Datelike;
use foundlio_core::BusinessRecord;
use std::collections::BTreeMap;

/// Flat mapping from `{{token}}` name to its current string value
pub type VariableMap = BTreeMap<String, String>;

/// Derive the default variable map from a business record using the
/// local clock for year-dependent values.
pub fn default_variables(business: &BusinessRecord) -> VariableMap {
    default_variables_for_year(business, chrono::Local::now().year())
}

/// Derive the default variable map for a specific calendar year.
///
/// Pure and total: optional record fields fall back to literal defaults
/// so every key is always present. `yearsInBusiness` is the distance
/// from the founding year, clamped at zero.
pub fn default_variables_for_year(business: &BusinessRecord, year: i32) -> VariableMap {
    let mut vars = VariableMap::new();

    let mut set = |key: &str, value: String| {
        vars.insert(key.to_string(), value);
    };

    set("businessName", business.name.clone());
    set(
        "legalName",
        business
            .legal_name
            .clone()
            .unwrap_or_else(|| business.name.clone()),
    );
    set("phone", business.phone.display.clone());
    set("phoneRaw", business.phone.dial.clone());
    set("email", business.email.clone());
    set("website", business.website.clone().unwrap_or_default());

    set("street", business.address.street.clone());
    set("city", business.address.city.clone());
    set("state", non_empty_or(&business.address.state, "Arizona"));
    set("zip", business.address.zip.clone());
    set("location", business.location_label());

    set("rating", format!("{}", business.rating));
    set("reviewCount", business.review_count.to_string());
    set("establishedYear", business.established.to_string());
    set(
        "yearsInBusiness",
        business.years_in_business(year).to_string(),
    );
    set("year", year.to_string());

    set(
        "responseTime",
        business
            .response_time
            .clone()
            .unwrap_or_else(|| "2 hours".to_string()),
    );
    set(
        "warrantyYears",
        business.warranty_years.unwrap_or(1).to_string(),
    );
    set(
        "tagline",
        business
            .tagline
            .clone()
            .unwrap_or_else(|| "Trusted local service".to_string()),
    );
    set("hours", business.hours.display.clone());

    vars
}

fn non_empty_or(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
