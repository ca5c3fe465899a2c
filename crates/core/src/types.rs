use serde::{Deserialize, Serialize};

/// Complete tenant configuration for one deployed site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    pub phone: Phone,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Industry vertical slug (hvac, plumbing, electrical, ...)
    pub vertical: String,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    pub hours: Hours,
    pub licenses: Vec<String>,
    pub certifications: Vec<String>,
    /// Founding year, e.g. 2015
    pub established: i32,
    pub rating: f64,
    pub review_count: u32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub features: Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_years: Option<u32>,
    pub social: Social,
    pub theme: String,
    pub seo: Seo,
}

/// Phone number in both human-readable and dial-able form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phone {
    /// Display form, e.g. "(480) 555-0162"
    pub display: String,
    /// Raw dial-able form, e.g. "+14805550162"
    pub dial: String,
}

/// Postal address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Geo {
    pub lat: f64,
    pub lng: f64,
}

/// Operating hours: free-text display plus structured day ranges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hours {
    pub display: String,
    #[serde(default)]
    pub schedule: Vec<DayRange>,
}

/// One contiguous block of open days and hours
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRange {
    /// e.g. "Mon-Fri" or "Sat"
    pub days: String,
    /// 24h open time, e.g. "07:00"
    pub open: String,
    /// 24h close time, e.g. "18:00"
    pub close: String,
}

/// Boolean feature flags surfaced as badges and trust signals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default)]
    pub emergency_service: bool,
    #[serde(default)]
    pub financing: bool,
    #[serde(default)]
    pub free_estimates: bool,
}

/// Social profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yelp: Option<String>,
}

/// SEO template strings; may contain {{variable}} tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub title_template: String,
    pub description_template: String,
}

impl BusinessRecord {
    /// Display name with the legal name as fallback-free primary
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// "City, ST" location label used in page headers
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.address.city, self.address.state)
    }

    /// Years in business as of `year`, clamped at zero for
    /// records established in the future
    pub fn years_in_business(&self, year: i32) -> i32 {
        (year - self.established).max(0)
    }
}
