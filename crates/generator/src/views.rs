//! Typed views over resolved content trees.
//!
//! Content arrives as substituted JSON (deployed or override); these
//! structs give the page templates real fields to work with. Every
//! field is defaulted so partially-authored content still renders.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Headlines {
    pub hero: Hero,
    pub sections: SectionTitles,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    #[serde(rename = "secondaryCta")]
    pub secondary_cta: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SectionTitles {
    pub services: String,
    pub testimonials: String,
    pub faqs: String,
    pub works: String,
    pub areas: String,
    pub posts: String,
    pub contact: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        SectionTitles {
            services: "Our Services".to_string(),
            testimonials: "Customer Reviews".to_string(),
            faqs: "Frequently Asked Questions".to_string(),
            works: "Recent Work".to_string(),
            areas: "Service Areas".to_string(),
            posts: "From the Blog".to_string(),
            contact: "Get in Touch".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub city: String,
    pub rating: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Work {
    pub title: String,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Areas {
    pub intro: String,
    pub cities: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub about: TitledBlock,
    #[serde(rename = "whyUs")]
    pub why_us: Vec<TitledBlock>,
    pub emergency: TitledBlock,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TitledBlock {
    pub title: String,
    #[serde(alias = "description")]
    pub body: String,
}

/// Deserialize a resolved category, shrugging off shape mismatches.
/// Bad shapes degrade to defaults instead of failing the render.
pub fn view<T: serde::de::DeserializeOwned + Default>(value: Option<Value>) -> Option<T> {
    let value = value?;
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(_) => Some(T::default()),
    }
}

/// As [`view`], for array-shaped categories
pub fn view_list<T: serde::de::DeserializeOwned>(value: Option<Value>) -> Vec<T> {
    let Some(Value::Array(items)) = value else {
        return vec![];
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_defaults_missing_fields() {
        let h: Headlines = view(Some(json!({"hero": {"title": "Hi"}}))).unwrap();
        assert_eq!(h.hero.title, "Hi");
        assert_eq!(h.hero.subtitle, "");
        assert_eq!(h.sections.services, "Our Services");
    }

    #[test]
    fn test_view_none_passes_through() {
        assert!(view::<Headlines>(None).is_none());
    }

    #[test]
    fn test_view_list_skips_malformed_entries() {
        let services: Vec<Service> = view_list(Some(json!([
            {"name": "AC Repair", "description": "Fast", "icon": "snowflake"},
            "not an object"
        ])));
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "AC Repair");
    }

    #[test]
    fn test_titled_block_accepts_description_alias() {
        let block: TitledBlock =
            serde_json::from_value(json!({"title": "Fast", "description": "We hurry"})).unwrap();
        assert_eq!(block.body, "We hurry");
    }
}
