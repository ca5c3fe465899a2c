use anyhow::{Context, Result};
use foundlio_content::VerticalResolver;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// All resolved content for one render pass.
///
/// Each category is resolved independently: a preview override when the
/// resolver supplies one, otherwise the site's own `data/*.json`
/// substituted with the deployed variables. `None` means the category
/// has no content from either source and its section is skipped.
#[derive(Debug)]
pub struct SiteContent {
    pub headlines: Option<Value>,
    pub services: Option<Value>,
    pub faqs: Option<Value>,
    pub testimonials: Option<Value>,
    pub works: Option<Value>,
    pub posts: Option<Value>,
    pub areas: Option<Value>,
    pub content: Option<Value>,
}

impl SiteContent {
    pub fn resolve(dir: &Path, resolver: &VerticalResolver) -> Result<SiteContent> {
        Ok(SiteContent {
            headlines: resolve_category(dir, resolver, "headlines")?,
            services: resolve_category(dir, resolver, "services")?,
            faqs: resolve_category(dir, resolver, "faqs")?,
            testimonials: resolve_category(dir, resolver, "testimonials")?,
            works: resolve_category(dir, resolver, "works")?,
            posts: resolve_category(dir, resolver, "posts")?,
            areas: resolve_category(dir, resolver, "areas")?,
            content: resolve_category(dir, resolver, "content")?,
        })
    }
}

/// Override first; deployed data second; `None` when neither exists.
/// A deployed file that exists but fails to parse is a hard error:
/// that is a broken site, not a missing section.
pub fn resolve_category(
    dir: &Path,
    resolver: &VerticalResolver,
    name: &str,
) -> Result<Option<Value>> {
    if let Some(value) = resolver.category(name) {
        return Ok(Some(value));
    }

    let path = dir.join("data").join(format!("{}.json", name));
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(Some(resolver.process(&value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundlio_content::{PreviewStore, Vertical};
    use foundlio_core::parse_business_str;
    use std::fs;
    use tempfile::TempDir;

    const BUSINESS: &str = r#"{
        "name": "Desert Aire Comfort",
        "phone": { "display": "(480) 555-0162", "dial": "+14805550162" },
        "email": "hello@desertaire.example",
        "vertical": "hvac",
        "address": {
            "street": "2210 E Camelback Rd",
            "city": "Phoenix",
            "state": "Arizona",
            "zip": "85016"
        },
        "hours": { "display": "Mon-Sat 7am-6pm" },
        "established": 2015,
        "rating": 4.9,
        "reviewCount": 182,
        "description": "Residential heating and cooling.",
        "theme": "sonoran",
        "seo": {
            "titleTemplate": "{{businessName}}",
            "descriptionTemplate": "{{phone}}"
        }
    }"#;

    fn site() -> (TempDir, VerticalResolver) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("business.json"), BUSINESS).unwrap();
        let data = dir.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(
            data.join("headlines.json"),
            r#"{"hero": {"title": "{{businessName}} of {{city}}"}}"#,
        )
        .unwrap();
        fs::write(
            data.join("services.json"),
            r#"[{"name": "AC Repair", "description": "Since {{establishedYear}}"}]"#,
        )
        .unwrap();

        let business = parse_business_str(BUSINESS).unwrap();
        let store = PreviewStore::new(Vertical::Hvac);
        let resolver = VerticalResolver::new_for_year(&business, store, 2025);
        (dir, resolver)
    }

    #[test]
    fn test_deployed_data_is_substituted_with_real_variables() {
        let (dir, resolver) = site();
        let content = SiteContent::resolve(dir.path(), &resolver).unwrap();

        let headlines = content.headlines.unwrap();
        assert_eq!(headlines["hero"]["title"], "Desert Aire Comfort of Phoenix");
        let services = content.services.unwrap();
        assert_eq!(services[0]["description"], "Since 2015");
    }

    #[test]
    fn test_missing_deployed_category_is_none() {
        let (dir, resolver) = site();
        let content = SiteContent::resolve(dir.path(), &resolver).unwrap();
        assert!(content.posts.is_none());
        assert!(content.works.is_none());
    }

    #[test]
    fn test_preview_override_shadows_deployed_data() {
        let (dir, resolver) = site();
        resolver.store().select(Vertical::Plumbing);
        let content = SiteContent::resolve(dir.path(), &resolver).unwrap();

        let headlines = content.headlines.unwrap();
        let text = headlines.to_string();
        assert!(text.contains("Valley Plumbing Pros"));
        assert!(!text.contains("Desert Aire Comfort"));

        // works is absent from deployed data but present in the
        // plumbing bundle, so preview fills it in
        assert!(content.works.is_some());
    }

    #[test]
    fn test_malformed_deployed_category_is_an_error() {
        let (dir, resolver) = site();
        fs::write(dir.path().join("data/faqs.json"), "{ broken").unwrap();
        let result = SiteContent::resolve(dir.path(), &resolver);
        assert!(result.is_err());
    }
}
