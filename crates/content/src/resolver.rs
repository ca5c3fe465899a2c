use crate::bundle::bundle_for;
use crate::copy::deep_substitute;
use crate::preview::PreviewStore;
use crate::samples::{sample_profile, sample_variables};
use crate::variables::{VariableMap, default_variables_for_year};
use crate::vertical::Vertical;
use chrono::Datelike;
use foundlio_core::BusinessRecord;
use regex::Regex;
use serde_json::Value;

/// Decides, per content category, whether callers see deployed data or
/// a substituted preview override.
///
/// Two states, re-evaluated against the preview store on every call:
/// - *Deployed*: selection matches the deployed vertical; every
///   category accessor returns `None` and the caller renders its own
///   deployed JSON untouched.
/// - *Overridden*: selection differs; the selected vertical's bundle
///   category is deep-substituted with that vertical's sample identity
///   (never the real tenant's) and returned.
///
/// Categories resolve independently: a bundle missing `testimonials`
/// yields `None` for testimonials only.
pub struct VerticalResolver {
    deployed: Vertical,
    defaults: VariableMap,
    store: PreviewStore,
    swap_name: Option<Regex>,
    swap_city: Option<Regex>,
    swap_state: Option<Regex>,
}

impl VerticalResolver {
    /// Build a resolver using the local clock for year-derived
    /// variables. The store's deployed vertical should match the
    /// record's; the record's slug wins if they disagree.
    pub fn new(business: &BusinessRecord, store: PreviewStore) -> Self {
        Self::new_for_year(business, store, chrono::Local::now().year())
    }

    pub fn new_for_year(business: &BusinessRecord, store: PreviewStore, year: i32) -> Self {
        let deployed = Vertical::from_slug_or_default(&business.vertical);
        VerticalResolver {
            deployed,
            defaults: default_variables_for_year(business, year),
            store,
            swap_name: literal_pattern(&business.name),
            swap_city: literal_pattern(&business.address.city),
            swap_state: literal_pattern(&business.address.state),
        }
    }

    pub fn deployed(&self) -> Vertical {
        self.deployed
    }

    pub fn store(&self) -> &PreviewStore {
        &self.store
    }

    /// The deployed tenant's default variable map
    pub fn variables(&self) -> &VariableMap {
        &self.defaults
    }

    /// Substitute a content tree with the deployed tenant's variables.
    /// This is the path deployed (non-preview) data takes.
    pub fn process(&self, node: &Value) -> Value {
        deep_substitute(node, &self.defaults, None)
    }

    /// As [`process`](Self::process), with an extra override layer
    pub fn process_with(&self, node: &Value, overrides: &VariableMap) -> Value {
        deep_substitute(node, &self.defaults, Some(overrides))
    }

    pub fn headlines(&self) -> Option<Value> {
        self.category("headlines")
    }

    pub fn services(&self) -> Option<Value> {
        self.category("services")
    }

    pub fn faqs(&self) -> Option<Value> {
        self.category("faqs")
    }

    pub fn testimonials(&self) -> Option<Value> {
        self.category("testimonials")
    }

    pub fn works(&self) -> Option<Value> {
        self.category("works")
    }

    pub fn posts(&self) -> Option<Value> {
        self.category("posts")
    }

    pub fn areas(&self) -> Option<Value> {
        self.category("areas")
    }

    pub fn content(&self) -> Option<Value> {
        self.category("content")
    }

    /// Resolve one category by name. `None` means "use deployed data".
    pub fn category(&self, name: &str) -> Option<Value> {
        let selected = self.store.selected();
        if selected == self.deployed {
            return None;
        }

        let bundle = bundle_for(selected);
        let Some(node) = bundle.category(name) else {
            log::debug!(
                "bundle '{}' has no '{}' category, falling back to deployed data",
                selected,
                name
            );
            return None;
        };

        let samples = sample_variables(selected);
        Some(deep_substitute(node, &self.defaults, Some(&samples)))
    }

    /// Rewrite human-authored prose so the deployed business name,
    /// city, and state read as the preview vertical's sample identity.
    ///
    /// Matching is literal substring replacement (regex-escaped), so a
    /// business name that is a substring of unrelated words will
    /// collide. Accepted limitation of the preview-only path. Identity
    /// function in the deployed state.
    pub fn swap(&self, text: &str) -> String {
        let selected = self.store.selected();
        if selected == self.deployed {
            return text.to_string();
        }

        let profile = sample_profile(selected);
        let mut out = text.to_string();
        // Name first: it may itself contain the city or state
        for (pattern, replacement) in [
            (&self.swap_name, profile.name),
            (&self.swap_city, profile.city),
            (&self.swap_state, profile.state),
        ] {
            if let Some(re) = pattern {
                out = re.replace_all(&out, replacement).into_owned();
            }
        }
        out
    }
}

/// Compile a literal-match pattern, or `None` for blank input (an
/// empty pattern would match between every character)
fn literal_pattern(literal: &str) -> Option<Regex> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Escaped literals always compile
    Regex::new(&regex::escape(trimmed)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::CATEGORIES;
    use foundlio_core::{Address, Features, Hours, Phone, Seo, Social};

    fn hvac_business() -> BusinessRecord {
        BusinessRecord {
            name: "Desert Aire Comfort".to_string(),
            legal_name: None,
            phone: Phone {
                display: "(480) 555-0162".to_string(),
                dial: "+14805550162".to_string(),
            },
            email: "hello@desertaire.example".to_string(),
            website: None,
            vertical: "hvac".to_string(),
            address: Address {
                street: "2210 E Camelback Rd".to_string(),
                city: "Phoenix".to_string(),
                state: "Arizona".to_string(),
                zip: "85016".to_string(),
            },
            geo: None,
            hours: Hours {
                display: "Mon-Sat 7am-6pm".to_string(),
                schedule: vec![],
            },
            licenses: vec![],
            certifications: vec![],
            established: 2015,
            rating: 4.9,
            review_count: 182,
            description: "Residential heating and cooling".to_string(),
            tagline: None,
            features: Features::default(),
            response_time: None,
            warranty_years: None,
            social: Social::default(),
            theme: "sonoran".to_string(),
            seo: Seo {
                title_template: "{{businessName}}".to_string(),
                description_template: "{{phone}}".to_string(),
            },
        }
    }

    fn resolver() -> VerticalResolver {
        let business = hvac_business();
        let store = PreviewStore::new(Vertical::Hvac);
        VerticalResolver::new_for_year(&business, store, 2025)
    }

    #[test]
    fn test_deployed_state_returns_none_for_every_category() {
        let r = resolver();
        for name in CATEGORIES {
            assert!(r.category(name).is_none(), "category '{}'", name);
        }
        assert!(r.headlines().is_none());
        assert!(r.testimonials().is_none());
    }

    #[test]
    fn test_override_uses_sample_identity_not_deployed() {
        let r = resolver();
        r.store().select(Vertical::Plumbing);

        let headlines = r.headlines().expect("plumbing override");
        let text = headlines.to_string();
        assert!(text.contains("Valley Plumbing Pros"));
        assert!(!text.contains("Desert Aire Comfort"));
    }

    #[test]
    fn test_override_keeps_deployed_non_identity_variables() {
        let r = resolver();
        r.store().select(Vertical::Plumbing);

        // yearsInBusiness and rating are not part of the sample layer,
        // so the deployed tenant's values show through
        let text = r.headlines().unwrap().to_string();
        assert!(text.contains("10 years"));
        assert!(text.contains("4.9 stars"));
    }

    #[test]
    fn test_missing_category_falls_back_per_category() {
        let r = resolver();
        r.store().select(Vertical::Cleaning);

        // The cleaning bundle has no portfolio section
        assert!(r.works().is_none());
        // Its other categories still override
        assert!(r.headlines().is_some());
        assert!(r.services().is_some());
    }

    #[test]
    fn test_unknown_slug_resolves_to_default_bundle() {
        let business = hvac_business();
        // Deployed as plumbing so the hvac fallback is an actual override
        let mut plumbing = business.clone();
        plumbing.vertical = "plumbing".to_string();
        let store = PreviewStore::new(Vertical::Plumbing);
        let r = VerticalResolver::new_for_year(&plumbing, store, 2025);

        r.store().select(Vertical::from_slug_or_default("carpentry"));
        let headlines = r.headlines().expect("fallback bundle override");
        assert!(headlines.to_string().contains("Heating & Cooling"));
    }

    #[test]
    fn test_selection_change_re_resolves() {
        let r = resolver();
        r.store().select(Vertical::Roofing);
        assert!(r.headlines().unwrap().to_string().contains("Roofing"));

        r.store().reset();
        assert!(r.headlines().is_none());
    }

    #[test]
    fn test_swap_is_identity_when_deployed() {
        let r = resolver();
        let prose = "Desert Aire Comfort has served Phoenix since 2015.";
        assert_eq!(r.swap(prose), prose);
    }

    #[test]
    fn test_swap_rewrites_identity_in_preview() {
        let r = resolver();
        r.store().select(Vertical::Plumbing);
        let prose = "Desert Aire Comfort has served Phoenix, Arizona since 2015.";
        assert_eq!(
            r.swap(prose),
            "Valley Plumbing Pros has served Mesa, Arizona since 2015."
        );
    }

    #[test]
    fn test_swap_is_literal_substring_replacement() {
        // Known limitation: the city inside an unrelated word is
        // rewritten too
        let r = resolver();
        r.store().select(Vertical::Plumbing);
        assert_eq!(r.swap("A Phoenixville classic"), "A Mesaville classic");
    }

    #[test]
    fn test_process_substitutes_deployed_variables() {
        let r = resolver();
        let node = serde_json::json!({
            "line": "Serving since {{establishedYear}} — {{yearsInBusiness}} years strong"
        });
        let out = r.process(&node);
        assert_eq!(out["line"], "Serving since 2015 — 10 years strong");
    }
}
