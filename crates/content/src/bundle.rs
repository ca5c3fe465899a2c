use crate::vertical::Vertical;
use serde_json::Value;
use std::sync::LazyLock;

/// Content category names, in page order
pub const CATEGORIES: [&str; 8] = [
    "headlines",
    "services",
    "faqs",
    "testimonials",
    "works",
    "posts",
    "areas",
    "content",
];

/// All content categories for one vertical, embedded at build time.
///
/// Bundles are immutable; previewing a different vertical re-resolves
/// against them but never rewrites them.
pub struct VerticalBundle {
    vertical: Vertical,
    value: Value,
}

impl VerticalBundle {
    pub fn vertical(&self) -> Vertical {
        self.vertical
    }

    /// One category's content tree, or `None` when this bundle does not
    /// carry that category. Callers fall back to deployed data for the
    /// missing category only; categories resolve independently.
    pub fn category(&self, name: &str) -> Option<&Value> {
        self.value.get(name)
    }
}

fn parse(vertical: Vertical, raw: &str) -> VerticalBundle {
    // Bundles ship inside the binary; a parse failure is a build defect,
    // not a runtime condition.
    let value: Value = serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("embedded bundle '{}' is not valid JSON: {}", vertical, e));
    VerticalBundle { vertical, value }
}

static BUNDLES: LazyLock<[VerticalBundle; 6]> = LazyLock::new(|| {
    [
        parse(Vertical::Hvac, include_str!("../bundles/hvac.json")),
        parse(Vertical::Plumbing, include_str!("../bundles/plumbing.json")),
        parse(
            Vertical::Electrical,
            include_str!("../bundles/electrical.json"),
        ),
        parse(Vertical::Cleaning, include_str!("../bundles/cleaning.json")),
        parse(Vertical::Roofing, include_str!("../bundles/roofing.json")),
        parse(
            Vertical::Landscaping,
            include_str!("../bundles/landscaping.json"),
        ),
    ]
});

/// Registry lookup. Total: every [`Vertical`] has a bundle.
pub fn bundle_for(vertical: Vertical) -> &'static VerticalBundle {
    BUNDLES
        .iter()
        .find(|b| b.vertical == vertical)
        .unwrap_or_else(|| unreachable!("bundle registry covers all verticals"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_vertical_has_a_bundle() {
        for v in Vertical::ALL {
            let bundle = bundle_for(v);
            assert_eq!(bundle.vertical(), v);
        }
    }

    #[test]
    fn test_core_categories_present_everywhere() {
        // headlines and services anchor every page; the other categories
        // are allowed to be absent per vertical
        for v in Vertical::ALL {
            let bundle = bundle_for(v);
            assert!(bundle.category("headlines").is_some(), "{} headlines", v);
            assert!(bundle.category("services").is_some(), "{} services", v);
        }
    }

    #[test]
    fn test_missing_category_is_none() {
        for v in Vertical::ALL {
            assert!(bundle_for(v).category("pricingTables").is_none());
        }
    }

    #[test]
    fn test_bundles_carry_tokens_not_identities() {
        // Bundle copy is tokenized; no sample business name is baked in
        for v in Vertical::ALL {
            let headlines = bundle_for(v).category("headlines").unwrap();
            let text = headlines.to_string();
            assert!(
                text.contains("{{businessName}}"),
                "{} headlines should reference {{{{businessName}}}}",
                v
            );
        }
    }
}
