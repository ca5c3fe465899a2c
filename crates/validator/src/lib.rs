//! Site-directory validation: business record checks, per-category
//! content checks, and `{{token}}` linting against the variable map.

use foundlio_content::{CATEGORIES, Vertical, collect_tokens, default_variables};
use foundlio_core::BusinessRecord;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    fn new() -> Self {
        ValidationReport {
            errors: vec![],
            warnings: vec![],
            info: vec![],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn note(&mut self, msg: impl Into<String>) {
        self.info.push(msg.into());
    }
}

/// Validate a site directory: `business.json` plus `data/*.json`.
///
/// Never returns an error; every problem lands in the report so a
/// content author sees all of them in one pass.
pub fn validate_site(dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::new();

    let business_path = dir.join("business.json");
    if !business_path.exists() {
        report.error(format!("business.json not found in {}", dir.display()));
        return report;
    }

    let business = match foundlio_core::load_business(&business_path) {
        Ok(b) => b,
        Err(e) => {
            report.error(format!("business.json: {}", e));
            return report;
        }
    };

    check_business(&business, &mut report);
    check_content(dir, &business, &mut report);
    report
}

fn check_business(business: &BusinessRecord, report: &mut ValidationReport) {
    report.note(format!(
        "business: {} ({}, {})",
        business.name, business.address.city, business.address.state
    ));

    match Vertical::from_slug(&business.vertical) {
        Some(v) => report.note(format!("vertical: {}", v.label())),
        None => report.warn(format!(
            "unknown vertical '{}', preview overrides will use the {} bundle",
            business.vertical,
            Vertical::DEFAULT.label()
        )),
    }

    if business.review_count == 0 && business.rating > 0.0 {
        report.warn(format!(
            "rating {} with zero reviews looks fabricated",
            business.rating
        ));
    }

    if business.licenses.is_empty() {
        report.warn("no license numbers listed, trust badges will be empty");
    }

    if business.hours.schedule.is_empty() {
        report.note("no structured hours; only the free-text display form will render");
    }

    for range in &business.hours.schedule {
        if range.open >= range.close {
            report.error(format!(
                "hours: '{}' opens at {} but closes at {}",
                range.days, range.open, range.close
            ));
        }
    }
}

fn check_content(dir: &Path, business: &BusinessRecord, report: &mut ValidationReport) {
    let data_dir = dir.join("data");
    if !data_dir.is_dir() {
        report.error(format!("data directory not found in {}", dir.display()));
        return;
    }

    let known = default_variables(business);
    let mut unknown_tokens: BTreeSet<(String, String)> = BTreeSet::new();

    for category in CATEGORIES {
        let path = data_dir.join(format!("{}.json", category));
        if !path.exists() {
            report.warn(format!(
                "data/{}.json missing, that section will not render",
                category
            ));
            continue;
        }

        let value = match read_json(&path) {
            Ok(v) => v,
            Err(e) => {
                report.error(format!("data/{}.json: {}", category, e));
                continue;
            }
        };

        check_category(category, &value, report);

        let mut tokens = BTreeSet::new();
        collect_tokens(&value, &mut tokens);
        for token in tokens {
            if !known.contains_key(&token) {
                unknown_tokens.insert((token, format!("data/{}.json", category)));
            }
        }
    }

    // SEO templates are content too
    let mut seo_tokens = BTreeSet::new();
    collect_tokens(
        &Value::String(business.seo.title_template.clone()),
        &mut seo_tokens,
    );
    collect_tokens(
        &Value::String(business.seo.description_template.clone()),
        &mut seo_tokens,
    );
    for token in seo_tokens {
        if !known.contains_key(&token) {
            unknown_tokens.insert((token, "business.json seo".to_string()));
        }
    }

    for (token, source) in &unknown_tokens {
        report.warn(format!(
            "token '{{{{{}}}}}' in {} has no variable and will render literally",
            token, source
        ));
    }

    // Stray JSON outside the known categories is usually a typo'd name
    for entry in WalkDir::new(&data_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(stem) = name.strip_suffix(".json")
            && !CATEGORIES.contains(&stem)
        {
            report.warn(format!(
                "data/{} is not a recognized content category",
                name
            ));
        }
    }
}

fn check_category(category: &str, value: &Value, report: &mut ValidationReport) {
    match category {
        "services" => {
            let Some(items) = value.as_array() else {
                report.error("data/services.json must be an array");
                return;
            };
            if items.is_empty() {
                report.error("data/services.json is empty, a service business needs services");
            }
            for (i, item) in items.iter().enumerate() {
                if item.get("name").and_then(Value::as_str).is_none() {
                    report.error(format!("data/services.json[{}] has no 'name'", i));
                }
            }
        }
        "testimonials" => {
            let Some(items) = value.as_array() else {
                report.error("data/testimonials.json must be an array");
                return;
            };
            for (i, item) in items.iter().enumerate() {
                let quote = item.get("quote").and_then(Value::as_str).unwrap_or("");
                if quote.trim().is_empty() {
                    report.warn(format!("data/testimonials.json[{}] has an empty quote", i));
                }
            }
        }
        "posts" => {
            let Some(items) = value.as_array() else {
                report.error("data/posts.json must be an array");
                return;
            };
            for (i, item) in items.iter().enumerate() {
                for field in ["slug", "title", "body"] {
                    if item.get(field).and_then(Value::as_str).is_none() {
                        report.error(format!("data/posts.json[{}] has no '{}'", i, field));
                    }
                }
            }
        }
        "faqs" => {
            if let Some(items) = value.as_array() {
                for (i, item) in items.iter().enumerate() {
                    if item.get("question").and_then(Value::as_str).is_none()
                        || item.get("answer").and_then(Value::as_str).is_none()
                    {
                        report.warn(format!(
                            "data/faqs.json[{}] is missing question or answer",
                            i
                        ));
                    }
                }
            }
        }
        _ => {}
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
