use anyhow::{Context, Result};
use foundlio_content::{CATEGORIES, PreviewStore, Vertical, VerticalResolver};
use foundlio_generator::site::resolve_category;
use std::path::PathBuf;

/// Print one content category exactly as the site would render it:
/// the deployed data substituted with the tenant's variables, or the
/// selected vertical's override substituted with its sample identity
/// when `--vertical` differs from the deployed one.
pub async fn run(path: PathBuf, category: &str, vertical: Option<&str>) -> Result<()> {
    if !CATEGORIES.contains(&category) {
        anyhow::bail!(
            "Unknown category '{}'. Known categories: {}",
            category,
            CATEGORIES.join(", ")
        );
    }

    let business = foundlio_core::load_business(path.join("business.json"))
        .context("Failed to load business.json")?;

    let deployed = Vertical::from_slug_or_default(&business.vertical);
    let store = PreviewStore::new(deployed);
    let resolver = VerticalResolver::new(&business, store);

    if let Some(slug) = vertical {
        let selected = match Vertical::from_slug(slug) {
            Some(v) => v,
            None => {
                eprintln!("⚠ Unknown vertical '{}', using {}", slug, Vertical::DEFAULT);
                Vertical::DEFAULT
            }
        };
        resolver.store().select(selected);
    }

    let source = if resolver.store().is_deployed() {
        "deployed data"
    } else {
        "preview override"
    };

    match resolve_category(&path, &resolver, category)? {
        Some(value) => {
            eprintln!(
                "• {} from {} ({})",
                category,
                source,
                resolver.store().selected()
            );
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        None => {
            eprintln!("• no '{}' content from {}", category, source);
        }
    }

    Ok(())
}
