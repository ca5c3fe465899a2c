use anyhow::{Context, Result};
use chrono::Datelike;
use foundlio_content::{CATEGORIES, Vertical, bundle_for, sample_profile};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

/// Initialize a new site directory with smart defaults.
///
/// Seeds `business.json` from the chosen vertical's sample profile and
/// copies that vertical's bundle categories into `data/` with their
/// `{{variable}}` tokens intact, ready for a content author to edit.
pub async fn run(path: PathBuf, vertical_slug: &str) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    let Some(vertical) = Vertical::from_slug(vertical_slug) else {
        let known: Vec<&str> = Vertical::ALL.iter().map(|v| v.slug()).collect();
        anyhow::bail!(
            "Unknown vertical '{}'. Known verticals: {}",
            vertical_slug,
            known.join(", ")
        );
    };

    let business_path = path.join("business.json");
    if business_path.exists() {
        anyhow::bail!(
            "business.json already exists at {}\nHint: Delete it first or use a different directory",
            business_path.display()
        );
    }

    fs::create_dir_all(path.join("data")).context("Failed to create data directory")?;
    fs::create_dir_all(path.join("assets")).context("Failed to create assets directory")?;

    generate_business_json(&path, vertical)?;

    // Seed content from the vertical's bundle, tokens left in place
    let bundle = bundle_for(vertical);
    let mut seeded = 0;
    for category in CATEGORIES {
        if let Some(value) = bundle.category(category) {
            let pretty = serde_json::to_string_pretty(value)?;
            fs::write(path.join("data").join(format!("{}.json", category)), pretty)
                .with_context(|| format!("Failed to write data/{}.json", category))?;
            seeded += 1;
        }
    }

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── business.json        ← Edit this to set the real business details");
    println!("  ├── assets/              ← Drop logos and photos here");
    println!("  └── data/                ← {} content files seeded from the {} bundle", seeded, vertical.label());

    println!("\nNext steps:");
    println!("  1. Edit business.json (name, phone, address, established year)");
    println!("  2. Rework the copy in data/ (keep the {{{{variable}}}} tokens)");
    println!("  3. Validate: foundlio validate {}", path.display());
    println!("  4. Preview: foundlio preview {}", path.display());

    Ok(())
}

fn generate_business_json(path: &std::path::Path, vertical: Vertical) -> Result<()> {
    let profile = sample_profile(vertical);
    let year = chrono::Local::now().year();

    let template = json!({
        "name": profile.name,
        "phone": { "display": profile.phone, "dial": profile.phone_dial },
        "email": profile.email,
        "vertical": vertical.slug(),
        "address": {
            "street": "123 Main St",
            "city": profile.city,
            "state": profile.state,
            "zip": "85001"
        },
        "hours": {
            "display": "Mon-Sat 7am-6pm",
            "schedule": [
                { "days": "Mon-Fri", "open": "07:00", "close": "18:00" },
                { "days": "Sat", "open": "08:00", "close": "16:00" }
            ]
        },
        "licenses": [],
        "certifications": [],
        "established": year,
        "rating": 5.0,
        "reviewCount": 0,
        "description": format!("{} serving {} and surrounding areas.", vertical.label(), profile.city),
        "tagline": profile.tagline,
        "features": {
            "emergencyService": true,
            "financing": false,
            "freeEstimates": true
        },
        "responseTime": "2 hours",
        "social": {},
        "theme": "default",
        "seo": {
            "titleTemplate": format!("{{{{businessName}}}} | {} in {{{{city}}}}", vertical.label()),
            "descriptionTemplate": "{{businessName}}: {{tagline}}. Call {{phone}}."
        }
    });

    let content = serde_json::to_string_pretty(&template)?;

    // Round-parse before writing; a template the loader rejects is a
    // bug in this generator
    foundlio_core::parse_business_str(&content)
        .context("Generated business.json is invalid - this is a bug in the template generator")?;

    fs::write(path.join("business.json"), content)?;
    Ok(())
}
