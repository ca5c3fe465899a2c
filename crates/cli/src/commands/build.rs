use anyhow::{Context, Result};
use foundlio_content::{PreviewStore, Vertical, VerticalResolver};
use foundlio_generator::generate_site;
use std::fs;
use std::path::PathBuf;

/// Build the static site for deployment.
///
/// Builds always render deployed data with the tenant's real
/// variables; preview overrides never reach a build.
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let business_path = path.join("business.json");
    if !business_path.exists() {
        anyhow::bail!(
            "business.json not found in {}\nRun 'foundlio init {}' first",
            path.display(),
            path.display()
        );
    }

    let business =
        foundlio_core::load_business(&business_path).context("Failed to load business.json")?;

    println!("✓ Loaded: {}", business.name);
    println!("  Location: {}", business.location_label());
    println!("  Vertical: {}", business.vertical);
    println!();

    let deployed = Vertical::from_slug_or_default(&business.vertical);
    let store = PreviewStore::new(deployed);
    let resolver = VerticalResolver::new(&business, store);

    let site = generate_site(&path, &business, &resolver, false)?;

    println!("📄 Writing pages...");
    for (page_path, html) in &site.pages {
        let dest = output.join(page_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dest, html).with_context(|| format!("Failed to write {}", dest.display()))?;
    }
    println!("   ✓ Wrote {} page(s)", site.pages.len());

    println!("🎨 Writing assets...");
    for (asset_path, data) in &site.assets {
        let dest = output.join(asset_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, data).with_context(|| format!("Failed to write {}", dest.display()))?;
    }
    println!("   ✓ Wrote {} asset(s)", site.assets.len());

    // Static files (logos, photos) ship as-is
    let assets_src = path.join("assets");
    if assets_src.is_dir() {
        let assets_out = output.join("assets");
        fs::create_dir_all(&assets_out)?;
        let mut copied = 0;
        for entry in fs::read_dir(&assets_src)? {
            let entry = entry?;
            if entry.path().is_file() {
                fs::copy(entry.path(), assets_out.join(entry.file_name()))?;
                copied += 1;
            }
        }
        println!("   ✓ Copied {} static file(s)", copied);
    }

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_build_fresh_site() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("site");
        crate::commands::init::run(site.clone(), "roofing")
            .await
            .unwrap();

        let output = dir.path().join("out");
        run(site, output.clone()).await.unwrap();

        assert!(output.join("index.html").exists());
        assert!(output.join("styles.css").exists());

        let index = fs::read_to_string(output.join("index.html")).unwrap();
        // Seeded content substituted with the scaffolded business
        assert!(index.contains("Summit Ridge Roofing"));
        assert!(!index.contains("{{businessName}}"));
        // No preview chrome in builds
        assert!(!index.contains("design-panel"));
    }

    #[tokio::test]
    async fn test_build_writes_post_pages() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("site");
        crate::commands::init::run(site.clone(), "hvac")
            .await
            .unwrap();

        let output = dir.path().join("out");
        run(site, output.clone()).await.unwrap();

        assert!(output.join("posts/pre-summer-ac-checklist.html").exists());
    }

    #[tokio::test]
    async fn test_build_without_business_json_fails() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path().to_path_buf(), dir.path().join("out")).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("business.json not found")
        );
    }
}
