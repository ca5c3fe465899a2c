use anyhow::Result;
use foundlio_validator::validate_site;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating site at: {}", path.display());

    let report = validate_site(&path);

    for line in &report.info {
        println!("  • {}", line);
    }
    for line in &report.warnings {
        println!("  ⚠ {}", line);
    }
    for line in &report.errors {
        println!("  ✗ {}", line);
    }

    println!();
    if report.is_ok() {
        if report.warnings.is_empty() {
            println!("✓ Site is valid");
        } else {
            println!("✓ Site is valid ({} warning(s))", report.warnings.len());
        }
        Ok(())
    } else {
        anyhow::bail!(
            "Validation failed with {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_validate_fails_on_empty_directory() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path().to_path_buf()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_validate_passes_on_fresh_init() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("site");
        crate::commands::init::run(site.clone(), "electrical")
            .await
            .unwrap();
        run(site).await.unwrap();
    }
}
