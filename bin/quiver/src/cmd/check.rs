//! Check command - validate configuration and site files

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use quiver_core::{Config, NavItem};

use super::load_config;

/// Fragments every page loads.
const FRAGMENTS: [&str; 2] = ["header", "footer"];

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and the files it points at.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and site files");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    match load_config(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            println!("\nChecking site files...");
            check_site(&config, Path::new(&config.server.root), &mut result);
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e:#}"));
            println!("  ✗ Configuration invalid: {e:#}");
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check the files under `root` that the configuration refers to.
fn check_site(config: &Config, root: &Path, result: &mut ValidationResult) {
    if !root.is_dir() {
        result.add_error(format!("Site root does not exist: {}", root.display()));
        return;
    }

    for name in FRAGMENTS {
        let file = config.fragment_url(name);
        if root.join(file.trim_start_matches('/')).is_file() {
            println!("  ✓ {file}");
        } else {
            result.add_error(format!("Missing fragment: {file}"));
        }
    }

    if !root.join("index.html").is_file() {
        result.add_warning("Site root has no index.html");
    }

    for url in local_nav_urls(&config.nav) {
        if !root.join(url).is_file() {
            result.add_warning(format!("Navigation link points to a missing page: {url}"));
        }
    }

    if config.nav.is_empty() {
        result.add_warning("No navigation items configured");
    }
}

/// Nav URLs that name a file in the site, without query or fragment.
fn local_nav_urls(items: &[NavItem]) -> Vec<&str> {
    let mut urls = Vec::new();
    for item in items {
        let path = item.url.split(['?', '#']).next().unwrap_or_default();
        let external = item.url.contains("://") || item.url.starts_with("mailto:");
        if !path.is_empty() && !external {
            urls.push(path);
        }
        urls.extend(local_nav_urls(&item.children));
    }
    urls
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn config_with_nav(nav: Vec<NavItem>) -> Config {
        let mut config = Config::from_toml_str(
            r#"
[site]
title = "Test"
base_url = "https://example.com"
"#,
        )
        .unwrap();
        config.nav = nav;
        config
    }

    fn site_with_fragments() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("components")).unwrap();
        fs::write(dir.path().join("components/header.html"), "<header></header>").unwrap();
        fs::write(dir.path().join("components/footer.html"), "<footer></footer>").unwrap();
        fs::write(dir.path().join("index.html"), "<body></body>").unwrap();
        dir
    }

    #[test]
    fn test_check_site_complete() {
        let dir = site_with_fragments();
        let config = config_with_nav(vec![NavItem::new("Home", "index.html")]);
        let mut result = ValidationResult::default();

        check_site(&config, dir.path(), &mut result);

        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(!result.has_warnings(), "{:?}", result.warnings);
    }

    #[test]
    fn test_check_site_missing_fragment() {
        let dir = site_with_fragments();
        fs::remove_file(dir.path().join("components/footer.html")).unwrap();
        let config = config_with_nav(vec![NavItem::new("Home", "index.html")]);
        let mut result = ValidationResult::default();

        check_site(&config, dir.path(), &mut result);

        assert_eq!(result.errors, vec!["Missing fragment: components/footer.html"]);
    }

    #[test]
    fn test_check_site_absolute_fragment_path() {
        let dir = site_with_fragments();
        let mut config = config_with_nav(vec![NavItem::new("Home", "index.html")]);
        config.fragments.base_path = "/components".to_string();
        let mut result = ValidationResult::default();

        check_site(&config, dir.path(), &mut result);

        assert!(!result.has_errors(), "{:?}", result.errors);
    }

    #[test]
    fn test_check_site_missing_nav_page_warns() {
        let dir = site_with_fragments();
        let config = config_with_nav(vec![
            NavItem::new("Data", "#").with_children(vec![NavItem::new("Pricing", "pricing.html")]),
        ]);
        let mut result = ValidationResult::default();

        check_site(&config, dir.path(), &mut result);

        assert!(!result.has_errors());
        assert_eq!(
            result.warnings,
            vec!["Navigation link points to a missing page: pricing.html"]
        );
    }

    #[test]
    fn test_check_site_missing_root() {
        let dir = TempDir::new().unwrap();
        let config = config_with_nav(Vec::new());
        let mut result = ValidationResult::default();

        check_site(&config, &dir.path().join("nope"), &mut result);

        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_local_nav_urls() {
        let nav = vec![
            NavItem::new("Home", "index.html"),
            NavItem::new("Search", "insider-trading.html?q=nvda"),
            NavItem::new("Docs", "https://example.com/docs"),
            NavItem::new("Menu", "#").with_children(vec![NavItem::new("Faq", "faq.html#top")]),
        ];
        assert_eq!(
            local_nav_urls(&nav),
            vec!["index.html", "insider-trading.html", "faq.html"]
        );
    }

    #[test]
    fn test_run_strict_fails_on_warnings() {
        let dir = site_with_fragments();
        let config_path = dir.path().join("quiver.toml");
        let root = dir.path().display().to_string().replace('\\', "/");
        fs::write(
            &config_path,
            format!(
                r#"
[site]
title = "Test"
base_url = "https://example.com"

[server]
root = "{root}"
"#
            ),
        )
        .unwrap();

        // No nav items configured: one warning.
        assert!(run(&config_path, false).is_ok());
        assert!(run(&config_path, true).is_err());
    }
}
