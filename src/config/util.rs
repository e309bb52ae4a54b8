//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Resolve a site-relative route against the configured site URL.
///
/// The base URL's path is kept, so subdirectory deployments produce
/// prefixed links. Returns `None` if the base URL is invalid.
///
/// # Examples
/// ```ignore
/// canonical_url("https://example.com", "/music/")        -> Some("https://example.com/music/")
/// canonical_url("https://example.com/blog/", "music/")   -> Some("https://example.com/blog/music/")
/// canonical_url("https://example.com/blog", "/")         -> Some("https://example.com/blog/")
/// canonical_url("invalid", "/")                          -> None
/// ```
pub fn canonical_url(base: &str, route: &str) -> Option<String> {
    let mut parsed = url::Url::parse(base).ok()?;

    let prefix = parsed.path().trim_end_matches('/').to_string();
    let route = route.trim_start_matches('/');
    parsed.set_path(&format!("{prefix}/{route}"));
    parsed.set_query(None);
    parsed.set_fragment(None);

    Some(parsed.into())
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/static/images/  ← cwd
/// /home/user/site/folio.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`] but starting from `start`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            canonical_url("https://example.com", "/music/"),
            Some("https://example.com/music/".to_string())
        );

        // Subdirectory deployment keeps the prefix
        assert_eq!(
            canonical_url("https://example.github.io/site/", "about/"),
            Some("https://example.github.io/site/about/".to_string())
        );

        // Root route
        assert_eq!(
            canonical_url("https://example.com/blog", "/"),
            Some("https://example.com/blog/".to_string())
        );

        // Query and fragment are dropped
        assert_eq!(
            canonical_url("https://example.com/?ref=x#top", "/music/"),
            Some("https://example.com/music/".to_string())
        );

        assert_eq!(canonical_url("invalid-url", "/"), None);
    }

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("static/images");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("folio.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, dir.path().join("folio.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file_from(dir.path(), Path::new("no-such-config.toml")).is_none());
    }
}
