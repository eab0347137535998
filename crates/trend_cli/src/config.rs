//! trend.toml handling

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use trend_chart::TrendOptions;

/// File picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "trend.toml";

/// Load chart options.
///
/// An explicit `path` must exist. Without one, `trend.toml` in the working
/// directory is used if present, and built-in defaults otherwise.
pub fn load_options(path: Option<&Path>) -> Result<TrendOptions> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "No config found at {}. Run `trend init` to create one.",
                    path.display()
                );
            }
            load_file(path)
        }
        None => {
            let local = Path::new(CONFIG_FILE);
            if local.is_file() {
                load_file(local)
            } else {
                tracing::debug!("no {CONFIG_FILE} in working directory, using defaults");
                Ok(TrendOptions::default())
            }
        }
    }
}

fn load_file(path: &Path) -> Result<TrendOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let options = parse_options(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(options)
}

pub fn parse_options(content: &str) -> Result<TrendOptions> {
    Ok(toml::from_str(content)?)
}

/// Serialize options to TOML
pub fn to_toml(options: &TrendOptions) -> Result<String> {
    toml::to_string_pretty(options).context("Failed to serialize config")
}

/// Write a default config to `path`. Refuses to clobber an existing file
/// unless `force` is set.
pub fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }
    let content = to_toml(&TrendOptions::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses_back_to_defaults() {
        let text = to_toml(&TrendOptions::default()).unwrap();
        assert!(text.contains("[chart]"));
        assert!(text.contains("[auto_draw]"));
        assert_eq!(parse_options(&text).unwrap(), TrendOptions::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("trend init"));
    }

    #[test]
    fn write_default_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        write_default(&path, false).unwrap();
        assert!(write_default(&path, false).is_err());
        write_default(&path, true).unwrap();

        assert_eq!(load_options(Some(&path)).unwrap(), TrendOptions::default());
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[chart]\nradius = \"wide\"\n").unwrap();

        let err = load_options(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }
}
