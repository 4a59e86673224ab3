//! Configuration loading

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{PortalError, PortalResult};

use super::types::{Config, MissingIdPolicy, CONFIG_FILE_NAME};

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PortalResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PortalError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PortalError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(&content, &leaf),
                suggestion: suggest_key(&leaf),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the file config, then apply `PORTALMAP_*` environment overrides.
///
/// An explicit `config_path` must exist. Without one, `portalmap.toml` in
/// `cwd` is used if present, otherwise built-in defaults.
pub fn load_or_default(
    config_path: Option<&Path>,
    cwd: &Path,
) -> PortalResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match config_path {
        Some(path) => load_with_warnings(path)?,
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                load_with_warnings(&candidate)?
            } else {
                debug!(file = CONFIG_FILE_NAME, "no config file found, using defaults");
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (PORTALMAP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as [`with_env_overrides`] with an injectable variable lookup.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // PORTALMAP_INPUT
    if let Some(input) = lookup("PORTALMAP_INPUT").filter(|v| !v.is_empty()) {
        config.paths.input = input.into();
    }

    // PORTALMAP_OUTPUT
    if let Some(output) = lookup("PORTALMAP_OUTPUT").filter(|v| !v.is_empty()) {
        config.paths.output = output.into();
    }

    // PORTALMAP_FIELDS (comma-separated)
    if let Some(fields) = lookup("PORTALMAP_FIELDS") {
        let parsed: Vec<String> = fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.extract.fields = parsed;
        }
    }

    // PORTALMAP_MISSING_ID
    if let Some(policy) = lookup("PORTALMAP_MISSING_ID") {
        match policy.parse::<MissingIdPolicy>() {
            Ok(policy) => config.extract.missing_id = policy,
            Err(message) => warn!("ignoring PORTALMAP_MISSING_ID: {message}"),
        }
    }

    // PORTALMAP_PRETTY
    if let Some(val) = lookup("PORTALMAP_PRETTY") {
        config.output.pretty = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes");
    }

    config
}

fn validate(config: &Config, path: &Path) -> PortalResult<()> {
    if config.extract.fields.is_empty() {
        return Err(PortalError::Config {
            path: path.to_path_buf(),
            message: "extract.fields must name at least one field".to_string(),
        });
    }
    if config.extract.fields.iter().any(|f| f.trim().is_empty()) {
        return Err(PortalError::Config {
            path: path.to_path_buf(),
            message: "extract.fields must not contain empty names".to_string(),
        });
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "input",
        "output",
        "extract",
        "fields",
        "missing_id",
        "pretty",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
