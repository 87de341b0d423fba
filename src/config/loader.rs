//! Configuration loading
//!
//! Reads the TOML deployment file, collects unknown keys as warnings, and
//! layers `IOTSIM_*` environment overrides on top.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{ConfigValidationError, IotSimError, IotSimResult};

use super::types::DeploymentSettings;

pub const ENV_VARIANT: &str = "IOTSIM_VARIANT";
pub const ENV_REGION: &str = "IOTSIM_REGION";
pub const ENV_WORKER_DESIRED_COUNT: &str = "IOTSIM_WORKER_DESIRED_COUNT";
pub const ENV_CERTIFICATE_ARN: &str = "IOTSIM_CERTIFICATE_ARN";
pub const ENV_WEB_USERNAME: &str = "IOTSIM_WEB_USERNAME";
pub const ENV_WEB_PASSWORD: &str = "IOTSIM_WEB_PASSWORD";

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> IotSimResult<(DeploymentSettings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (settings, warnings) = parse_with_warnings(&content, path)?;
    debug!(path = %path.display(), unknown_keys = warnings.len(), "loaded deployment settings");
    Ok((settings, warnings))
}

/// Parse TOML content; `origin` is only used for messages
pub fn parse_with_warnings(
    content: &str,
    origin: &Path,
) -> IotSimResult<(DeploymentSettings, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let settings: DeploymentSettings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| IotSimError::InvalidConfigFile {
        file: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::unknown_key(key.clone(), origin.to_path_buf())
                .with_line(find_line_number(content, &key))
                .with_suggestion(suggest_key(&key))
        })
        .collect();

    Ok((settings, warnings))
}

/// Apply environment variable overrides (IOTSIM_* prefix)
///
/// `lookup` abstracts the environment so tests never touch process state.
pub fn with_env_overrides<F>(mut settings: DeploymentSettings, lookup: F) -> IotSimResult<DeploymentSettings>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(variant) = lookup(ENV_VARIANT) {
        settings.variant = Some(variant);
    }

    if let Some(region) = lookup(ENV_REGION) {
        settings.region = Some(region);
    }

    if let Some(count) = lookup(ENV_WORKER_DESIRED_COUNT) {
        let parsed = count.trim().parse::<u32>().map_err(|_| {
            ConfigValidationError::InvalidEnvValue {
                var: ENV_WORKER_DESIRED_COUNT,
                value: count.clone(),
            }
        })?;
        settings.worker_desired_count = Some(parsed);
    }

    if let Some(arn) = lookup(ENV_CERTIFICATE_ARN) {
        settings.certificate_arn = Some(arn);
    }

    if let Some(username) = lookup(ENV_WEB_USERNAME) {
        settings.web_username = Some(username);
    }

    if let Some(password) = lookup(ENV_WEB_PASSWORD) {
        settings.web_password = Some(password);
    }

    Ok(settings)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "variant",
        "stack_name",
        "region",
        "allowed_cidrs",
        "worker_desired_count",
        "certificate_arn",
        "web_username",
        "web_password",
        "instance_type",
        "max_azs",
        "image_context",
        "mqtt",
        "wait_time",
        "qos",
        "message",
        "iot",
        "endpoint",
        "topic",
        "thing_name",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
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

/// Simple Levenshtein distance for typo detection
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
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
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
