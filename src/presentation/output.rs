//! Output Rendering
//!
//! Text renderers return strings; the binary decides where they go.
//! JSON output is one event object per line on stdout.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

use serde_json::{json, Value};

use crate::application::{DiffResult, PlanResult, ProvisionResult, ValidateResult};
use crate::config::{ConfigWarning, DeploymentConfig, WebAuth};
use crate::domain::value_objects::FrontDoorProtocol;

const MASK: &str = "********";

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

/// Convenience helper that writes to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// `user:********`
pub fn masked_credentials(auth: &WebAuth) -> String {
    format!("{}:{}", auth.username(), MASK)
}

/// Replace the plaintext credential pair wherever it appears
pub fn mask_secrets(text: &str, config: &DeploymentConfig) -> String {
    match config.web_auth() {
        Some(auth) => text.replace(&auth.credential_pair(), &masked_credentials(auth)),
        None => text.to_string(),
    }
}

pub fn render_warnings(warnings: &[ConfigWarning]) -> String {
    let mut out = String::new();
    for warning in warnings {
        let _ = writeln!(out, "⚠ Warning: {}", warning);
        if let Some(suggestion) = &warning.suggestion {
            let _ = writeln!(out, "  hint: {}", suggestion);
        }
    }
    out
}

fn warnings_json(warnings: &[ConfigWarning]) -> Value {
    Value::Array(
        warnings
            .iter()
            .map(|w| {
                json!({
                    "message": w.to_string(),
                    "line": w.line,
                    "suggestion": w.suggestion,
                })
            })
            .collect(),
    )
}

fn front_door(config: &DeploymentConfig) -> FrontDoorProtocol {
    FrontDoorProtocol::for_certificate(config.certificate_arn())
}

fn config_summary(out: &mut String, config: &DeploymentConfig) {
    let protocol = front_door(config);
    let cidrs: Vec<String> = config.allowed_cidrs().iter().map(|c| c.to_string()).collect();

    let _ = writeln!(out, "  Variant:      {}", config.variant());
    let _ = writeln!(out, "  Stack:        {}", config.stack_name());
    let _ = writeln!(out, "  Region:       {}", config.region());
    let _ = writeln!(out, "  Front door:   {}:{}", protocol, protocol.port());
    if cidrs.is_empty() {
        let _ = writeln!(out, "  Allowed:      (none)");
    } else {
        let _ = writeln!(out, "  Allowed:      {}", cidrs.join(", "));
    }
    match config.worker_desired_count() {
        Some(count) => {
            let _ = writeln!(out, "  Workers:      {}", count);
        }
        None => {
            let _ = writeln!(out, "  Workers:      1 (fixed)");
        }
    }
    match config.web_auth() {
        Some(auth) => {
            let _ = writeln!(out, "  Web auth:     {}", masked_credentials(auth));
        }
        None => {
            let _ = writeln!(out, "  Web auth:     disabled");
        }
    }
    let _ = writeln!(out, "  Thing:        {}", config.iot().thing_name);
}

fn config_json(config: &DeploymentConfig) -> Value {
    let protocol = front_door(config);
    json!({
        "variant": config.variant().as_str(),
        "stack_name": config.stack_name(),
        "region": config.region(),
        "front_door": { "protocol": protocol.to_string(), "port": protocol.port() },
        "allowed_cidrs": config.allowed_cidrs().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        "worker_desired_count": config.worker_desired_count(),
        "web_auth": config.web_auth().map(|auth| auth.username()),
        "thing_name": config.iot().thing_name.as_str(),
    })
}

pub fn render_validate(result: &ValidateResult) -> String {
    let mut out = String::from("✓ Configuration is valid\n\n");
    config_summary(&mut out, &result.config);
    out
}

pub fn validate_event(result: &ValidateResult) -> Value {
    json!({
        "event": "validate",
        "valid": true,
        "config": config_json(&result.config),
        "warnings": warnings_json(&result.warnings),
    })
}

pub fn render_plan_summary(result: &PlanResult) -> String {
    let mut out = String::new();
    match &result.written {
        Some(path) => {
            let _ = writeln!(out, "✓ Plan written to {}", path.display());
        }
        None => {
            let _ = writeln!(out, "✓ Plan derived");
        }
    }
    let _ = writeln!(out);
    config_summary(&mut out, &result.config);
    let _ = writeln!(out, "  Resources:    {}", result.resource_count());
    let _ = writeln!(out, "  Rules:        {}", result.topology.rules().len());
    let _ = writeln!(out, "  Digest:       {}", result.plan.digest);
    mask_secrets(&out, &result.config)
}

pub fn plan_event(result: &PlanResult) -> Value {
    json!({
        "event": "plan",
        "digest": result.plan.digest.as_str(),
        "resources": result.resource_count(),
        "rules": result.topology.rules().len(),
        "path": result.written.as_ref().map(|p| p.display().to_string()),
        "outputs": result.outputs(),
        "warnings": warnings_json(&result.warnings),
    })
}

pub fn render_outputs(outputs: &BTreeMap<String, String>) -> String {
    let width = outputs.keys().map(String::len).max().unwrap_or(0);
    let mut out = String::new();
    for (name, value) in outputs {
        let _ = writeln!(out, "{:<width$}  {}", name, value, width = width);
    }
    out
}

pub fn outputs_event(outputs: &BTreeMap<String, String>) -> Value {
    json!({
        "event": "outputs",
        "outputs": outputs,
    })
}

pub fn render_diff(result: &DiffResult) -> String {
    if !result.has_changes() {
        return format!(
            "✓ No changes against {} ({})\n",
            result.against.display(),
            result.current_digest.short()
        );
    }
    let mut out = result.unified.clone();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} insertion(s), {} deletion(s)",
        result.stats.insertions, result.stats.deletions
    );
    out
}

pub fn diff_event(result: &DiffResult) -> Value {
    json!({
        "event": "diff",
        "against": result.against.display().to_string(),
        "changed": result.has_changes(),
        "insertions": result.stats.insertions,
        "deletions": result.stats.deletions,
        "current_digest": result.current_digest.as_str(),
        "previous_digest": result.previous_digest,
    })
}

pub fn render_provision(result: &ProvisionResult) -> String {
    format!(
        "✓ Published identity for {}\n  Certificate:  {}\n  Private key:  {}\n",
        result.thing_name,
        result.paths.cert_path(),
        result.paths.key_path()
    )
}

pub fn provision_event(result: &ProvisionResult) -> Value {
    json!({
        "event": "provision",
        "thing_name": result.thing_name.as_str(),
        "cert_path": result.paths.cert_path(),
        "key_path": result.paths.key_path(),
    })
}

pub fn render_error(err: &anyhow::Error) -> String {
    format!("✗ Error: {:#}\n", err)
}

pub fn error_event(err: &anyhow::Error) -> Value {
    json!({
        "event": "error",
        "message": format!("{:#}", err),
    })
}
