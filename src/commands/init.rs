//! Init command - write a commented config template

use std::path::Path;

use anyhow::{bail, Result};
use serde_json::json;

use iotsim::config::render_template;
use iotsim::domain::value_objects::Variant;
use iotsim::infrastructure::fs::atomic_write;
use iotsim::presentation::output;

pub fn cmd_init(variant: Variant, path: &Path, force: bool, json: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    atomic_write(path, render_template(variant).as_bytes())?;

    if json {
        output::emit(json!({
            "event": "init",
            "path": path.display().to_string(),
            "variant": variant.as_str(),
        }))?;
    } else {
        println!("✓ Wrote {} template to {}", variant, path.display());
    }
    Ok(())
}
