use std::path::Path;

use anyhow::{Context, Result};

use iotsim::presentation::{factory, output, ConfigArgs};

pub fn cmd_diff(config: &ConfigArgs, against: &Path, json: bool) -> Result<()> {
    let result = factory::create_diff_use_case()
        .execute(&config.source(), against)
        .with_context(|| format!("cannot diff against {}", against.display()))?;

    if json {
        output::emit(output::diff_event(&result))?;
    } else {
        print!("{}", output::render_diff(&result));
    }
    Ok(())
}
