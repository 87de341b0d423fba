use anyhow::{Context, Result};

use iotsim::presentation::{factory, output, ConfigArgs};

pub fn cmd_validate(config: &ConfigArgs, json: bool) -> Result<()> {
    let result = factory::create_validate_use_case()
        .execute(&config.source())
        .with_context(|| format!("invalid config {}", config.config.display()))?;

    if json {
        output::emit(output::validate_event(&result))?;
    } else {
        super::print_warnings(&result.warnings, json);
        print!("{}", output::render_validate(&result));
    }
    Ok(())
}
