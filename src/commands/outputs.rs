use anyhow::{Context, Result};

use iotsim::application::PlanOptions;
use iotsim::presentation::{factory, output, ConfigArgs};

pub fn cmd_outputs(config: &ConfigArgs, json: bool) -> Result<()> {
    let result = factory::create_plan_use_case()
        .execute(&PlanOptions::new(config.source()))
        .with_context(|| format!("cannot derive outputs from {}", config.config.display()))?;

    super::print_warnings(&result.warnings, json);
    if json {
        output::emit(output::outputs_event(result.outputs()))?;
    } else {
        print!("{}", output::render_outputs(result.outputs()));
    }
    Ok(())
}
