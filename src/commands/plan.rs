use std::path::PathBuf;

use anyhow::{Context, Result};

use iotsim::application::PlanOptions;
use iotsim::domain::entities::PlanFormat;
use iotsim::presentation::{factory, output, ConfigArgs};

pub fn cmd_plan(
    config: &ConfigArgs,
    format: PlanFormat,
    out: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let options = PlanOptions::new(config.source())
        .with_format(format)
        .with_out(out);
    let result = factory::create_plan_use_case()
        .execute(&options)
        .with_context(|| format!("cannot plan from {}", config.config.display()))?;

    super::print_warnings(&result.warnings, json);

    if result.written.is_none() {
        print!("{}", result.rendered);
    } else if json {
        output::emit(output::plan_event(&result))?;
    } else {
        print!("{}", output::render_plan_summary(&result));
    }
    Ok(())
}
