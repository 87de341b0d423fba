use std::path::PathBuf;

use anyhow::{Context, Result};

use iotsim::presentation::{factory, output, ConfigArgs};

pub fn cmd_provision(
    config: &ConfigArgs,
    identity_dir: PathBuf,
    store: PathBuf,
    json: bool,
) -> Result<()> {
    let result = factory::create_provision_use_case(identity_dir, &store)
        .execute(&config.source())
        .with_context(|| format!("cannot provision identity into {}", store.display()))?;

    super::print_warnings(&result.warnings, json);
    if json {
        output::emit(output::provision_event(&result))?;
    } else {
        print!("{}", output::render_provision(&result));
    }
    Ok(())
}
