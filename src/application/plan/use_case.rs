//! Plan Use Case
//!
//! load -> validate -> provision -> assemble -> emit -> render -> write

use tracing::info;

use crate::domain::ports::{IdentityProvisioner, PlanWriter};
use crate::domain::services::{emit, StackAssembler};
use crate::error::IotSimResult;

use super::options::PlanOptions;
use super::result::PlanResult;

pub struct PlanUseCase<P, W>
where
    P: IdentityProvisioner,
    W: PlanWriter,
{
    assembler: StackAssembler<P>,
    writer: W,
}

impl<P, W> PlanUseCase<P, W>
where
    P: IdentityProvisioner,
    W: PlanWriter,
{
    pub fn new(provisioner: P, writer: W) -> Self {
        Self {
            assembler: StackAssembler::new(provisioner),
            writer,
        }
    }

    pub fn execute(&self, options: &PlanOptions) -> IotSimResult<PlanResult> {
        let (config, warnings) = options.source.load()?;

        let topology = self.assembler.assemble(&config)?;
        let plan = emit(&topology)?.into_plan()?;
        let rendered = plan.render(options.format)?;

        if let Some(out) = &options.out {
            self.writer.write(out, &rendered)?;
            info!(
                path = %out.display(),
                digest = %plan.digest,
                format = options.format.as_str(),
                "plan written"
            );
        }

        Ok(PlanResult {
            config,
            topology,
            plan,
            rendered,
            written: options.out.clone(),
            warnings,
        })
    }
}
