//! Diff Use Case

use std::path::Path;

use similar::{ChangeTag, TextDiff};
use tracing::debug;

use crate::application::plan::{PlanOptions, PlanUseCase};
use crate::application::ConfigSource;
use crate::domain::entities::PlanFormat;
use crate::domain::ports::{IdentityProvisioner, PlanWriter};
use crate::error::{IotSimError, IotSimResult};

use super::result::{DiffResult, DiffStats};

const CONTEXT_LINES: usize = 3;

pub struct DiffUseCase<P, W>
where
    P: IdentityProvisioner,
    W: PlanWriter + Clone,
{
    planner: PlanUseCase<P, W>,
    reader: W,
}

impl<P, W> DiffUseCase<P, W>
where
    P: IdentityProvisioner,
    W: PlanWriter + Clone,
{
    pub fn new(provisioner: P, writer: W) -> Self {
        Self {
            planner: PlanUseCase::new(provisioner, writer.clone()),
            reader: writer,
        }
    }

    pub fn execute(&self, source: &ConfigSource, against: &Path) -> IotSimResult<DiffResult> {
        let previous = canonical(&self.reader.read(against)?, against)?;

        let options = PlanOptions::new(source.clone()).with_format(PlanFormat::Json);
        let current = self.planner.execute(&options)?;

        let previous_digest = previous
            .get("digest")
            .and_then(|d| d.as_str())
            .map(str::to_string);
        let previous_text = render(&previous)?;
        let current_text = render(&serde_json::to_value(&current.plan)?)?;

        let diff = TextDiff::from_lines(previous_text.as_str(), current_text.as_str());
        let mut stats = DiffStats::default();
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => stats.insertions += 1,
                ChangeTag::Delete => stats.deletions += 1,
                ChangeTag::Equal => {}
            }
        }

        let unified = if stats.insertions + stats.deletions == 0 {
            String::new()
        } else {
            let old_name = against.display().to_string();
            diff.unified_diff()
                .context_radius(CONTEXT_LINES)
                .header(&old_name, "derived")
                .to_string()
        };

        debug!(
            insertions = stats.insertions,
            deletions = stats.deletions,
            "plan diff computed"
        );

        Ok(DiffResult {
            against: against.to_path_buf(),
            current_digest: current.plan.digest,
            previous_digest,
            unified,
            stats,
        })
    }
}

/// Parse a written plan; YAML plans are accepted too
///
/// Both sides go through `serde_json::Value` so keys are sorted the same way.
fn canonical(content: &str, path: &Path) -> IotSimResult<serde_json::Value> {
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(json_err) => serde_yaml_ng::from_str(content).map_err(|_| {
            IotSimError::InvalidConfigFile {
                file: path.to_path_buf(),
                message: format!("not a plan document: {}", json_err),
            }
        }),
    }
}

fn render(value: &serde_json::Value) -> IotSimResult<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
