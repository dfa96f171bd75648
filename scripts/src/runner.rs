//! Selection and execution of deploy steps, along with the record of which
//! steps have already completed

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use tracing::{info, warn};

use crate::{
    errors::ScriptError,
    steps::{DeployContext, DeployStep},
};

/// The IDs of completed steps, each with the unix timestamp at which it
/// completed
pub struct Migrations {
    /// The file backing the record
    path: PathBuf,
    /// The completed step IDs
    completed: BTreeMap<String, u64>,
    /// Whether steps were recorded since loading
    updated: bool,
}

impl Migrations {
    /// Load the record at `path`; a missing file is an empty record
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let completed = if path.is_file() {
            let content = fs::read_to_string(path)
                .map_err(|e| ScriptError::ReadMigrations(e.to_string()))?;
            serde_json::from_str(&content)
                .map_err(|e| ScriptError::ReadMigrations(e.to_string()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path: path.to_path_buf(), completed, updated: false })
    }

    /// Whether the given step has completed
    pub fn contains(&self, id: &str) -> bool {
        self.completed.contains_key(id)
    }

    /// Record the given step as completed now
    pub fn record(&mut self, id: &str) {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
        self.completed.insert(id.to_string(), now);
        self.updated = true;
    }

    /// Whether any step was recorded since the record was loaded
    pub fn has_updates(&self) -> bool {
        self.updated
    }

    /// Write the record back to its file
    pub fn save(&self) -> Result<(), ScriptError> {
        let content = serde_json::to_string_pretty(&self.completed)
            .map_err(|e| ScriptError::WriteMigrations(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| ScriptError::WriteMigrations(e.to_string()))
    }
}

/// Whether a step is selected by the requested tags; no tags selects all
fn is_selected(step: &dyn DeployStep, tags: &[String]) -> bool {
    tags.is_empty() || step.tags().iter().any(|tag| tags.iter().any(|t| t == tag))
}

/// Run the steps selected by `tags`, in order, skipping those already
/// recorded in `migrations`.
///
/// A step asking to be recorded is written to the migrations file as soon as
/// it completes. The first failing step aborts the run and its error is
/// returned as is. Returns the IDs of the steps that ran.
pub fn run_steps(
    ctx: &DeployContext,
    steps: &[Box<dyn DeployStep>],
    tags: &[String],
    migrations: &mut Migrations,
) -> Result<Vec<&'static str>, ScriptError> {
    let mut ran = Vec::new();
    for step in steps {
        if !is_selected(step.as_ref(), tags) {
            continue;
        }

        let id = step.id();
        if migrations.contains(id) {
            info!("skipping {}, already completed", id);
            continue;
        }

        info!("running {}", id);
        if step.run(ctx).inspect_err(|e| warn!("{} failed: {}", id, e))? {
            migrations.record(id);
            migrations.save()?;
        }
        ran.push(id);
    }

    Ok(ran)
}
