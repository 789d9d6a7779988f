//! Simulated workflow installation
//!
//! Nothing is written to disk: installing waits for the configured delay and
//! reports where the workflow would have been placed.

use serde::Serialize;
use std::time::Duration;

use crate::types::WorkflowRecord;

pub const DEFAULT_INSTALL_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_TARGET_DIR: &str = ".github/workflows/";

/// Outcome of a simulated install
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallReport {
    pub id: String,
    pub title: String,
    pub target_dir: String,
    pub run_command: String,
}

/// Pretends to install workflows after a fixed delay
#[derive(Debug, Clone)]
pub struct WorkflowInstaller {
    delay: Duration,
    target_dir: String,
}

impl WorkflowInstaller {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            target_dir: DEFAULT_TARGET_DIR.to_string(),
        }
    }

    /// Wait out the simulated install and report the result
    pub async fn install(&self, workflow: &WorkflowRecord) -> InstallReport {
        log::info!("Installing workflow {} ({})", workflow.id, workflow.title);
        tokio::time::sleep(self.delay).await;

        InstallReport {
            id: workflow.id.clone(),
            title: workflow.title.clone(),
            target_dir: self.target_dir.clone(),
            run_command: format!("agentflow run {}", workflow.id),
        }
    }
}

impl Default for WorkflowInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALL_DELAY)
    }
}
