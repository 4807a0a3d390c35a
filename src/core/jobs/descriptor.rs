use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::jobs::JobError;
use crate::core::jobs::utils::{normalize_memory, parse_time_to_seconds};

/// Parameters of a job before validation. Also the shape of the `[defaults]`
/// table in the configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct JobParams {
  pub queue: String,
  pub project: Option<String>,
  pub processes: u32,
  pub memory: String,
  pub walltime: String,
}

impl Default for JobParams {
  fn default() -> Self {
    Self {
      queue: String::new(),
      project: None,
      processes: 8,
      memory: "7GB".into(),
      walltime: "00:30:00".into(),
    }
  }
}

/// A validated job submission. Fields cannot change after construction, so the
/// header rendered at construction time always matches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescriptor {
  name: String,
  queue: String,
  project: Option<String>,
  processes: u32,
  walltime: String,
  memory: String,
  header: String,
}

impl JobDescriptor {
  pub(super) fn new(
    params: &JobParams,
    name: String,
    render_header: fn(&JobDescriptor) -> String,
  ) -> Result<Self, JobError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
      return Err(JobError::InvalidParameter(format!(
        "job name must be non-empty and contain no whitespace, got {:?}",
        name
      )));
    }
    if params.processes == 0 {
      return Err(JobError::InvalidParameter(
        "processes must be a positive integer".to_string(),
      ));
    }
    parse_time_to_seconds(&params.walltime)
      .map_err(|_| JobError::InvalidParameter(format!("walltime {:?}", params.walltime)))?;

    let mut descriptor = JobDescriptor {
      name,
      queue: params.queue.clone(),
      project: params.project.clone(),
      processes: params.processes,
      walltime: params.walltime.clone(),
      // Carried for logging only, never rendered
      memory: normalize_memory(&params.memory),
      header: String::new(),
    };
    descriptor.header = render_header(&descriptor);
    debug!("Job script: \n {}", descriptor.header);
    Ok(descriptor)
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn queue(&self) -> &str {
    &self.queue
  }

  pub fn project(&self) -> Option<&str> {
    self.project.as_deref()
  }

  pub fn processes(&self) -> u32 {
    self.processes
  }

  pub fn walltime(&self) -> &str {
    &self.walltime
  }

  pub fn memory(&self) -> &str {
    &self.memory
  }

  pub fn walltime_seconds(&self) -> u64 {
    // Validated in `new`
    parse_time_to_seconds(&self.walltime).unwrap_or_default()
  }

  /// The rendered scheduler header.
  pub fn render(&self) -> &str {
    &self.header
  }

  /// Complete batch script: shebang, header, then `command`.
  pub fn job_script(&self, command: &str) -> String {
    format!("#!/usr/bin/env bash\n\n{}\n{}\n", self.header, command)
  }
}
