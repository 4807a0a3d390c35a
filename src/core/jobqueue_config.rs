use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::jobs::JobParams;

#[cfg(test)]
pub mod tests;

#[derive(Error, Debug)]
pub enum JobqueueConfigError {
  #[error("IO Error: {0}")]
  ConfyError(#[from] confy::ConfyError),
  #[error("Config file {0:?} not found")]
  ConfigNotFound(PathBuf),
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct JobqueueConfig {
  /// Prefix for generated job names when none is given explicitly
  pub name_prefix: Option<String>,
  pub defaults: JobParams,
}

/// Values given on the command line. `None` falls back to the config file.
#[derive(Default, Debug, Clone)]
pub struct JobOverrides {
  pub queue: Option<String>,
  pub project: Option<String>,
  pub processes: Option<u32>,
  pub memory: Option<String>,
  pub walltime: Option<String>,
}

impl JobqueueConfig {
  /// Merges `overrides` on top of the configured defaults.
  pub fn job_params(&self, overrides: &JobOverrides) -> JobParams {
    let defaults = &self.defaults;
    JobParams {
      queue: overrides.queue.clone().unwrap_or_else(|| defaults.queue.clone()),
      project: overrides.project.clone().or_else(|| defaults.project.clone()),
      processes: overrides.processes.unwrap_or(defaults.processes),
      memory: overrides.memory.clone().unwrap_or_else(|| defaults.memory.clone()),
      walltime: overrides
        .walltime
        .clone()
        .unwrap_or_else(|| defaults.walltime.clone()),
    }
  }
}

pub fn get_jobqueue_config_global() -> Result<JobqueueConfig, JobqueueConfigError> {
  let config: JobqueueConfig =
    confy::load("jobqueue", "config").map_err(JobqueueConfigError::ConfyError)?;
  debug!("Loaded global configuration: {:?}", config);
  Ok(config)
}

pub fn get_jobqueue_config_from_file(path: &Path) -> Result<JobqueueConfig, JobqueueConfigError> {
  if !path.is_file() {
    return Err(JobqueueConfigError::ConfigNotFound(path.to_path_buf()));
  }
  let config: JobqueueConfig = confy::load_path(path).map_err(JobqueueConfigError::ConfyError)?;
  debug!("Loaded configuration from {:?}: {:?}", path, config);
  Ok(config)
}

/// Writes a default configuration to `path`, or to the global location when
/// `path` is `None`. Returns where it was written.
pub fn init_jobqueue_config(path: Option<&Path>) -> Result<PathBuf, JobqueueConfigError> {
  let config = JobqueueConfig::default();
  match path {
    Some(path) => {
      set_jobqueue_config(path, &config)?;
      Ok(path.to_path_buf())
    }
    None => {
      let cfg_path = confy::get_configuration_file_path("jobqueue", "config")
        .map_err(JobqueueConfigError::ConfyError)?;
      confy::store("jobqueue", "config", config).map_err(JobqueueConfigError::ConfyError)?;
      Ok(cfg_path)
    }
  }
}

pub fn set_jobqueue_config(path: &Path, config: &JobqueueConfig) -> Result<(), JobqueueConfigError> {
  confy::store_path(path, config).map_err(JobqueueConfigError::ConfyError)?;
  Ok(())
}
