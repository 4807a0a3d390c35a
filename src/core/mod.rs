pub mod jobqueue_config;
pub mod jobs;


use std::path::Path;

use log::debug;

use crate::core::jobqueue_config::{JobOverrides, JobqueueConfig};
use crate::core::jobs::{JobDescriptor, SLURM, SchedulerBackend, TimestampNamer};

pub struct Jobqueue {
  config: JobqueueConfig,
  backend: SchedulerBackend,
}

#[derive(thiserror::Error, Debug)]
pub enum JobqueueError {
  #[error("Config Error: {0}")]
  ConfigError(#[from] jobqueue_config::JobqueueConfigError),
  #[error("Job Error: {0}")]
  JobError(#[from] jobs::JobError),
}

impl Jobqueue {
  /// Loads the configuration from `config_path`, or the global one if `None`.
  pub fn new(config_path: Option<&Path>) -> Result<Self, JobqueueError> {
    let _ = env_logger::try_init();

    let config = match config_path {
      Some(path) => jobqueue_config::get_jobqueue_config_from_file(path)?,
      None => jobqueue_config::get_jobqueue_config_global()?,
    };
    Ok(Self::with_config(config))
  }

  pub fn with_config(config: JobqueueConfig) -> Self {
    Jobqueue {
      config,
      backend: SLURM,
    }
  }

  pub fn backend(&self) -> &SchedulerBackend {
    &self.backend
  }

  /// Builds a descriptor from the configured defaults and `overrides`. Without
  /// an explicit `name` one is generated from the configured prefix.
  pub fn build_job(
    &self,
    name: Option<&str>,
    overrides: &JobOverrides,
  ) -> Result<JobDescriptor, JobqueueError> {
    let params = self.config.job_params(overrides);
    let job = match name {
      Some(name) => self.backend.descriptor(&params, name)?,
      None => {
        let namer = match &self.config.name_prefix {
          Some(prefix) => TimestampNamer {
            prefix: prefix.clone(),
          },
          None => TimestampNamer::default(),
        };
        self.backend.descriptor(&params, &namer)?
      }
    };
    debug!(
      "Built {} job '{}' (memory {}, walltime {}s)",
      self.backend.name,
      job.name(),
      job.memory(),
      job.walltime_seconds()
    );
    Ok(job)
  }
}
