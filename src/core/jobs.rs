mod descriptor;
mod naming;
mod slurm;
mod utils;


use thiserror::Error;

pub use descriptor::{JobDescriptor, JobParams};
pub use naming::{JobNamer, TimestampNamer};
pub use slurm::{CANCEL_COMMAND, SLURM, SUBMIT_COMMAND};
pub use utils::{normalize_memory, parse_time_to_seconds, write_job_script};

#[derive(Error, Debug)]
pub enum JobError {
  #[error("Invalid Parameter: {0}")]
  InvalidParameter(String),
  #[error("Invalid Time Format: {0}")]
  InvalidTimeFormat(String),
  #[error("IO Error: {0}")]
  IoError(#[from] std::io::Error),
}

/// What varies between scheduler backends: the two binaries the lifecycle
/// manager shells out to and the function producing the script header.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerBackend {
  pub name: &'static str,
  pub submit_command: &'static str,
  pub cancel_command: &'static str,
  pub render_header: fn(&JobDescriptor) -> String,
}

impl SchedulerBackend {
  /// Validates `params`, takes the job name from `namer` and renders the header
  /// with this backend.
  pub fn descriptor<N: JobNamer + ?Sized>(
    &self,
    params: &JobParams,
    namer: &N,
  ) -> Result<JobDescriptor, JobError> {
    JobDescriptor::new(params, namer.job_name(), self.render_header)
  }
}
