use chrono::Local;

/// Supplies the display name of a job. Called once per descriptor.
pub trait JobNamer {
  fn job_name(&self) -> String;
}

impl JobNamer for str {
  fn job_name(&self) -> String {
    self.to_string()
  }
}

impl JobNamer for String {
  fn job_name(&self) -> String {
    self.clone()
  }
}

/// Names jobs `<prefix>-<YYYYmmdd-HHMMSS>` from the local clock.
#[derive(Debug, Clone)]
pub struct TimestampNamer {
  pub prefix: String,
}

impl Default for TimestampNamer {
  fn default() -> Self {
    Self {
      prefix: "jobqueue-worker".into(),
    }
  }
}

impl JobNamer for TimestampNamer {
  fn job_name(&self) -> String {
    format!("{}-{}", self.prefix, Local::now().format("%Y%m%d-%H%M%S"))
  }
}
