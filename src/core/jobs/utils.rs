use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::core::jobs::JobError;

static TIME_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(?:(\d+)-)?(\d+):([0-5]\d):([0-5]\d)$").unwrap());

/// Removes every whitespace character from a memory specification ("7 GB" -> "7GB").
pub fn normalize_memory(memory: &str) -> String {
  memory.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse time string in format "HH:MM:SS" or "D-HH:MM:SS" to seconds.
/// Hours are not capped at 23, SLURM accepts e.g. "48:00:00".
pub fn parse_time_to_seconds(time_str: &str) -> Result<u64, JobError> {
  let invalid = || JobError::InvalidTimeFormat(time_str.to_string());
  let caps = TIME_RE.captures(time_str).ok_or_else(invalid)?;

  let field = |i: usize| -> Result<u64, JobError> {
    match caps.get(i) {
      Some(m) => m.as_str().parse::<u64>().map_err(|_| invalid()),
      None => Ok(0),
    }
  };
  let (days, hours, minutes, seconds) = (field(1)?, field(2)?, field(3)?, field(4)?);

  days
    .checked_mul(86_400)
    .and_then(|d| hours.checked_mul(3_600).and_then(|h| d.checked_add(h)))
    .and_then(|t| t.checked_add(minutes * 60 + seconds))
    .ok_or_else(invalid)
}

/// Writes `script` to `path` and makes it executable.
pub fn write_job_script(path: &Path, script: &str) -> Result<(), JobError> {
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent)?;
    }
  }
  fs::write(path, script)?;
  make_script_executable(path)?;
  info!("Job script written to {:?}", path);
  Ok(())
}

/// Make a script file executable (Unix only)
#[cfg(unix)]
fn make_script_executable(script_path: &Path) -> Result<(), JobError> {
  use std::os::unix::fs::PermissionsExt;
  let metadata = fs::metadata(script_path)?;
  let mut perms = metadata.permissions();
  perms.set_mode(0o755);
  fs::set_permissions(script_path, perms)?;
  Ok(())
}

#[cfg(not(unix))]
fn make_script_executable(_script_path: &Path) -> Result<(), JobError> {
  Ok(())
}
