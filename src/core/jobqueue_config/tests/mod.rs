use crate::core::jobqueue_config::{
  JobOverrides, JobqueueConfig, JobqueueConfigError, get_jobqueue_config_from_file,
  init_jobqueue_config, set_jobqueue_config,
};
use crate::core::jobs::JobParams;

pub fn init_jobqueue_for_tests() -> tempfile::TempDir {
  let temp_dir = tempfile::tempdir().unwrap();
  let path = temp_dir.path().join("jobqueue.toml");
  assert!(init_jobqueue_config(Some(path.as_path())).is_ok());
  temp_dir
}

#[test]
fn jobqueue_init_test() {
  let temp_dir = tempfile::tempdir().unwrap();
  let path = temp_dir.path().join("jobqueue.toml");
  let written = init_jobqueue_config(Some(path.as_path())).unwrap();
  assert_eq!(written, path);
  assert!(path.exists());
  assert_eq!(
    get_jobqueue_config_from_file(&path).unwrap(),
    JobqueueConfig::default()
  );
}

#[test]
fn missing_config_file_test() {
  let temp_dir = tempfile::tempdir().unwrap();
  let result = get_jobqueue_config_from_file(&temp_dir.path().join("nope.toml"));
  assert!(matches!(result, Err(JobqueueConfigError::ConfigNotFound(_))));
}

#[test]
fn set_and_get_defaults_test() {
  let temp_dir = init_jobqueue_for_tests();
  let path = temp_dir.path().join("jobqueue.toml");
  let mut config = get_jobqueue_config_from_file(&path).unwrap();
  config.name_prefix = Some("dask-worker".to_string());
  config.defaults.queue = "regular".to_string();
  config.defaults.project = Some("acct1".to_string());
  config.defaults.processes = 16;
  assert!(set_jobqueue_config(&path, &config).is_ok());

  let loaded = get_jobqueue_config_from_file(&path).unwrap();
  assert_eq!(loaded, config);
}

#[test]
fn partial_config_file_uses_defaults_test() {
  let temp_dir = tempfile::tempdir().unwrap();
  let path = temp_dir.path().join("jobqueue.toml");
  std::fs::write(&path, "[defaults]\nqueue = \"debug\"\n").unwrap();

  let config = get_jobqueue_config_from_file(&path).unwrap();
  assert_eq!(config.name_prefix, None);
  assert_eq!(
    config.defaults,
    JobParams {
      queue: "debug".to_string(),
      ..JobParams::default()
    }
  );
}

#[test]
fn overrides_take_precedence_test() {
  let config = JobqueueConfig {
    name_prefix: None,
    defaults: JobParams {
      queue: "regular".to_string(),
      project: Some("acct1".to_string()),
      ..JobParams::default()
    },
  };
  let overrides = JobOverrides {
    queue: Some("debug".to_string()),
    processes: Some(2),
    ..JobOverrides::default()
  };

  let params = config.job_params(&overrides);
  assert_eq!(params.queue, "debug");
  assert_eq!(params.project.as_deref(), Some("acct1"));
  assert_eq!(params.processes, 2);
  assert_eq!(params.memory, "7GB");
  assert_eq!(params.walltime, "00:30:00");
}
