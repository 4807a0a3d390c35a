use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::core::{Jobqueue, jobqueue_config, jobqueue_config::JobOverrides, jobs};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
  /// Configuration file to use instead of the global one
  #[arg(long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Commands,
}

#[derive(Args)]
struct JobArgs {
  #[arg(long)]
  name: Option<String>,
  #[arg(long)]
  queue: Option<String>,
  #[arg(long)]
  project: Option<String>,
  #[arg(long)]
  processes: Option<u32>,
  #[arg(long)]
  memory: Option<String>,
  #[arg(long)]
  walltime: Option<String>,
  /// Write to this file instead of stdout
  #[arg(long, short)]
  output: Option<PathBuf>,
}

impl JobArgs {
  fn overrides(&self) -> JobOverrides {
    JobOverrides {
      queue: self.queue.clone(),
      project: self.project.clone(),
      processes: self.processes,
      memory: self.memory.clone(),
      walltime: self.walltime.clone(),
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Print the scheduler header for a job
  Header {
    #[command(flatten)]
    job: JobArgs,
  },
  /// Print a complete job script running COMMAND
  Script {
    #[command(flatten)]
    job: JobArgs,
    #[arg(long)]
    command: String,
  },
  /// Print the submit and cancel commands of the scheduler
  Commands {},
  /// Write a default configuration file
  InitConfig {
    #[arg(long)]
    path: Option<PathBuf>,
  },
}

pub fn main() -> Result<()> {
  let cli = Cli::parse();

  match &cli.command {
    Commands::InitConfig { path } => {
      let _ = env_logger::try_init();
      let path = jobqueue_config::init_jobqueue_config(path.as_deref())
        .context("Failed to write configuration file")?;
      println!("✅ Configuration written to {:?}", path);
    }
    Commands::Commands {} => {
      let jobqueue = Jobqueue::new(cli.config.as_deref()).context("Failed to load configuration")?;
      let backend = jobqueue.backend();
      println!("submit: {}", backend.submit_command);
      println!("cancel: {}", backend.cancel_command);
    }
    Commands::Header { job } => {
      let jobqueue = Jobqueue::new(cli.config.as_deref()).context("Failed to load configuration")?;
      let descriptor = jobqueue
        .build_job(job.name.as_deref(), &job.overrides())
        .context("Failed to build job")?;
      emit(descriptor.render(), &job.output)?;
    }
    Commands::Script { job, command } => {
      let jobqueue = Jobqueue::new(cli.config.as_deref()).context("Failed to load configuration")?;
      let descriptor = jobqueue
        .build_job(job.name.as_deref(), &job.overrides())
        .context("Failed to build job")?;
      emit(&descriptor.job_script(command), &job.output)?;
    }
  }
  Ok(())
}

fn emit(text: &str, output: &Option<PathBuf>) -> Result<()> {
  match output {
    Some(path) => jobs::write_job_script(path, text)
      .with_context(|| format!("Failed to write {:?}", path))?,
    None => print!("{}", text),
  }
  Ok(())
}
