use crate::core::jobs::{JobDescriptor, SchedulerBackend};

pub const SUBMIT_COMMAND: &str = "sbatch";
pub const CANCEL_COMMAND: &str = "scancel";

pub const SLURM: SchedulerBackend = SchedulerBackend {
  name: "slurm",
  submit_command: SUBMIT_COMMAND,
  cancel_command: CANCEL_COMMAND,
  render_header: render_slurm_header,
};

pub fn render_slurm_header(job: &JobDescriptor) -> String {
  let mut header = String::new();
  header.push_str(&format!("#SBATCH -J {}\n", job.name()));
  header.push_str(&format!("#SBATCH -n {}\n", job.processes()));
  header.push_str(&format!("#SBATCH -p {}\n", job.queue()));
  header.push_str(&format!("#SBATCH -A {}\n", job.project().unwrap_or("")));
  header.push_str(&format!("#SBATCH -t {}\n", job.walltime()));
  header.push_str(&format!("#SBATCH -e {}.err\n", job.name()));
  header.push_str(&format!("#SBATCH -o {}.out\n", job.name()));
  header.push('\n');
  header.push_str("export LANG=\"en_US.utf8\"\n");
  header.push_str("export LANGUAGE=\"en_US.utf8\"\n");
  header.push_str("export LC_ALL=\"en_US.utf8\"\n");
  header
}
