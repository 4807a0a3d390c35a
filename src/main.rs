mod cli;
mod core;

fn main() -> anyhow::Result<()> {
  cli::main()
}
