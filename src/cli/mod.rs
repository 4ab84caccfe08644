// CLI module for instantseek2api

use clap::Parser;

/// instantseek2api - OpenAI-compatible chat completions gateway for the InstantSeek API
#[derive(Parser, Debug)]
#[command(name = "instantseek2api", version, about, long_about = None)]
pub struct Args {
    /// Bind address override (takes precedence over config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port override (takes precedence over config file)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}
