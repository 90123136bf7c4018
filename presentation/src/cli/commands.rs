//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for bedrock-playground
#[derive(Parser, Debug)]
#[command(name = "bedrock-playground")]
#[command(author, version, about = "Ask any Bedrock model a question from one prompt")]
#[command(long_about = r#"
Bedrock Playground sends a free-text question to whichever Bedrock model you
select — Anthropic, Meta, Mistral, Cohere, Amazon, or AI21 — and prints the
answer. The vendor is resolved from the model identifier's prefix; each
vendor's wire schema and generation parameters are handled for you.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./playground.toml     Project-level config
3. ~/.config/bedrock-playground/config.toml   Global config

Example:
  bedrock-playground "What is the capital of France?"
  bedrock-playground -m meta.llama3-70b-instruct-v1:0 "Explain borrowing in Rust"
  bedrock-playground --chat -m cohere.command-text-v14
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model identifier to invoke (e.g. anthropic.claude-v2)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// List the model catalog and exit
    #[arg(short, long)]
    pub list_models: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the header banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
