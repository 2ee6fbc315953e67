use clap::{Parser, Subcommand};
use git_powerline::commands::*;
use git_powerline::core::{
    config::{Config, SymbolMode},
    print_error,
    segment::Shell,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-powerline")]
#[command(about = "Git status segments for powerline-style shell prompts")]
#[command(version)]
struct Cli {
    /// Enable debug logging (on stderr)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the git prompt segment for the current directory
    Prompt {
        /// Shell the escapes are written for
        #[arg(long, value_enum)]
        shell: Option<Shell>,
        /// Symbol set matching the terminal font
        #[arg(long, value_enum)]
        mode: Option<SymbolMode>,
        /// Repository top-level paths that never get a segment (e.g. "/src/big,/src/huge")
        #[arg(long, value_delimiter = ',')]
        ignore_repos: Vec<PathBuf>,
        /// List the grouped segments as JSON instead of rendering them
        #[arg(long)]
        json: bool,
    },
    /// Print the repository counters as JSON
    Stats,
    /// Print the default configuration as JSON
    DefaultConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; keep them quiet unless asked so the prompt stays clean
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::DefaultConfig => execute_default_config(),
        Commands::Prompt {
            shell,
            mode,
            ignore_repos,
            json,
        } => Config::load(cli.config.as_deref()).and_then(|config| {
            let options = PromptOptions {
                shell,
                mode,
                ignore_repos,
            };
            execute_prompt(&options.apply(config), json)
        }),
        Commands::Stats => {
            Config::load(cli.config.as_deref()).and_then(|config| execute_stats(&config))
        }
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
