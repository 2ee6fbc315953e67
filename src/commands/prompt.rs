use crate::core::{
    config::{Config, SymbolMode},
    error::Result,
    git::GitCli,
    git_segment::segment_git,
    output::print_json,
    segment::{GroupedSegment, Powerline, SegmentSink, Shell},
};
use std::env;
use std::io::Write;
use std::path::PathBuf;

/// Command line overrides for the prompt command
#[derive(Debug, Default, Clone)]
pub struct PromptOptions {
    pub shell: Option<Shell>,
    pub mode: Option<SymbolMode>,
    pub ignore_repos: Vec<PathBuf>,
}

impl PromptOptions {
    /// Layer the command line overrides on top of the loaded config
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(shell) = self.shell {
            config.shell = shell;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        config.ignore_repos.extend(self.ignore_repos);
        config
    }
}

/// Render the git segment for the current directory.
///
/// Prints nothing at all outside a repository, in an ignored repository, or when a
/// git query fails. With `json` the grouped segments are listed instead, as an empty
/// array in those same cases.
pub fn execute_prompt(config: &Config, json: bool) -> Result<()> {
    if json {
        let mut segments: Vec<GroupedSegment> = Vec::new();
        append_prompt_segments(config, &mut segments);
        return print_json(&segments);
    }

    let rendered = render_prompt(config);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Build the prompt fragment for the current directory
pub fn render_prompt(config: &Config) -> String {
    let mut powerline = Powerline::new(config.shell, &config.symbols());
    append_prompt_segments(config, &mut powerline);
    powerline.render()
}

/// Append the git segments for the current directory, if it is inside a work tree
fn append_prompt_segments(config: &Config, sink: &mut dyn SegmentSink) {
    let current_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            // The shell can sit in a directory that was removed under it
            log::debug!("No git segment, current directory unavailable: {e}");
            return;
        }
    };

    match GitCli::open(&current_dir) {
        Ok(backend) => segment_git(&backend, config, sink),
        Err(e) if e.is_outside_repository() => {
            log::debug!("No git segment for {}: {e}", current_dir.display());
        }
        Err(e) => log::info!("No git segment for {}: {e}", current_dir.display()),
    }
}
