//! treepick CLI - pick one entry from a list or tree in the terminal
//!
//! Usage: treepick [OPTIONS] [CHOICES]...
//!
//! Prints `Selected <choice>` (or a JSON line with `--json`) and exits with
//! status 130 when the prompt is cancelled.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use treepick::presentation::{output, Cli, OutputFormat};
use treepick::ui::terminal::detect_capabilities;
use treepick::ui::theme;
use treepick::{PromptConfig, PromptError, RenderOptions, SelectionPrompt, StyledText};

/// Conventional status for termination by SIGINT
const EXIT_CANCELLED: u8 = 130;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let (config, warnings) = PromptConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    let options = RenderOptions::resolve(detect_capabilities(), &config.output, cli.color);
    output::print_config_warnings(&warnings, options.unicode);

    let format = OutputFormat::from_json_flag(cli.json);

    loop {
        let prompt = build_prompt(cli, &config, options)?;

        match prompt.show_interactive() {
            Ok(choice) => println!("{}", output::selection_line(format, &choice)),
            Err(PromptError::Cancelled) => {
                if let Some(line) = output::cancelled_line(format) {
                    println!("{}", line);
                }
                return Ok(ExitCode::from(EXIT_CANCELLED));
            }
            Err(e) => return Err(e).context("selection prompt failed"),
        }

        if !cli.repeat {
            return Ok(ExitCode::SUCCESS);
        }
    }
}

/// Config first, then command-line flags on top
fn build_prompt(
    cli: &Cli,
    config: &PromptConfig,
    options: RenderOptions,
) -> Result<SelectionPrompt<String>> {
    let mut prompt = SelectionPrompt::new()
        .render_options(options)
        .apply_config(config)?;

    if let Some(mode) = cli.mode {
        prompt = prompt.mode(mode.into());
    }
    if let Some(page_size) = cli.page_size {
        prompt = prompt.page_size(page_size)?;
    }
    if let Some(title) = &cli.title {
        prompt = prompt.title(title.as_str());
    }
    if let Some(text) = &cli.more_choices {
        prompt = prompt.more_choices_text(StyledText::styled(text.as_str(), theme::hint_style()));
    }

    prompt = prompt.add_choices(cli.choices.iter().cloned());
    for group in &cli.groups {
        prompt = prompt.add_choice_group(group.name.clone(), group.choices.iter().cloned());
    }

    Ok(prompt)
}
