//! Command dispatch: maps parsed arguments onto the enclosure tree.

use std::io;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{sample_zoo, Animal, EnclosureCollection};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    match &cli.command {
        Some(Commands::Show { indent }) => _show(&settings, *indent),
        Some(Commands::Tree) => _tree(&settings),
        Some(Commands::Leaves) => _leaves(),
        Some(Commands::Animals) => _animals(&settings),
        Some(Commands::Config) => _config(&settings),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn zoo_root() -> CliResult<EnclosureCollection> {
    Ok(sample_zoo()?.into())
}

#[instrument(skip(settings))]
fn _show(settings: &Settings, indent: Option<usize>) -> CliResult<()> {
    let indent_width = indent.unwrap_or(settings.indent_width);
    debug!("indent_width: {}", indent_width);
    let root = zoo_root()?;
    output::info(&root.render(indent_width));
    Ok(())
}

#[instrument(skip(settings))]
fn _tree(settings: &Settings) -> CliResult<()> {
    let root = zoo_root()?;
    if settings.ascii {
        // Plain indented listing instead of box-drawing glyphs
        output::info(&root.render(settings.indent_width));
    } else {
        output::info(&root.to_tree());
    }
    Ok(())
}

#[instrument]
fn _leaves() -> CliResult<()> {
    let root = zoo_root()?;
    for leaf in root.leaves() {
        output::info(leaf.name());
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _animals(settings: &Settings) -> CliResult<()> {
    let root = zoo_root()?;
    for leaf in root.leaves() {
        output::header(leaf.name());
        for animal in leaf.animals() {
            output::detail(&animal_line(animal, settings.show_ages));
        }
    }
    Ok(())
}

fn animal_line(animal: &Animal, show_ages: bool) -> String {
    if show_ages {
        format!("{} [{}]", animal, animal.species())
    } else {
        format!("{} [{}]", animal.name(), animal.species())
    }
}

#[instrument(skip(settings))]
fn _config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}
