//! Generate command implementation

use std::env;
use std::process::ExitCode;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::{load_config, resolve_path, ConfigError};
use crate::options::RenderOptionsInput;
use crate::output::{generate_output_path, write_png, OutputError};
use crate::renderer::{RenderError, Renderer};
use crate::team::{Team, TeamError};

use super::{GenerateArgs, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Debug, Error)]
enum GenerateError {
    #[error("team name (-t, --team) is required")]
    MissingTeam,
    #[error("members (-m, --members) are required")]
    MissingMembers,
    #[error("cannot read current directory: {0}")]
    CurrentDir(std::io::Error),
    #[error(transparent)]
    Team(#[from] TeamError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Execute the generate command
pub fn run_generate(args: &GenerateArgs) -> ExitCode {
    match generate(args) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn generate(args: &GenerateArgs) -> Result<(), GenerateError> {
    let team_name = args.team.as_deref().ok_or(GenerateError::MissingTeam)?;
    let members = args.members.as_deref().ok_or(GenerateError::MissingMembers)?;

    let catalog = Catalog::builtin();
    let team = Team::assemble(catalog, team_name, members)?;

    let loaded = load_config(args.config.as_deref())?;
    let root = loaded.root.as_deref();
    let cwd = env::current_dir().map_err(GenerateError::CurrentDir)?;

    let assets_dir = args
        .assets
        .clone()
        .or_else(|| loaded.config.paths.assets.as_deref().map(|p| resolve_path(root, p)))
        .unwrap_or_else(|| cwd.join("assets"));
    let output_dir = args
        .output
        .clone()
        .or_else(|| loaded.config.paths.output.as_deref().map(|p| resolve_path(root, p)))
        .unwrap_or_else(|| cwd.join("output"));
    tracing::debug!(assets = %assets_dir.display(), output = %output_dir.display(), "directories");

    let cli_options = RenderOptionsInput {
        layout: args.layout,
        width: args.width,
        height: args.height,
        background_image: args.background.clone(),
        tournament: args.event.clone(),
        ..Default::default()
    };
    let options = cli_options.or(loaded.config.render);

    let result = Renderer::new(catalog, assets_dir).render(&team, &options)?;

    let path = generate_output_path(&output_dir, team.name());
    write_png(&result.buffer, &path)?;

    println!("Generated: {}", path.display());
    println!("  Size: {}x{}px", result.width, result.height);
    Ok(())
}
