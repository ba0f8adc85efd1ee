//! ggst-team - 3-on-3 team images for Guilty Gear -Strive-
//!
//! A team is a name plus exactly three players, each bound to a character
//! from a built-in catalog. This crate resolves character aliases, assembles
//! and validates teams, lays the members out horizontally or vertically and
//! renders the result to PNG.
//!
//! ```no_run
//! use ggst_team::catalog::Catalog;
//! use ggst_team::options::RenderOptionsInput;
//! use ggst_team::renderer::Renderer;
//! use ggst_team::team::Team;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin();
//! let team = Team::assemble(catalog, "Team Strive", "Alice:sol, Bob:ky, Carol:may")?;
//! let image = Renderer::new(catalog, "assets").render(&team, &RenderOptionsInput::default())?;
//! std::fs::write("team.png", &image.buffer)?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod font;
pub mod layout;
pub mod options;
pub mod output;
pub mod renderer;
pub mod surface;
pub mod team;
