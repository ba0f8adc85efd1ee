//! Team image rendering.
//!
//! [`Renderer::render`] resolves options, paints onto a [`RasterSurface`] and
//! encodes the result as PNG. Painting happens in a fixed order, which is also
//! the z-order: background, event banner, team name, then each member slot in
//! member order.
//!
//! Missing assets never fail a render. A background image that cannot be
//! loaded leaves the solid background color; a portrait that cannot be loaded
//! is replaced by a grey placeholder box, and the player's label is drawn
//! either way.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{Catalog, CharacterRecord};
use crate::color::{parse_color, ColorError};
use crate::font::load_font;
use crate::layout::{compute_slots, LayoutParams, Rect};
use crate::options::{RenderOptions, RenderOptionsInput};
use crate::output::encode_png;
use crate::surface::{RasterSurface, Surface, TextStyle};
use crate::team::{Team, TeamMember};

/// Height reserved for the event banner, as a fraction of canvas height.
const BANNER_BAND_FRACTION: f32 = 0.08;
const BANNER_TOP_FRACTION: f32 = 0.02;
const BANNER_SIZE_FRACTION: f32 = 0.06;
const TITLE_TOP_FRACTION: f32 = 0.04;
const TITLE_SIZE_FRACTION: f32 = 0.065;

/// Largest accepted canvas side, in pixels.
pub const MAX_DIMENSION: u32 = 16384;

pub const PLACEHOLDER_SIZE: f32 = 160.0;
pub const PLACEHOLDER_COLOR: Rgba<u8> = Rgba([0x66, 0x66, 0x66, 0xFF]);
const CHARACTER_LABEL_COLOR: Rgba<u8> = Rgba([0xCC, 0xCC, 0xCC, 0xFF]);
const STROKE_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);

/// Encoded image plus the dimensions it was rendered at.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    /// PNG file bytes
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Error that aborts a render.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Width or height is zero or above [`MAX_DIMENSION`]
    #[error("image dimensions must be between 1 and {max} (got {width}x{height})", max = MAX_DIMENSION)]
    InvalidDimensions { width: u32, height: u32 },
    /// Font size is zero, negative or not finite
    #[error("font size must be positive (got {0})")]
    InvalidFontSize(f32),
    /// A color option did not parse
    #[error("invalid {field}: {source}")]
    InvalidColor { field: &'static str, source: ColorError },
    /// The canvas could not be encoded as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// An image asset that could not be read or decoded. Recovered locally.
#[derive(Debug, Error)]
#[error("cannot load '{}': {source}", path.display())]
struct AssetLoadError {
    path: PathBuf,
    source: image::ImageError,
}

fn load_image(path: &Path) -> Result<RgbaImage, AssetLoadError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| AssetLoadError { path: path.to_path_buf(), source })
}

/// Parsed colors of one render call.
#[derive(Debug, Clone, Copy)]
struct Colors {
    background: Rgba<u8>,
    font: Rgba<u8>,
}

impl Colors {
    fn from_options(opts: &RenderOptions) -> Result<Self, RenderError> {
        let parse = |field: &'static str, value: &str| {
            parse_color(value).map_err(|source| RenderError::InvalidColor { field, source })
        };
        Ok(Self {
            background: parse("background color", &opts.background_color)?,
            font: parse("font color", &opts.font_color)?,
        })
    }
}

fn validate(opts: &RenderOptions) -> Result<(), RenderError> {
    let in_range = |side: u32| (1..=MAX_DIMENSION).contains(&side);
    if !in_range(opts.width) || !in_range(opts.height) {
        return Err(RenderError::InvalidDimensions { width: opts.width, height: opts.height });
    }
    if !(opts.font_size.is_finite() && opts.font_size > 0.0) {
        return Err(RenderError::InvalidFontSize(opts.font_size));
    }
    Ok(())
}

/// Draws teams using a character catalog and an assets directory.
#[derive(Debug, Clone)]
pub struct Renderer<'c> {
    catalog: &'c Catalog,
    assets_dir: PathBuf,
}

impl<'c> Renderer<'c> {
    /// Portrait and relative background paths resolve against `assets_dir`.
    pub fn new(catalog: &'c Catalog, assets_dir: impl Into<PathBuf>) -> Self {
        Self { catalog, assets_dir: assets_dir.into() }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Render `team` to PNG bytes.
    pub fn render(
        &self,
        team: &Team,
        input: &RenderOptionsInput,
    ) -> Result<RenderResult, RenderError> {
        let opts = input.resolve();
        validate(&opts)?;
        let colors = Colors::from_options(&opts)?;

        let font = load_font(&opts.font_family, opts.font_path.as_deref(), &self.assets_dir);
        let mut surface = RasterSurface::new(opts.width, opts.height, font);
        self.paint_with(&mut surface, team, &opts, colors);

        let buffer = encode_png(surface.image())?;
        tracing::debug!(team = team.name(), width = opts.width, height = opts.height, "rendered");
        Ok(RenderResult { buffer, width: opts.width, height: opts.height })
    }

    /// Paint `team` onto any surface sized `opts.width` x `opts.height`.
    pub fn paint<S: Surface>(
        &self,
        surface: &mut S,
        team: &Team,
        opts: &RenderOptions,
    ) -> Result<(), RenderError> {
        validate(opts)?;
        let colors = Colors::from_options(opts)?;
        self.paint_with(surface, team, opts, colors);
        Ok(())
    }

    fn paint_with<S: Surface>(
        &self,
        surface: &mut S,
        team: &Team,
        opts: &RenderOptions,
        colors: Colors,
    ) {
        let width = opts.width as f32;
        let height = opts.height as f32;
        let center_x = width / 2.0;

        self.draw_background(surface, opts, colors);

        let band = match &opts.tournament {
            Some(name) => {
                let style = TextStyle::new(height * BANNER_SIZE_FRACTION, colors.font)
                    .bold()
                    .stroked(STROKE_COLOR);
                surface.draw_text_centered(name, center_x, height * BANNER_TOP_FRACTION, &style);
                height * BANNER_BAND_FRACTION
            }
            None => 0.0,
        };

        let title = TextStyle::new(height * TITLE_SIZE_FRACTION, colors.font).bold();
        surface.draw_text_centered(
            team.name(),
            center_x,
            height * TITLE_TOP_FRACTION + band,
            &title,
        );

        let params = LayoutParams::new(opts.layout, opts.width, opts.height).with_title_band(band);
        let slots = compute_slots(team.members().len(), &params);
        for (member, slot) in team.members().iter().zip(&slots) {
            let Some(character) = self.catalog.get_character_by_id(&member.character_id) else {
                tracing::debug!(id = %member.character_id, "character not in catalog, slot skipped");
                continue;
            };

            let portrait_path = self.assets_dir.join(&character.portrait);
            let label_top = match load_image(&portrait_path) {
                Ok(portrait) => {
                    surface.draw_image(&portrait, slot.portrait);
                    slot.portrait.bottom()
                }
                Err(e) => {
                    tracing::warn!("{}; drawing placeholder for {}", e, character.id);
                    let placeholder = Rect::new(
                        slot.center_x() - PLACEHOLDER_SIZE / 2.0,
                        slot.portrait.y,
                        PLACEHOLDER_SIZE,
                        PLACEHOLDER_SIZE,
                    );
                    surface.fill_rect(placeholder, PLACEHOLDER_COLOR);
                    placeholder.bottom()
                }
            };

            draw_labels(surface, member, character, slot.center_x(), label_top, opts, colors);
        }
    }

    fn draw_background<S: Surface>(&self, surface: &mut S, opts: &RenderOptions, colors: Colors) {
        surface.fill(colors.background);

        let Some(path) = &opts.background_image else {
            return;
        };
        match load_image(&self.assets_dir.join(path)) {
            Ok(image) => {
                let (w, h) = surface.dimensions();
                surface.draw_image(&image, Rect::new(0.0, 0.0, w as f32, h as f32));
            }
            Err(e) => tracing::warn!("{}; using background color", e),
        }
    }
}

/// Player name, then the character's localized name beneath it.
fn draw_labels<S: Surface>(
    surface: &mut S,
    member: &TeamMember,
    character: &CharacterRecord,
    center_x: f32,
    top: f32,
    opts: &RenderOptions,
    colors: Colors,
) {
    let size = opts.font_size;
    let player_top = top + size * 0.3;
    let player = TextStyle::new(size, colors.font).stroked(STROKE_COLOR);
    surface.draw_text_centered(&member.player_name, center_x, player_top, &player);

    let character_style = TextStyle::new(size * 0.75, CHARACTER_LABEL_COLOR);
    surface.draw_text_centered(
        &character.localized_name,
        center_x,
        player_top + size * 1.15,
        &character_style,
    );
}
