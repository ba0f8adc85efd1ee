//! Render options and their defaults.
//!
//! [`RenderOptionsInput`] is the partial form every layer supplies (config
//! file, command line, library callers): each field is an `Option`, and `None`
//! means "not supplied", never "reset to nothing". [`RenderOptionsInput::resolve`]
//! lays the input over [`RenderOptions::default`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::layout::Orientation;

/// Fully resolved visual parameters for one render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    pub layout: Orientation,
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub background_image: Option<PathBuf>,
    pub font_family: String,
    /// Explicit font file, bypassing family lookup
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    pub font_color: String,
    /// Event name drawn as a banner above the team name
    pub tournament: Option<String>,
}

impl RenderOptions {
    pub const DEFAULT_WIDTH: u32 = 1920;
    pub const DEFAULT_HEIGHT: u32 = 1080;
    pub const DEFAULT_BACKGROUND_COLOR: &'static str = "#1a1a2e";
    pub const DEFAULT_FONT_FAMILY: &'static str = "Noto Sans JP";
    pub const DEFAULT_FONT_SIZE: f32 = 48.0;
    pub const DEFAULT_FONT_COLOR: &'static str = "#ffffff";
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Orientation::Horizontal,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            background_color: Self::DEFAULT_BACKGROUND_COLOR.to_string(),
            background_image: None,
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            font_path: None,
            font_size: Self::DEFAULT_FONT_SIZE,
            font_color: Self::DEFAULT_FONT_COLOR.to_string(),
            tournament: None,
        }
    }
}

/// Partially specified render options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptionsInput {
    pub layout: Option<Orientation>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background_color: Option<String>,
    pub background_image: Option<PathBuf>,
    pub font_family: Option<String>,
    pub font_path: Option<PathBuf>,
    pub font_size: Option<f32>,
    pub font_color: Option<String>,
    pub tournament: Option<String>,
}

impl RenderOptionsInput {
    /// Layer `self` over `fallback`: fields present here win, absent fields
    /// are taken from `fallback`.
    pub fn or(self, fallback: RenderOptionsInput) -> RenderOptionsInput {
        RenderOptionsInput {
            layout: self.layout.or(fallback.layout),
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
            background_color: self.background_color.or(fallback.background_color),
            background_image: self.background_image.or(fallback.background_image),
            font_family: self.font_family.or(fallback.font_family),
            font_path: self.font_path.or(fallback.font_path),
            font_size: self.font_size.or(fallback.font_size),
            font_color: self.font_color.or(fallback.font_color),
            tournament: self.tournament.or(fallback.tournament),
        }
    }

    /// Merge over the defaults.
    pub fn resolve(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            layout: self.layout.unwrap_or(defaults.layout),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            background_color: self
                .background_color
                .clone()
                .unwrap_or(defaults.background_color),
            background_image: self.background_image.clone().or(defaults.background_image),
            font_family: self.font_family.clone().unwrap_or(defaults.font_family),
            font_path: self.font_path.clone().or(defaults.font_path),
            font_size: self.font_size.unwrap_or(defaults.font_size),
            font_color: self.font_color.clone().unwrap_or(defaults.font_color),
            tournament: self.tournament.clone().or(defaults.tournament),
        }
    }
}
