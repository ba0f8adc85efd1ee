//! Slot geometry for team members.
//!
//! Pure arithmetic: given the canvas size and a few style fractions,
//! [`compute_slots`] returns one [`Slot`] per member, in member order.

use serde::{Deserialize, Serialize};

/// How member slots are arranged on the canvas.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Slots side by side
    #[default]
    Horizontal,
    /// Slots stacked top to bottom
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Style inputs for the layout computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub orientation: Orientation,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Fraction of canvas height above the content band
    pub content_start_fraction: f32,
    /// Fraction of canvas height kept free at the bottom
    pub bottom_padding_fraction: f32,
    /// Fraction of canvas width kept free on each side
    pub side_padding_fraction: f32,
    /// Extra pixels reserved above the content band (event banner)
    pub title_band_height: f32,
    /// Upper bound on the portrait side length
    pub portrait_cap: f32,
}

impl LayoutParams {
    pub const CONTENT_START_FRACTION: f32 = 0.15;
    pub const BOTTOM_PADDING_FRACTION: f32 = 0.05;
    pub const SIDE_PADDING_FRACTION: f32 = 0.03;
    pub const PORTRAIT_CAP: f32 = 400.0;

    /// Default fractions for a canvas of the given size.
    pub fn new(orientation: Orientation, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            orientation,
            canvas_width: canvas_width as f32,
            canvas_height: canvas_height as f32,
            content_start_fraction: Self::CONTENT_START_FRACTION,
            bottom_padding_fraction: Self::BOTTOM_PADDING_FRACTION,
            side_padding_fraction: Self::SIDE_PADDING_FRACTION,
            title_band_height: 0.0,
            portrait_cap: Self::PORTRAIT_CAP,
        }
    }

    pub fn with_title_band(mut self, height: f32) -> Self {
        self.title_band_height = height;
        self
    }
}

/// One member's region of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// The whole cell allotted to the member
    pub cell: Rect,
    /// Square portrait area inside the cell
    pub portrait: Rect,
}

impl Slot {
    /// Horizontal anchor for the portrait and labels.
    pub fn center_x(&self) -> f32 {
        self.cell.center_x()
    }
}

/// Compute one slot per member.
///
/// The content band starts at `height * content_start_fraction + title_band_height`
/// and ends `height * bottom_padding_fraction` above the bottom edge. Horizontal
/// layouts split its width into equal columns, vertical layouts split its height
/// into equal rows. A band that would be negative is clamped to zero.
///
/// Within a cell the portrait side is `min(0.6 * cell width, 0.6 * cell height,
/// portrait_cap)`, centered horizontally and pushed down by 30% of the leftover
/// cell height.
pub fn compute_slots(member_count: usize, params: &LayoutParams) -> Vec<Slot> {
    if member_count == 0 {
        return Vec::new();
    }

    let w = params.canvas_width;
    let h = params.canvas_height;
    let start_y = h * params.content_start_fraction + params.title_band_height;
    let available_height = (h - start_y - h * params.bottom_padding_fraction).max(0.0);
    let side_padding = w * params.side_padding_fraction;
    let available_width = (w - 2.0 * side_padding).max(0.0);

    let n = member_count as f32;
    let (cell_width, cell_height) = match params.orientation {
        Orientation::Horizontal => (available_width / n, available_height),
        Orientation::Vertical => (available_width, available_height / n),
    };

    let side = (cell_width * 0.6).min(cell_height * 0.6).min(params.portrait_cap).max(0.0);

    (0..member_count)
        .map(|i| {
            let i = i as f32;
            let cell = match params.orientation {
                Orientation::Horizontal => {
                    Rect::new(side_padding + i * cell_width, start_y, cell_width, cell_height)
                }
                Orientation::Vertical => {
                    Rect::new(side_padding, start_y + i * cell_height, cell_width, cell_height)
                }
            };
            let portrait = Rect::new(
                cell.center_x() - side / 2.0,
                cell.y + (cell_height - side) * 0.3,
                side,
                side,
            );
            Slot { cell, portrait }
        })
        .collect()
}
