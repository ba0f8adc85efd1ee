//! Font discovery.
//!
//! Font families are looked up as files: an explicit path wins, then
//! `<assets>/fonts/<family>.{ttf,otf,ttc}` (also with spaces removed), then a
//! short list of common system fonts with Japanese coverage.

use rusttype::Font;
use std::path::{Path, PathBuf};

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansJP-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// Candidate font files for a family, most specific first.
pub fn font_candidates(family: &str, explicit: Option<&Path>, assets_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        candidates.push(assets_dir.join(path));
    }

    let fonts_dir = assets_dir.join("fonts");
    let compact: String = family.chars().filter(|c| !c.is_whitespace()).collect();
    let mut stems = vec![family.to_string()];
    if compact != family {
        stems.push(compact);
    }
    for stem in stems.iter().filter(|s| !s.is_empty()) {
        for ext in FONT_EXTENSIONS {
            candidates.push(fonts_dir.join(format!("{}.{}", stem, ext)));
        }
    }

    candidates.extend(SYSTEM_FONTS.iter().map(PathBuf::from));
    candidates
}

/// Load the first usable font among the candidates for `family`.
///
/// Returns `None` (with a warning) when nothing loads; text is then skipped.
pub fn load_font(family: &str, explicit: Option<&Path>, assets_dir: &Path) -> Option<Font<'static>> {
    match first_loadable(font_candidates(family, explicit, assets_dir)) {
        Some((path, font)) => {
            tracing::debug!(path = %path.display(), family, "font loaded");
            Some(font)
        }
        None => {
            tracing::warn!(family, "no font found; text will not be drawn");
            None
        }
    }
}

/// First path in `paths` that reads and parses as a font.
///
/// Missing files are skipped silently, unparsable ones with a warning.
fn first_loadable<I>(paths: I) -> Option<(PathBuf, Font<'static>)>
where
    I: IntoIterator<Item = PathBuf>,
{
    for path in paths {
        let Ok(data) = std::fs::read(&path) else {
            continue;
        };
        match Font::try_from_vec(data) {
            Some(font) => return Some((path, font)),
            None => tracing::warn!(path = %path.display(), "not a usable font file"),
        }
    }
    None
}
