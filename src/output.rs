//! PNG encoding, output file naming and writing

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// The 8-byte signature every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created
    #[error("cannot create directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    /// PNG file could not be written
    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Characters kept verbatim in file names: ASCII letters and digits, hiragana,
/// katakana and CJK unified ideographs.
fn is_filename_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{3040}'..='\u{309F}').contains(&c)
        || ('\u{30A0}'..='\u{30FF}').contains(&c)
        || ('\u{4E00}'..='\u{9FAF}').contains(&c)
}

/// Replace every character outside the safe set with `_`.
pub fn sanitize_team_name(name: &str) -> String {
    name.chars().map(|c| if is_filename_safe(c) { c } else { '_' }).collect()
}

/// File name for a team image: `{sanitized name}_{timestamp_ms}.png`.
pub fn output_file_name(team_name: &str, timestamp_ms: u128) -> String {
    format!("{}_{}.png", sanitize_team_name(team_name), timestamp_ms)
}

/// Milliseconds since the Unix epoch.
pub fn timestamp_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis()).unwrap_or_default()
}

/// Generate the output path for a team image inside `output_dir`.
pub fn generate_output_path(output_dir: &Path, team_name: &str) -> PathBuf {
    output_dir.join(output_file_name(team_name, timestamp_ms()))
}

/// Write PNG bytes to `path`, creating parent directories if they don't exist.
pub fn write_png(bytes: &[u8], path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|source| OutputError::CreateDir { path: parent.to_path_buf(), source })?;
        }
    }
    std::fs::write(path, bytes)
        .map_err(|source| OutputError::Write { path: path.to_path_buf(), source })
}
