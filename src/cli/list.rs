//! List command implementation

use std::process::ExitCode;
use unicode_width::UnicodeWidthStr;

use crate::catalog::{Catalog, CharacterRecord};

use super::EXIT_SUCCESS;

const ID_WIDTH: usize = 16;
const NAME_WIDTH: usize = 20;

/// Pad to `width` terminal columns; wide characters count as two.
fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn format_row(character: &CharacterRecord) -> String {
    format!(
        "{}{}{}",
        pad(&character.id, ID_WIDTH),
        pad(&character.localized_name, NAME_WIDTH),
        character.aliases.join(", ")
    )
}

/// Execute the list command
pub fn run_list() -> ExitCode {
    let catalog = Catalog::builtin();

    println!("Available characters:");
    println!();
    println!("{}{}Aliases", pad("ID", ID_WIDTH), pad("Name", NAME_WIDTH));
    println!("{}", "-".repeat(70));
    for character in catalog.all_characters() {
        println!("{}", format_row(character));
    }
    println!();
    println!("Total: {} characters", catalog.len());

    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_counts_wide_characters() {
        assert_eq!(pad("sol", 6), "sol   ");
        assert_eq!(pad("ソル", 6), "ソル  ");
        assert_eq!(pad("toolongvalue", 4), "toolongvalue");
    }

    #[test]
    fn test_pad_counts_narrow_non_ascii_once() {
        assert_eq!(pad("Café", 6), "Café  ");
        assert_eq!(pad("ｿﾙ", 4), "ｿﾙ  ");
    }

    #[test]
    fn test_row_layout() {
        let sol = Catalog::builtin().get_character_by_id("sol").unwrap();
        let row = format_row(sol);
        assert!(row.starts_with("sol             ソル"));
        assert!(row.ends_with(&sol.aliases.join(", ")));
    }
}
