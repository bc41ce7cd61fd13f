//! Board content model.
//! The papers pinned to the board are plain data, embedded from
//! `static/board.json` at compile time.

use serde::Deserialize;

const BOARD_JSON: &str = include_str!("../static/board.json");

/// Visual skin of a paper; maps onto a CSS class next to `.paper`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    #[default]
    Plain,
    Heart,
    Image,
    Red,
}

impl Skin {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Skin::Plain => None,
            Skin::Heart => Some("heart"),
            Skin::Image => Some("image"),
            Skin::Red => Some("red"),
        }
    }
}

/// One paragraph of text on a paper.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Line {
    pub text: String,
    /// Optional typography class (`p1`, `p2`).
    #[serde(default)]
    pub style: Option<String>,
    /// Trailing snippet rendered in the accent color.
    #[serde(default)]
    pub accent: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PaperSpec {
    #[serde(default)]
    pub skin: Skin,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Board {
    pub papers: Vec<PaperSpec>,
}

impl Board {
    /// The board shipped with the page.
    pub fn load() -> Result<Board, serde_json::Error> {
        Board::from_json(BOARD_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Board, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_board_parses() {
        let board = Board::load().unwrap();
        assert_eq!(board.papers.len(), 7);
        assert_eq!(board.papers[0].skin, Skin::Heart);
        assert!(board.papers[0].lines.is_empty());
        assert_eq!(
            board.papers.iter().filter(|p| p.image.is_some()).count(),
            3
        );
        assert_eq!(board.papers[4].skin, Skin::Red);
        assert_eq!(board.papers[5].lines[1].accent.as_deref(), Some("❤️"));
    }

    #[test]
    fn board_images_ship_with_the_page() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for img in Board::load().unwrap().papers.iter().filter_map(|p| p.image.as_ref()) {
            assert!(root.join(&img.src).is_file(), "missing asset {}", img.src);
        }
        assert!(root.join("images/board.svg").is_file());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let board = Board::from_json(r#"{"papers":[{}, {"lines":[{"text":"hi"}]}]}"#).unwrap();
        assert_eq!(board.papers[0], PaperSpec::default());
        assert_eq!(board.papers[1].skin, Skin::Plain);
        assert_eq!(board.papers[1].lines[0].style, None);
    }

    #[test]
    fn unknown_skin_is_rejected() {
        assert!(Board::from_json(r#"{"papers":[{"skin":"plaid"}]}"#).is_err());
    }

    #[test]
    fn skin_classes() {
        assert_eq!(Skin::Plain.class(), None);
        assert_eq!(Skin::Heart.class(), Some("heart"));
        assert_eq!(Skin::Image.class(), Some("image"));
        assert_eq!(Skin::Red.class(), Some("red"));
    }
}
