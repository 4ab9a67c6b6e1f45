//! Story genres.

use serde::{Deserialize, Serialize};

/// Aesthetic label that conditions both the story prompt and the narrator's
/// voice.
///
/// Parses from its display label ("Cyberpunk Noir") or its slug
/// ("cyberpunk-noir"), case-insensitively.
///
/// # Examples
///
/// ```
/// use ledger_bard_core::Genre;
///
/// let genre: Genre = "80s anime".parse().unwrap();
/// assert_eq!(genre, Genre::EightiesAnime);
/// assert_eq!(genre.to_string(), "80s Anime");
/// assert_eq!(genre.slug(), "80s-anime");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Genre {
    /// Rain, neon and chrome
    #[default]
    #[serde(rename = "cyberpunk-noir", alias = "Cyberpunk Noir")]
    CyberpunkNoir,
    /// Soft storybook illustration
    #[serde(rename = "watercolor-fairytale", alias = "Watercolor Fairytale")]
    WatercolorFairytale,
    /// Cel-shaded retro animation
    #[serde(rename = "80s-anime", alias = "80s Anime")]
    EightiesAnime,
    /// Grim sword-and-sorcery
    #[serde(rename = "dark-fantasy", alias = "Dark Fantasy")]
    DarkFantasy,
}

impl Genre {
    /// Human-facing label, as embedded in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::CyberpunkNoir => "Cyberpunk Noir",
            Genre::WatercolorFairytale => "Watercolor Fairytale",
            Genre::EightiesAnime => "80s Anime",
            Genre::DarkFantasy => "Dark Fantasy",
        }
    }

    /// Kebab-case identifier used on the command line and in config keys.
    pub fn slug(&self) -> &'static str {
        match self {
            Genre::CyberpunkNoir => "cyberpunk-noir",
            Genre::WatercolorFairytale => "watercolor-fairytale",
            Genre::EightiesAnime => "80s-anime",
            Genre::DarkFantasy => "dark-fantasy",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use strum::IntoEnumIterator;

        let wanted = s.trim();
        Genre::iter()
            .find(|genre| {
                genre.label().eq_ignore_ascii_case(wanted)
                    || genre.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Genre::iter().map(|g| g.slug()).collect();
                format!("Unknown genre '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
