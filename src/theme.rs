//! Visual/audio theme selection

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Neon,
    Retro,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Neon, Theme::Retro];

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Neon => Theme::Retro,
            Theme::Retro => Theme::Neon,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Neon => "Neon",
            Theme::Retro => "Retro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Neon.toggled(), Theme::Retro);
        assert_eq!(Theme::Neon.toggled().toggled(), Theme::Neon);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Retro).unwrap(), "\"retro\"");
    }
}
