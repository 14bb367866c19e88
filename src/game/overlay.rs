//! Which screen is showing

/// The single active overlay. Everything the UI shows or hides derives from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Menu,
    Running,
    Paused,
    GameOver,
    /// Remembers where it was opened from
    Leaderboard(ReturnTo),
}

/// States the leaderboard can return to. Nesting a leaderboard inside
/// another is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTo {
    Menu,
    Running,
    Paused,
    GameOver,
}

impl From<ReturnTo> for Overlay {
    fn from(value: ReturnTo) -> Self {
        match value {
            ReturnTo::Menu => Overlay::Menu,
            ReturnTo::Running => Overlay::Running,
            ReturnTo::Paused => Overlay::Paused,
            ReturnTo::GameOver => Overlay::GameOver,
        }
    }
}

impl Overlay {
    /// Where "back" from a leaderboard opened here should land.
    pub fn return_point(self) -> Option<ReturnTo> {
        match self {
            Overlay::Menu => Some(ReturnTo::Menu),
            Overlay::Running => Some(ReturnTo::Running),
            Overlay::Paused => Some(ReturnTo::Paused),
            Overlay::GameOver => Some(ReturnTo::GameOver),
            Overlay::Leaderboard(_) => None,
        }
    }

    pub fn is_running(self) -> bool {
        self == Overlay::Running
    }

    /// Whether a panel is drawn over the board
    pub fn is_visible(self) -> bool {
        self != Overlay::Running
    }

    pub fn title(self) -> &'static str {
        match self {
            Overlay::Menu => "SNAKE",
            Overlay::Running => "",
            Overlay::Paused => "PAUSED",
            Overlay::GameOver => "GAME OVER",
            Overlay::Leaderboard(_) => "LEADERBOARD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_points_round_trip() {
        for overlay in [
            Overlay::Menu,
            Overlay::Running,
            Overlay::Paused,
            Overlay::GameOver,
        ] {
            let back = overlay.return_point().unwrap();
            assert_eq!(Overlay::from(back), overlay);
        }
        assert_eq!(Overlay::Leaderboard(ReturnTo::Menu).return_point(), None);
    }
}
