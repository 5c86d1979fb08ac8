//! Navigation shell destinations

use std::fmt;

pub const APP_TITLE: &str = "SportsBet Assistant";

/// Screens reachable from the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    BaseballTools,
    BasketballTool,
    Costanza,
    BetTracker,
    UserProfile,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::BaseballTools,
        Destination::BasketballTool,
        Destination::Costanza,
        Destination::BetTracker,
        Destination::UserProfile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Destination::BaseballTools => "Baseball Tools",
            Destination::BasketballTool => "Basketball Tool",
            Destination::Costanza => "Costanza",
            Destination::BetTracker => "Bet Tracker",
            Destination::UserProfile => "User Profile",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
