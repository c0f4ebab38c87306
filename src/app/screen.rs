// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Gallery,
    Hackathons,
    Team,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::Gallery,
        Screen::Hackathons,
        Screen::Team,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::Gallery => "nav-gallery",
            Screen::Hackathons => "nav-hackathons",
            Screen::Team => "nav-team",
        }
    }
}
