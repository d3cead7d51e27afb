use serde::{Deserialize, Serialize};
use std::fmt;

/// The two asymmetric sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Four pieces that only advance away from row 0
    Cat,
    /// Single piece that may step in any diagonal direction
    Mouse,
}

impl Role {
    pub fn opponent(self) -> Role {
        match self {
            Role::Cat => Role::Mouse,
            Role::Mouse => Role::Cat,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Cat => "cat",
            Role::Mouse => "mouse",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque identity of a player as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which player sits on which side of a game.
/// The cat seat is filled at creation; the mouse seat when the game is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    cat: PlayerId,
    #[serde(default)]
    mouse: Option<PlayerId>,
}

impl Seats {
    pub fn new(cat: PlayerId) -> Self {
        Self { cat, mouse: None }
    }

    pub fn with_mouse(cat: PlayerId, mouse: PlayerId) -> Self {
        Self {
            cat,
            mouse: Some(mouse),
        }
    }

    pub fn cat(&self) -> &PlayerId {
        &self.cat
    }

    pub fn mouse(&self) -> Option<&PlayerId> {
        self.mouse.as_ref()
    }

    /// The role held by `player`, or `None` for someone not seated in this game.
    pub fn role_of(&self, player: &PlayerId) -> Option<Role> {
        if &self.cat == player {
            Some(Role::Cat)
        } else if self.mouse.as_ref() == Some(player) {
            Some(Role::Mouse)
        } else {
            None
        }
    }

    pub(crate) fn seat_mouse(&mut self, mouse: PlayerId) {
        self.mouse = Some(mouse);
    }
}
