// Participants, sides, and team rosters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque participant identifier supplied by the roster collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        ParticipantId(s.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        ParticipantId(s)
    }
}

/// A player taking part in the draft. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub display_name: String,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, display_name: impl Into<String>) -> Self {
        Participant {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// One of the two drafting sides. Side1 is captained by captain A and owns
/// team A; Side2 is captained by captain B and owns team B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnSide {
    Side1,
    Side2,
}

impl TurnSide {
    /// The side that picks after this one.
    pub fn other(self) -> Self {
        match self {
            TurnSide::Side1 => TurnSide::Side2,
            TurnSide::Side2 => TurnSide::Side1,
        }
    }

    /// Index into two-element per-side arrays.
    pub fn index(self) -> usize {
        match self {
            TurnSide::Side1 => 0,
            TurnSide::Side2 => 1,
        }
    }
}

impl fmt::Display for TurnSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnSide::Side1 => write!(f, "side 1"),
            TurnSide::Side2 => write!(f, "side 2"),
        }
    }
}

/// A team's ordered member list. Index 0 is always the captain.
///
/// Only built through [`TeamRoster::new`], so it is never empty; it is
/// serialized for observers but never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TeamRoster {
    members: Vec<Participant>,
}

impl TeamRoster {
    /// A roster holding only its captain.
    pub fn new(captain: Participant) -> Self {
        TeamRoster {
            members: vec![captain],
        }
    }

    pub fn captain(&self) -> &Participant {
        &self.members[0]
    }

    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a roster is never without its captain.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn push(&mut self, player: Participant) {
        self.members.push(player);
    }

    /// Remove a drafted player. The captain at index 0 is never removed.
    pub fn remove_pick(&mut self, id: &ParticipantId) -> Option<Participant> {
        let idx = self.members.iter().skip(1).position(|p| &p.id == id)? + 1;
        Some(self.members.remove(idx))
    }
}
