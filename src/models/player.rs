use std::fmt;

/// One of the two fixed seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One = 0,
    Two = 1,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The seat that moves after this one.
    pub fn other(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Symbol placed on the board
    pub fn mark(&self) -> char {
        match self {
            PlayerId::One => 'x',
            PlayerId::Two => 'o',
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn default_name(&self) -> String {
        format!("Player {}", self.index() + 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A participant and their running score for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    wins: u32,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Player {
            id,
            name: id.default_name(),
            wins: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Replace the display name. Blank input keeps the current one.
    /// Returns true if the name changed.
    pub fn rename(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.name = name.to_string();
        true
    }

    pub(crate) fn add_win(&mut self) {
        self.wins += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_and_marks() {
        let p1 = Player::new(PlayerId::One);
        let p2 = Player::new(PlayerId::Two);
        assert_eq!(p1.name(), "Player 1");
        assert_eq!(p2.name(), "Player 2");
        assert_eq!(p1.id().mark(), 'x');
        assert_eq!(p2.id().mark(), 'o');
        assert_eq!(p1.wins(), 0);
    }

    #[test]
    fn other_alternates() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
        assert_eq!(PlayerId::One.other().other(), PlayerId::One);
    }

    #[test]
    fn rename_trims_and_ignores_blank() {
        let mut p = Player::new(PlayerId::One);
        assert!(!p.rename("   "));
        assert_eq!(p.name(), "Player 1");
        assert!(p.rename("  Ada \n"));
        assert_eq!(p.name(), "Ada");
    }

    #[test]
    fn add_win_increments() {
        let mut p = Player::new(PlayerId::Two);
        p.add_win();
        p.add_win();
        assert_eq!(p.wins(), 2);
    }
}
