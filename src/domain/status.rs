use core::fmt;

use serde::{Serialize, Serializer};

/// Строка статуса над столом.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableStatus {
    #[default]
    WaitingForBet,
    ReadyToDeal,
    InRound,
    Hit,
    RoundOver,
}

impl TableStatus {
    /// Статус после коммита ставки.
    pub fn for_bet(has_bet: bool) -> Self {
        if has_bet {
            TableStatus::ReadyToDeal
        } else {
            TableStatus::WaitingForBet
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            TableStatus::WaitingForBet => "Waiting for bet",
            TableStatus::ReadyToDeal => "Ready to deal",
            TableStatus::InRound => "In round",
            TableStatus::Hit => "Hit",
            TableStatus::RoundOver => "Round over — press Reset",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

// Фронту нужен текст, а не имя варианта.
impl Serialize for TableStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}
