use core::fmt;

use serde::{Deserialize, Serialize};

/// Действие, которое двигает раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoundAction {
    /// Раздать: только из Betting и только при ставке > 0.
    Deal,
    /// Ещё карту игроку.
    Hit,
    /// Остановиться – раунд окончен.
    Stand,
    /// Вернуться в Betting из любой фазы.
    Reset,
}

impl RoundAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundAction::Deal => "deal",
            RoundAction::Hit => "hit",
            RoundAction::Stand => "stand",
            RoundAction::Reset => "reset",
        }
    }
}

impl fmt::Display for RoundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
