use core::fmt;

use serde::{Deserialize, Serialize};

/// Фаза раунда.
///
/// Меняется только действиями deal / hit / stand / reset через
/// `engine::RoundStateMachine`; снаружи фазу выставить нельзя.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Принимаем ставку, контролы ввода активны.
    #[default]
    Betting,
    /// Ставка заблокирована, доступны hit / stand.
    InRound,
    /// Раунд закончен, ждём reset.
    RoundOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Betting => "BETTING",
            Phase::InRound => "IN_ROUND",
            Phase::RoundOver => "ROUND_OVER",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
