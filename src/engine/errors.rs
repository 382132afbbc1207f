use thiserror::Error;

use crate::domain::{HandSide, Phase};
use crate::engine::actions::RoundAction;

/// Почему правка или действие ничего не изменили.
///
/// Для пользователя это всегда "ничего не произошло": состояние не меняется,
/// фронт не получает нового снапшота. Причина нужна тестам и логам.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Ignored {
    #[error("ставка заблокирована до reset")]
    BetLocked,

    #[error("нет ставки – раздавать нечего")]
    NoBet,

    #[error("действие {action} недопустимо в фазе {phase}")]
    WrongPhase { action: RoundAction, phase: Phase },

    #[error("рука {side} заполнена, больше карт не положить")]
    HandFull { side: HandSide },

    #[error("нет отложенной правки ставки")]
    NothingPending,
}

/// Итог команды для внешнего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Состояние изменилось, снапшот отправлен во фронт.
    Applied,
    /// Тихий no-op.
    Ignored(Ignored),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    pub fn ignored_reason(&self) -> Option<&Ignored> {
        match self {
            ActionOutcome::Applied => None,
            ActionOutcome::Ignored(reason) => Some(reason),
        }
    }
}

impl<T> From<Result<T, Ignored>> for ActionOutcome {
    fn from(res: Result<T, Ignored>) -> Self {
        match res {
            Ok(_) => ActionOutcome::Applied,
            Err(reason) => ActionOutcome::Ignored(reason),
        }
    }
}
