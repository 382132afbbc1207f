use serde::Serialize;

use crate::engine::ActionOutcome;

pub use crate::engine::TableSnapshot;

/// Итог команды в виде для фронта.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct OutcomeDto {
    pub applied: bool,
    /// Причина no-op, если команда ничего не изменила.
    pub ignored: Option<String>,
}

impl From<&ActionOutcome> for OutcomeDto {
    fn from(outcome: &ActionOutcome) -> Self {
        Self {
            applied: outcome.is_applied(),
            ignored: outcome.ignored_reason().map(|r| r.to_string()),
        }
    }
}

/// Ответ API на команду: итог + актуальное состояние стола.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CommandResponse {
    pub outcome: OutcomeDto,
    pub table: TableSnapshot,
}
