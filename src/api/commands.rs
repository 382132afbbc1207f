use serde::{Deserialize, Serialize};

use crate::domain::{BetSource, RawBet};
use crate::engine::{ActionOutcome, FrameScheduler, PresentationSink, RoundAction, TableController};

use super::errors::ApiError;

/// Команда от фронта.
///
/// В JSON: `{"type":"submit_bet","value":"7","source":"number"}`, `{"type":"deal"}` и т.д.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableCommand {
    /// Правка ставки (input ползунка, input/blur числового поля).
    SubmitBet { value: RawBet, source: BetSource },

    /// Кадр отрисовки: закоммитить отложенную правку.
    Tick,

    Deal,
    Hit,
    Stand,
    Reset,
}

impl TableCommand {
    /// Действие раунда, если команда им является.
    pub fn round_action(&self) -> Option<RoundAction> {
        match self {
            TableCommand::Deal => Some(RoundAction::Deal),
            TableCommand::Hit => Some(RoundAction::Hit),
            TableCommand::Stand => Some(RoundAction::Stand),
            TableCommand::Reset => Some(RoundAction::Reset),
            TableCommand::SubmitBet { .. } | TableCommand::Tick => None,
        }
    }
}

/// Разобрать команду из JSON.
pub fn decode_command(json: &str) -> Result<TableCommand, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Выполнить команду на столе.
pub fn execute_command<S, F>(table: &mut TableController<S, F>, command: TableCommand) -> ActionOutcome
where
    S: PresentationSink,
    F: FrameScheduler,
{
    match command {
        TableCommand::SubmitBet { value, source } => table.submit_bet(value, source),
        TableCommand::Tick => table.on_frame(),
        TableCommand::Deal => table.deal(),
        TableCommand::Hit => table.hit(),
        TableCommand::Stand => table.stand(),
        TableCommand::Reset => table.reset(),
    }
}
