use serde::{Deserialize, Serialize};

use crate::domain::{BetBounds, Chips};
use crate::engine::{FrameScheduler, PresentationSink, TableController};

use super::dto::TableSnapshot;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Текущее состояние стола.
    GetTable,

    /// Границы ставки (чтобы фронт выставил min/max/step контролам).
    GetBounds,
}

/// Границы ставки для фронта.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct BoundsDto {
    pub min: Chips,
    pub max: Chips,
    pub step: Chips,
}

impl From<&BetBounds> for BoundsDto {
    fn from(bounds: &BetBounds) -> Self {
        Self {
            min: bounds.min(),
            max: bounds.max(),
            step: bounds.step(),
        }
    }
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum QueryResponse {
    Table(TableSnapshot),
    Bounds(BoundsDto),
}

pub fn answer_query<S, F>(table: &TableController<S, F>, query: &Query) -> QueryResponse
where
    S: PresentationSink,
    F: FrameScheduler,
{
    match query {
        Query::GetTable => QueryResponse::Table(table.snapshot()),
        Query::GetBounds => QueryResponse::Bounds(BoundsDto::from(table.bet().bounds())),
    }
}
