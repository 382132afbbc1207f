use serde::Serialize;

use crate::domain::{Chips, HandSlots, Phase, TableStatus};

/// Снимок состояния стола для фронта (только чтение).
///
/// Фронт ничего не считает сам: всё, что нужно нарисовать, уже здесь.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TableSnapshot {
    pub phase: Phase,
    pub status: TableStatus,
    /// Каноническая ставка.
    pub bet: Chips,
    /// Та же ставка в денежном формате (`$1,250`) – для HUD и для стола.
    pub bet_display: String,
    /// Значение ползунка.
    pub range_value: String,
    /// Значение числового поля.
    pub number_value: String,
    pub bet_inputs_enabled: bool,
    pub deal_enabled: bool,
    pub hit_enabled: bool,
    pub stand_enabled: bool,
    pub dealer: HandSlots,
    pub player: HandSlots,
}
