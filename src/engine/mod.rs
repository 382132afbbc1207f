//! Движок стола: ставка, фаза раунда, слоты рук.
//!
//! Высокоуровневый объект: `TableController`
//! Основные операции:
//!   - `submit_bet` / `on_frame` – правка ставки и её коммит раз в кадр
//!   - `deal` / `hit` / `stand` / `reset` – действия раунда
//!   - `snapshot` – состояние для фронта

pub mod actions;
pub mod bet_controller;
pub mod coalesce;
pub mod errors;
pub mod hand_slots;
pub mod round;
pub mod snapshot;
pub mod table_controller;

pub use actions::RoundAction;
pub use bet_controller::{BetController, ControlMirrors};
pub use coalesce::{EditSlot, PendingEdit};
pub use errors::{ActionOutcome, Ignored};
pub use hand_slots::HandSlotTracker;
pub use round::{transition, RoundEffect, RoundGuards, RoundStateMachine};
pub use snapshot::TableSnapshot;
pub use table_controller::TableController;

/// Планировщик кадров.
///
/// Движок только просит кадр; когда кадр наступит, владелец планировщика
/// вызывает `TableController::on_frame`. Реализации лежат в infra
/// (например, ручной планировщик для тестов).
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Приёмник снапшотов (рендер). Получает новый снапшот после каждой мутации.
pub trait PresentationSink {
    fn on_state_change(&mut self, snapshot: &TableSnapshot);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) {
        (**self).request_frame();
    }
}

impl<T: PresentationSink + ?Sized> PresentationSink for &mut T {
    fn on_state_change(&mut self, snapshot: &TableSnapshot) {
        (**self).on_state_change(snapshot);
    }
}

impl<T: PresentationSink + ?Sized> PresentationSink for Box<T> {
    fn on_state_change(&mut self, snapshot: &TableSnapshot) {
        (**self).on_state_change(snapshot);
    }
}
