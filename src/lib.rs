//! Главный модуль стола: ставка, раунд, слоты рук.
//!
//! Ядро без I/O: сырые правки ставки склеиваются до одной на кадр и
//! нормализуются, действия deal / hit / stand / reset проходят через
//! автомат раунда, а фронт получает готовые снапшоты через `PresentationSink`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{decode_command, execute_command, TableCommand};
pub use domain::{BetBounds, BetSource, Chips, HandSide, Phase, Slot, TableStatus};
pub use engine::{
    ActionOutcome, FrameScheduler, Ignored, PresentationSink, RoundAction, TableController,
    TableSnapshot,
};
