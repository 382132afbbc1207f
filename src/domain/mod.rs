//! Доменная модель стола: ставка и её границы, фаза раунда, слоты рук, статус.
//!
//! Здесь только данные и чистые функции – без состояния контроллеров.

pub mod bet;
pub mod chips;
pub mod hand;
pub mod money;
pub mod phase;
pub mod status;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use bet::*;
pub use chips::*;
pub use hand::*;
pub use money::*;
pub use phase::*;
pub use status::*;
