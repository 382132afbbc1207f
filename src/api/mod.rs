//! Внешний API стола.
//!
//! Здесь описываются:
//! - команды (commands.rs) – всё, что меняет состояние (правка ставки, кадр, deal/hit/stand/reset);
//! - запросы (queries.rs) – только чтение;
//! - DTO (dto.rs) – то, что уходит во фронт;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
