//! Инфраструктурный слой вокруг движка стола:
//! - загрузка конфига (границы ставки);
//! - планировщики кадров для движка;
//! - приёмники снапшотов (тесты / логи).

pub mod config;
pub mod scheduler;
pub mod sink;

pub use config::*;
pub use scheduler::*;
pub use sink::*;
