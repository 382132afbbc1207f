use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::BoundsError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
///
/// Игнорированные действия сюда не попадают – это не ошибка, а no-op.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON команды).
    #[error("некорректный запрос: {0}")]
    BadRequest(String),

    /// Границы ставки не прошли проверку.
    #[error("некорректная конфигурация: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<BoundsError> for ApiError {
    fn from(err: BoundsError) -> Self {
        ApiError::InvalidConfig(err.to_string())
    }
}
