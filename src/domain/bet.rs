use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Самое большое целое, которое f64 представляет без потерь (2^53 - 1).
/// Сырой ввод приходит как f64, поэтому границы не могут быть больше.
pub const MAX_EXACT_BET: u64 = (1u64 << 53) - 1;

/// Ошибки валидации границ ставки. Возникают только при создании стола.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoundsError {
    #[error("step ставки должен быть больше нуля")]
    ZeroStep,

    #[error("min ({min}) больше max ({max})")]
    MinAboveMax { min: Chips, max: Chips },

    #[error("max ({0}) не помещается в f64 без потери точности")]
    MaxTooLarge(Chips),
}

/// Границы ставки: min / max / step (как у range-контрола).
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct BetBounds {
    min: Chips,
    max: Chips,
    step: Chips,
}

impl BetBounds {
    /// Создать границы с проверкой инвариантов.
    pub fn new(min: Chips, max: Chips, step: Chips) -> Result<Self, BoundsError> {
        if step.is_zero() {
            return Err(BoundsError::ZeroStep);
        }
        if min > max {
            return Err(BoundsError::MinAboveMax { min, max });
        }
        if max.0 > MAX_EXACT_BET {
            return Err(BoundsError::MaxTooLarge(max));
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> Chips {
        self.min
    }

    pub fn max(&self) -> Chips {
        self.max
    }

    pub fn step(&self) -> Chips {
        self.step
    }

    /// Лежит ли значение в сетке: 0, либо min..=max с шагом step от min.
    pub fn admits(&self, value: Chips) -> bool {
        value.is_zero()
            || (value >= self.min && value <= self.max && (value.0 - self.min.0) % self.step.0 == 0)
    }
}

impl Default for BetBounds {
    /// Значения по умолчанию range-контрола: 0..=500, шаг 1.
    fn default() -> Self {
        Self {
            min: Chips::ZERO,
            max: Chips(500),
            step: Chips(1),
        }
    }
}

/// Нормализация ставки.
///
/// - `0` остаётся `0` (нет ставки);
/// - иначе clamp в `[min, max]`, округление до ближайшего кратного `step` от `min`;
/// - если округление вылезло за `max` – шаг вниз, если ушло ниже `min` – обратно к `min`.
///
/// Нечисловые значения (NaN, ±inf) считаются нулём.
pub fn normalize_bet(raw: f64, bounds: &BetBounds) -> Chips {
    if raw == 0.0 || !raw.is_finite() {
        return Chips::ZERO;
    }

    let min = bounds.min.as_f64();
    let max = bounds.max.as_f64();
    let step = bounds.step.0;

    let clamped = raw.clamp(min, max);
    let steps = ((clamped - min) / step as f64).round() as u64;

    let mut value = bounds.min + Chips(steps.saturating_mul(step));
    if value > bounds.max {
        value = value - bounds.step;
    }
    if value < bounds.min {
        value = bounds.min;
    }
    value
}

/// Какой контрол прислал правку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BetSource {
    /// Ползунок.
    Range,
    /// Числовое поле.
    Number,
}

impl BetSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BetSource::Range => "range",
            BetSource::Number => "number",
        }
    }
}

impl fmt::Display for BetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("неизвестный источник ставки: {0:?} (ожидается \"range\" или \"number\")")]
pub struct UnknownBetSource(pub String);

impl FromStr for BetSource {
    type Err = UnknownBetSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "range" => Ok(BetSource::Range),
            "number" => Ok(BetSource::Number),
            other => Err(UnknownBetSource(other.to_string())),
        }
    }
}

/// Сырое значение из контрола: текст поля или число.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawBet {
    Number(f64),
    Text(String),
}

impl RawBet {
    /// Привести к числу. Мусор, пустая строка и не-конечные значения → 0.
    pub fn to_number(&self) -> f64 {
        let n = match self {
            RawBet::Number(n) => *n,
            RawBet::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if n.is_finite() {
            n
        } else {
            0.0
        }
    }

    /// Как значение выглядит в контроле: текст как есть, целые числа без `.0`.
    pub fn as_text(&self) -> String {
        match self {
            RawBet::Text(s) => s.clone(),
            RawBet::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{n:.0}"),
            RawBet::Number(n) => n.to_string(),
        }
    }
}

impl From<f64> for RawBet {
    fn from(n: f64) -> Self {
        RawBet::Number(n)
    }
}

impl From<u64> for RawBet {
    fn from(n: u64) -> Self {
        RawBet::Number(n as f64)
    }
}

impl From<&str> for RawBet {
    fn from(s: &str) -> Self {
        RawBet::Text(s.to_string())
    }
}

impl From<String> for RawBet {
    fn from(s: String) -> Self {
        RawBet::Text(s)
    }
}
