use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Максимум реальных карт в руке.
pub const MAX_REAL_CARDS: usize = 6;

/// Сколько реальных слотов в руке в начале раунда.
pub const INITIAL_REAL_CARDS: usize = 2;

/// Слот под карту. Ни ранга, ни масти – только позиция на столе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Slot {
    /// Позиция сданной карты.
    Real,
    /// Призрак: место, где появится следующая карта.
    Ghost,
}

/// Чья рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HandSide {
    Dealer,
    Player,
}

impl fmt::Display for HandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandSide::Dealer => f.write_str("dealer"),
            HandSide::Player => f.write_str("player"),
        }
    }
}

/// Упорядоченный список слотов одной руки.
///
/// Инварианты:
/// - не больше одного `Ghost`, и он всегда последний;
/// - `Real` не больше `MAX_REAL_CARDS`.
///
/// Менять содержимое может только `engine::HandSlotTracker`; из JSON
/// принимается только раскладка, которая проходит `is_well_formed`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "Vec<Slot>", try_from = "Vec<Slot>")]
pub struct HandSlots(Vec<Slot>);

/// Список слотов нарушает инварианты руки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("некорректная раскладка слотов: призрак только последним, Real не больше шести")]
pub struct MalformedHand;

impl HandSlots {
    /// Раскладка нового раунда: `[Real, Real, Ghost]`.
    pub fn initial() -> Self {
        let mut slots = vec![Slot::Real; INITIAL_REAL_CARDS];
        slots.push(Slot::Ghost);
        HandSlots(slots)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn real_count(&self) -> usize {
        self.0.iter().filter(|s| **s == Slot::Real).count()
    }

    pub fn has_ghost(&self) -> bool {
        self.0.last() == Some(&Slot::Ghost)
    }

    /// Можно ли ещё добавить реальную карту.
    pub fn can_take_card(&self) -> bool {
        self.real_count() < MAX_REAL_CARDS
    }

    /// Проверка инвариантов (для тестов и debug_assert).
    pub fn is_well_formed(&self) -> bool {
        let ghosts = self.0.iter().filter(|s| **s == Slot::Ghost).count();
        let ghost_ok = ghosts == 0 || (ghosts == 1 && self.has_ghost());
        ghost_ok && self.real_count() <= MAX_REAL_CARDS
    }

    pub(crate) fn slots_mut(&mut self) -> &mut Vec<Slot> {
        &mut self.0
    }
}

impl From<HandSlots> for Vec<Slot> {
    fn from(hand: HandSlots) -> Self {
        hand.0
    }
}

impl TryFrom<Vec<Slot>> for HandSlots {
    type Error = MalformedHand;

    fn try_from(slots: Vec<Slot>) -> Result<Self, Self::Error> {
        let hand = HandSlots(slots);
        if hand.is_well_formed() {
            Ok(hand)
        } else {
            Err(MalformedHand)
        }
    }
}
