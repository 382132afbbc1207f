use crate::domain::{HandSide, HandSlots, Slot};
use crate::engine::errors::Ignored;

/// Владелец слотов обеих рук (дилер и игрок).
///
/// Слоты – только позиции на столе, карт здесь нет.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandSlotTracker {
    dealer: HandSlots,
    player: HandSlots,
}

impl Default for HandSlotTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HandSlotTracker {
    /// Обе руки сразу в раскладке нового раунда.
    pub fn new() -> Self {
        Self {
            dealer: HandSlots::initial(),
            player: HandSlots::initial(),
        }
    }

    /// Обе руки → `[Real, Real, Ghost]`.
    pub fn setup_round(&mut self) {
        self.dealer = HandSlots::initial();
        self.player = HandSlots::initial();
    }

    /// Добавить реальную карту: убрать призрак, положить Real, снова положить призрак.
    ///
    /// Лимит проверяется и здесь, и в `RoundStateMachine`: трекер можно
    /// дёргать напрямую, в обход автомата.
    pub fn add_card(&mut self, side: HandSide) -> Result<(), Ignored> {
        let hand = self.hand_mut(side);
        if !hand.can_take_card() {
            return Err(Ignored::HandFull { side });
        }

        let slots = hand.slots_mut();
        if slots.last() == Some(&Slot::Ghost) {
            slots.pop();
        }
        slots.push(Slot::Real);
        slots.push(Slot::Ghost);

        debug_assert!(hand.is_well_formed());
        Ok(())
    }

    pub fn clear(&mut self, side: HandSide) {
        self.hand_mut(side).slots_mut().clear();
    }

    pub fn hand(&self, side: HandSide) -> &HandSlots {
        match side {
            HandSide::Dealer => &self.dealer,
            HandSide::Player => &self.player,
        }
    }

    pub fn dealer(&self) -> &HandSlots {
        &self.dealer
    }

    pub fn player(&self) -> &HandSlots {
        &self.player
    }

    pub fn real_count(&self, side: HandSide) -> usize {
        self.hand(side).real_count()
    }

    fn hand_mut(&mut self, side: HandSide) -> &mut HandSlots {
        match side {
            HandSide::Dealer => &mut self.dealer,
            HandSide::Player => &mut self.player,
        }
    }
}
