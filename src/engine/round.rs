use tracing::info;

use crate::domain::{Chips, HandSide, Phase, TableStatus, MAX_REAL_CARDS};
use crate::engine::actions::RoundAction;
use crate::engine::errors::Ignored;

/// Команды, которые автомат раунда отдаёт владельцам остального состояния.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEffect {
    LockBet,
    UnlockBet,
    /// Каноническая ставка := 0, отложенная правка выбрасывается.
    ResetBet,
    /// Обе руки → `[Real, Real, Ghost]`.
    SetupHands,
    AddCard(HandSide),
    ClearHand(HandSide),
    Status(TableStatus),
}

/// То, что автомат читает у других компонентов для проверки guard'ов.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundGuards {
    pub bet: Chips,
    pub player_real_cards: usize,
}

/// Чистый переход: (фаза, действие, guard'ы) → (новая фаза, эффекты).
///
/// | из        | действие | guard          | в          |
/// |-----------|----------|----------------|------------|
/// | Betting   | deal     | ставка > 0     | InRound    |
/// | InRound   | hit      | Real игрока < 6| InRound    |
/// | InRound   | stand    | –              | RoundOver  |
/// | любая     | reset    | –              | Betting    |
pub fn transition(
    phase: Phase,
    action: RoundAction,
    guards: &RoundGuards,
) -> Result<(Phase, Vec<RoundEffect>), Ignored> {
    match (phase, action) {
        (Phase::Betting, RoundAction::Deal) => {
            if guards.bet.is_zero() {
                return Err(Ignored::NoBet);
            }
            Ok((
                Phase::InRound,
                vec![
                    RoundEffect::LockBet,
                    RoundEffect::SetupHands,
                    RoundEffect::Status(TableStatus::InRound),
                ],
            ))
        }

        (Phase::InRound, RoundAction::Hit) => {
            if guards.player_real_cards >= MAX_REAL_CARDS {
                return Err(Ignored::HandFull {
                    side: HandSide::Player,
                });
            }
            Ok((
                Phase::InRound,
                vec![
                    RoundEffect::AddCard(HandSide::Player),
                    RoundEffect::Status(TableStatus::Hit),
                ],
            ))
        }

        (Phase::InRound, RoundAction::Stand) => Ok((
            Phase::RoundOver,
            vec![RoundEffect::Status(TableStatus::RoundOver)],
        )),

        (_, RoundAction::Reset) => Ok((
            Phase::Betting,
            vec![
                RoundEffect::UnlockBet,
                RoundEffect::ResetBet,
                RoundEffect::ClearHand(HandSide::Dealer),
                RoundEffect::ClearHand(HandSide::Player),
                RoundEffect::SetupHands,
                RoundEffect::Status(TableStatus::WaitingForBet),
            ],
        )),

        (phase, action) => Err(Ignored::WrongPhase { action, phase }),
    }
}

/// Владелец фазы раунда.
#[derive(Clone, Debug, Default)]
pub struct RoundStateMachine {
    phase: Phase,
}

impl RoundStateMachine {
    /// Новый автомат всегда стартует в Betting.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Применить действие. При ошибке фаза не меняется.
    pub fn apply(
        &mut self,
        action: RoundAction,
        guards: &RoundGuards,
    ) -> Result<Vec<RoundEffect>, Ignored> {
        let from = self.phase;
        let (to, effects) = transition(from, action, guards)?;
        self.phase = to;

        info!(%action, %from, %to, "переход раунда");
        Ok(effects)
    }

    /// Можно ли сейчас раздавать при такой ставке.
    pub fn can_deal(&self, bet: Chips) -> bool {
        self.phase == Phase::Betting && !bet.is_zero()
    }

    pub fn can_hit(&self, player_real_cards: usize) -> bool {
        self.phase == Phase::InRound && player_real_cards < MAX_REAL_CARDS
    }

    pub fn can_stand(&self) -> bool {
        self.phase == Phase::InRound
    }
}
