use tracing::{debug, warn};

use crate::domain::{BetBounds, BetSource, HandSide, Phase, RawBet, TableStatus};
use crate::engine::actions::RoundAction;
use crate::engine::bet_controller::BetController;
use crate::engine::errors::{ActionOutcome, Ignored};
use crate::engine::hand_slots::HandSlotTracker;
use crate::engine::round::{RoundEffect, RoundGuards, RoundStateMachine};
use crate::engine::snapshot::TableSnapshot;
use crate::engine::{FrameScheduler, PresentationSink};

/// Стол целиком: связывает ставку, автомат раунда и слоты рук.
///
/// - сырые правки → `BetController` (склейка до одной на кадр);
/// - действия → `RoundStateMachine`, эффекты раздаются владельцам;
/// - после каждой мутации – снапшот в `PresentationSink`.
///
/// При создании стол уже в состоянии после reset: Betting, ставка 0,
/// руки `[Real, Real, Ghost]`, контролы ставки включены. Этот снапшот
/// сразу уходит в приёмник, чтобы фронт нарисовал стол до первой правки.
pub struct TableController<S, F> {
    bet: BetController,
    round: RoundStateMachine,
    hands: HandSlotTracker,
    status: TableStatus,
    sink: S,
    scheduler: F,
}

impl<S: PresentationSink, F: FrameScheduler> TableController<S, F> {
    pub fn new(bounds: BetBounds, sink: S, scheduler: F) -> Self {
        let mut table = Self {
            bet: BetController::new(bounds),
            round: RoundStateMachine::new(),
            hands: HandSlotTracker::new(),
            status: TableStatus::WaitingForBet,
            sink,
            scheduler,
        };
        table.publish();
        table
    }

    /// Правка ставки от контрола. Коммит будет на ближайшем кадре.
    pub fn submit_bet(&mut self, value: impl Into<RawBet>, source: BetSource) -> ActionOutcome {
        match self.bet.submit(&value.into(), source) {
            Ok(needs_frame) => {
                if needs_frame {
                    self.scheduler.request_frame();
                }
                ActionOutcome::Applied
            }
            Err(reason) => self.ignored(reason),
        }
    }

    /// Кадр наступил: закоммитить последнюю отложенную правку.
    pub fn on_frame(&mut self) -> ActionOutcome {
        match self.bet.flush() {
            Ok(_) => {
                self.status = self.bet.status();
                self.publish();
                ActionOutcome::Applied
            }
            Err(reason) => self.ignored(reason),
        }
    }

    pub fn deal(&mut self) -> ActionOutcome {
        self.dispatch(RoundAction::Deal)
    }

    pub fn hit(&mut self) -> ActionOutcome {
        self.dispatch(RoundAction::Hit)
    }

    pub fn stand(&mut self) -> ActionOutcome {
        self.dispatch(RoundAction::Stand)
    }

    /// Reset разрешён из любой фазы и выбрасывает отложенную правку.
    pub fn reset(&mut self) -> ActionOutcome {
        self.dispatch(RoundAction::Reset)
    }

    pub fn dispatch(&mut self, action: RoundAction) -> ActionOutcome {
        let guards = RoundGuards {
            bet: self.bet.canonical(),
            player_real_cards: self.hands.real_count(HandSide::Player),
        };

        match self.round.apply(action, &guards) {
            Ok(effects) => {
                for effect in effects {
                    self.apply_effect(effect);
                }
                self.publish();
                ActionOutcome::Applied
            }
            Err(reason) => self.ignored(reason),
        }
    }

    fn apply_effect(&mut self, effect: RoundEffect) {
        match effect {
            RoundEffect::LockBet => self.bet.lock(),
            RoundEffect::UnlockBet => self.bet.unlock(),
            RoundEffect::ResetBet => self.bet.reset(),
            RoundEffect::SetupHands => self.hands.setup_round(),
            RoundEffect::AddCard(side) => {
                // Guard автомата уже проверил лимит; трекер проверяет его ещё раз.
                if let Err(reason) = self.hands.add_card(side) {
                    warn!(%reason, "трекер слотов отклонил карту");
                }
            }
            RoundEffect::ClearHand(side) => self.hands.clear(side),
            RoundEffect::Status(status) => self.status = status,
        }
    }

    fn ignored(&self, reason: Ignored) -> ActionOutcome {
        debug!(%reason, phase = %self.round.phase(), "команда проигнорирована");
        ActionOutcome::Ignored(reason)
    }

    /// Собрать снапшот текущего состояния.
    pub fn snapshot(&self) -> TableSnapshot {
        let mirrors = self.bet.mirrors();
        let player_real = self.hands.real_count(HandSide::Player);

        TableSnapshot {
            phase: self.round.phase(),
            status: self.status,
            bet: self.bet.canonical(),
            bet_display: self.bet.display(),
            range_value: mirrors.range.clone(),
            number_value: mirrors.number.clone(),
            bet_inputs_enabled: !self.bet.is_locked(),
            deal_enabled: self.round.can_deal(self.bet.canonical()),
            hit_enabled: self.round.can_hit(player_real),
            stand_enabled: self.round.can_stand(),
            dealer: self.hands.dealer().clone(),
            player: self.hands.player().clone(),
        }
    }

    /// Отправить текущий снапшот в приёмник (например, перерисовать по запросу).
    pub fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.sink.on_state_change(&snapshot);
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn bet(&self) -> &BetController {
        &self.bet
    }

    pub fn hands(&self) -> &HandSlotTracker {
        &self.hands
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}
