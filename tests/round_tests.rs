// tests/round_tests.rs

//! Тесты автомата раунда:
//! - таблица переходов deal / hit / stand / reset
//! - guard'ы (ставка > 0, лимит карт игрока)
//! - недопустимые действия – no-op с причиной, фаза не меняется

use blackjack_table::domain::{Chips, HandSide, Phase, TableStatus, MAX_REAL_CARDS};
use blackjack_table::engine::{transition, Ignored, RoundAction, RoundEffect, RoundGuards, RoundStateMachine};

fn guards(bet: u64, player_real_cards: usize) -> RoundGuards {
    RoundGuards {
        bet: Chips(bet),
        player_real_cards,
    }
}

/// Хелпер: автомат, доведённый до нужной фазы.
fn machine_in(phase: Phase) -> RoundStateMachine {
    let mut m = RoundStateMachine::new();
    let g = guards(5, 2);
    match phase {
        Phase::Betting => {}
        Phase::InRound => {
            m.apply(RoundAction::Deal, &g).unwrap();
        }
        Phase::RoundOver => {
            m.apply(RoundAction::Deal, &g).unwrap();
            m.apply(RoundAction::Stand, &g).unwrap();
        }
    }
    assert_eq!(m.phase(), phase);
    m
}

#[test]
fn machine_starts_in_betting() {
    assert_eq!(RoundStateMachine::new().phase(), Phase::Betting);
}

#[test]
fn deal_requires_positive_bet() {
    let mut m = RoundStateMachine::new();
    assert_eq!(m.apply(RoundAction::Deal, &guards(0, 2)), Err(Ignored::NoBet));
    assert_eq!(m.phase(), Phase::Betting);
}

#[test]
fn deal_locks_bet_and_sets_up_hands() {
    let mut m = RoundStateMachine::new();
    let effects = m.apply(RoundAction::Deal, &guards(5, 2)).unwrap();

    assert_eq!(m.phase(), Phase::InRound);
    assert!(effects.contains(&RoundEffect::LockBet));
    assert!(effects.contains(&RoundEffect::SetupHands));
    assert!(effects.contains(&RoundEffect::Status(TableStatus::InRound)));
}

#[test]
fn hit_adds_player_card_while_below_cap() {
    let mut m = machine_in(Phase::InRound);
    let effects = m.apply(RoundAction::Hit, &guards(5, 2)).unwrap();

    assert_eq!(m.phase(), Phase::InRound);
    assert_eq!(
        effects,
        vec![
            RoundEffect::AddCard(HandSide::Player),
            RoundEffect::Status(TableStatus::Hit)
        ]
    );
}

#[test]
fn hit_at_cap_is_ignored() {
    let mut m = machine_in(Phase::InRound);
    assert_eq!(
        m.apply(RoundAction::Hit, &guards(5, MAX_REAL_CARDS)),
        Err(Ignored::HandFull {
            side: HandSide::Player
        })
    );
    assert_eq!(m.phase(), Phase::InRound);
}

#[test]
fn stand_ends_round() {
    let mut m = machine_in(Phase::InRound);
    let effects = m.apply(RoundAction::Stand, &guards(5, 3)).unwrap();
    assert_eq!(m.phase(), Phase::RoundOver);
    assert_eq!(effects, vec![RoundEffect::Status(TableStatus::RoundOver)]);
}

#[test]
fn reset_is_legal_from_every_phase() {
    for phase in [Phase::Betting, Phase::InRound, Phase::RoundOver] {
        let mut m = machine_in(phase);
        let effects = m.apply(RoundAction::Reset, &guards(0, 6)).unwrap();

        assert_eq!(m.phase(), Phase::Betting, "reset из {phase}");
        assert!(effects.contains(&RoundEffect::UnlockBet));
        assert!(effects.contains(&RoundEffect::ResetBet));
        assert!(effects.contains(&RoundEffect::ClearHand(HandSide::Dealer)));
        assert!(effects.contains(&RoundEffect::ClearHand(HandSide::Player)));
        assert_eq!(effects.last(), Some(&RoundEffect::Status(TableStatus::WaitingForBet)));

        // Руки сначала очищаются, потом заново раскладываются.
        let clear = effects
            .iter()
            .position(|e| *e == RoundEffect::ClearHand(HandSide::Player))
            .unwrap();
        let setup = effects.iter().position(|e| *e == RoundEffect::SetupHands).unwrap();
        assert!(clear < setup);
    }
}

#[test]
fn actions_from_wrong_phase_are_ignored() {
    let cases = [
        (Phase::Betting, RoundAction::Hit),
        (Phase::Betting, RoundAction::Stand),
        (Phase::InRound, RoundAction::Deal),
        (Phase::RoundOver, RoundAction::Deal),
        (Phase::RoundOver, RoundAction::Hit),
        (Phase::RoundOver, RoundAction::Stand),
    ];

    for (phase, action) in cases {
        let mut m = machine_in(phase);
        assert_eq!(
            m.apply(action, &guards(5, 2)),
            Err(Ignored::WrongPhase { action, phase }),
            "{action} из {phase}"
        );
        assert_eq!(m.phase(), phase);
    }
}

#[test]
fn transition_is_pure() {
    let g = guards(5, 2);
    let a = transition(Phase::InRound, RoundAction::Hit, &g);
    let b = transition(Phase::InRound, RoundAction::Hit, &g);
    assert_eq!(a, b);
}

#[test]
fn enablement_helpers_follow_phase() {
    let betting = machine_in(Phase::Betting);
    assert!(betting.can_deal(Chips(5)));
    assert!(!betting.can_deal(Chips::ZERO));
    assert!(!betting.can_hit(2));
    assert!(!betting.can_stand());

    let in_round = machine_in(Phase::InRound);
    assert!(!in_round.can_deal(Chips(5)));
    assert!(in_round.can_hit(5));
    assert!(!in_round.can_hit(MAX_REAL_CARDS));
    assert!(in_round.can_stand());

    let over = machine_in(Phase::RoundOver);
    assert!(!over.can_hit(2));
    assert!(!over.can_stand());
}
