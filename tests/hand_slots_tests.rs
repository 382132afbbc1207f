// tests/hand_slots_tests.rs

//! Тесты HandSlotTracker: раскладка раунда, добавление карт, лимит, очистка.

use blackjack_table::domain::{HandSide, Slot, MAX_REAL_CARDS};
use blackjack_table::engine::{HandSlotTracker, Ignored};

use Slot::{Ghost, Real};

#[test]
fn tracker_starts_with_round_layout() {
    let t = HandSlotTracker::new();
    assert_eq!(t.dealer().slots(), &[Real, Real, Ghost]);
    assert_eq!(t.player().slots(), &[Real, Real, Ghost]);
}

#[test]
fn add_card_moves_ghost_to_the_end() {
    let mut t = HandSlotTracker::new();
    t.add_card(HandSide::Player).unwrap();

    assert_eq!(t.player().slots(), &[Real, Real, Real, Ghost]);
    // Рука дилера не тронута.
    assert_eq!(t.dealer().slots(), &[Real, Real, Ghost]);
}

#[test]
fn add_card_stops_at_cap() {
    let mut t = HandSlotTracker::new();

    for _ in 0..(MAX_REAL_CARDS - 2) {
        t.add_card(HandSide::Player).unwrap();
    }
    assert_eq!(t.real_count(HandSide::Player), MAX_REAL_CARDS);

    let before = t.clone();
    assert_eq!(
        t.add_card(HandSide::Player),
        Err(Ignored::HandFull {
            side: HandSide::Player
        })
    );
    assert_eq!(t, before);
    assert!(t.player().is_well_formed());
    assert_eq!(t.player().slots().last(), Some(&Ghost));
}

#[test]
fn add_card_applies_to_dealer_too() {
    let mut t = HandSlotTracker::new();
    t.add_card(HandSide::Dealer).unwrap();
    assert_eq!(t.dealer().slots(), &[Real, Real, Real, Ghost]);
}

#[test]
fn clear_empties_only_one_hand() {
    let mut t = HandSlotTracker::new();
    t.clear(HandSide::Dealer);

    assert!(t.dealer().is_empty());
    assert_eq!(t.player().len(), 3);
}

#[test]
fn add_card_after_clear_starts_fresh() {
    let mut t = HandSlotTracker::new();
    t.clear(HandSide::Player);
    t.add_card(HandSide::Player).unwrap();
    assert_eq!(t.player().slots(), &[Real, Ghost]);
}

#[test]
fn setup_round_restores_layout() {
    let mut t = HandSlotTracker::new();
    t.add_card(HandSide::Player).unwrap();
    t.add_card(HandSide::Player).unwrap();
    t.clear(HandSide::Dealer);

    t.setup_round();

    assert_eq!(t, HandSlotTracker::new());
}

#[test]
fn slots_stay_well_formed_through_any_sequence() {
    let mut t = HandSlotTracker::new();
    for i in 0..20 {
        let side = if i % 3 == 0 { HandSide::Dealer } else { HandSide::Player };
        let _ = t.add_card(side);
        if i % 7 == 6 {
            t.clear(side);
        }
        for side in HandSide::ALL {
            let hand = t.hand(side);
            assert!(hand.is_well_formed(), "шаг {i}: {side} = {:?}", hand.slots());
            assert!(hand.real_count() <= MAX_REAL_CARDS);
        }
    }
}
