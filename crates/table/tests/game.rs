// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use std::sync::mpsc;

use drawpoker_bot::{CallingStation, RandomBot};
use drawpoker_core::{Chips, Error, Strategy, TableView, cards::Card};
use drawpoker_table::{Config, Table, TableEvent};

/// Calls everything and always changes the first three cards.
struct DrawThree;

impl Strategy for DrawThree {
    fn bet(&mut self, view: &TableView) -> Chips {
        view.call.min(view.stack)
    }

    fn discards(&mut self, view: &TableView) -> Vec<Card> {
        view.hand[..3].to_vec()
    }
}

/// Always asks for more chips than it has.
struct Greedy;

impl Strategy for Greedy {
    fn bet(&mut self, view: &TableView) -> Chips {
        view.stack + Chips::new(1)
    }

    fn discards(&mut self, view: &TableView) -> Vec<Card> {
        view.hand.clone()
    }
}

fn random_table(seed: u64) -> (Table, mpsc::Receiver<TableEvent>) {
    let config = Config {
        seats: 5,
        seed: Some(seed),
        ..Config::default()
    };

    let (tx, rx) = mpsc::channel();
    let mut table = Table::with_sink(&config, Box::new(tx)).unwrap();
    for idx in 0..5 {
        let bot = RandomBot::with_seed(seed + idx);
        table.join(&format!("Bot{idx}"), Box::new(bot)).unwrap();
    }

    (table, rx)
}

#[test]
fn random_games_conserve_chips() {
    for seed in 0..10 {
        let (mut table, _rx) = random_table(seed);
        let total = table.ledger().total();
        assert_eq!(total, Chips::new(2500));

        while table.hands_played() < 200 {
            let Some(settlement) = table.play_hand().unwrap() else {
                break;
            };

            assert_eq!(table.ledger().total(), total);
            assert_eq!(table.ledger().pot(), Chips::ZERO);
            assert!(settlement.total() > Chips::ZERO);
        }

        let standings = table.standings().unwrap();
        let chips = standings.iter().map(|s| s.chips).sum::<Chips>();
        assert_eq!(chips, total);
        assert!(standings.windows(2).all(|w| w[0].chips >= w[1].chips));
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let play = |seed| {
        let (mut table, _rx) = random_table(seed);
        table.run(50).unwrap();
        let stacks = (0..5)
            .filter_map(|seat| table.seats().player_at(seat))
            .map(|p| table.ledger().stack(p).unwrap())
            .collect::<Vec<_>>();
        (table.hands_played(), stacks)
    };

    assert_eq!(play(7), play(7));
}

#[test]
fn run_until_one_player_left() {
    let (mut table, rx) = random_table(3);
    let standings = table.run(100_000).unwrap();

    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].chips, Chips::new(2500));

    let events = rx.try_iter().collect::<Vec<_>>();
    assert!(matches!(
        events.last(),
        Some(TableEvent::GameOver { winner }) if *winner == standings[0].player
    ));

    let left = events
        .iter()
        .filter(|e| matches!(e, TableEvent::PlayerLeft { .. }))
        .count();
    assert_eq!(left, 4);
}

#[test]
fn empty_deck_aborts_hand() {
    // Ten players use 50 cards, the first player to draw empties the deck.
    let config = Config {
        seats: 10,
        seed: Some(5),
        ..Config::default()
    };

    let (tx, rx) = mpsc::channel();
    let mut table = Table::with_sink(&config, Box::new(tx)).unwrap();
    let players = (0..10)
        .map(|idx| table.join(&format!("P{idx}"), Box::new(DrawThree)).unwrap())
        .collect::<Vec<_>>();

    let err = table.play_hand().unwrap_err();
    assert!(matches!(err, Error::Deck(_)));
    assert!(!err.is_recoverable());

    // All bets go back to the players.
    assert_eq!(table.ledger().pot(), Chips::ZERO);
    for p in &players {
        assert_eq!(table.ledger().stack(*p).unwrap(), Chips::new(500));
        assert!(table.player(*p).unwrap().hand.is_empty());
    }
    assert_eq!(table.deck().len(), 52);

    let events = rx.try_iter().collect::<Vec<_>>();
    assert!(events
        .iter()
        .any(|e| matches!(e, TableEvent::HandAborted { .. })));
    let refunded = events
        .iter()
        .filter(|e| matches!(e, TableEvent::Refunded { .. }))
        .count();
    assert_eq!(refunded, 10);
}

#[test]
fn invalid_decisions_use_defaults() {
    let config = Config {
        seats: 2,
        seed: Some(1),
        ..Config::default()
    };

    let (tx, rx) = mpsc::channel();
    let mut table = Table::with_sink(&config, Box::new(tx)).unwrap();
    let greedy = table.join("Greedy", Box::new(Greedy)).unwrap();
    table.join("Caller", Box::new(CallingStation)).unwrap();

    let settlement = table.play_hand().unwrap().unwrap();
    assert_eq!(settlement.total(), Chips::new(10));
    assert_eq!(table.ledger().total(), Chips::new(1000));

    let events = rx.try_iter().collect::<Vec<_>>();
    let defaults = events
        .iter()
        .filter(|e| matches!(e, TableEvent::DefaultDecision { player } if *player == greedy))
        .count();

    // Two betting rounds and one discard round.
    assert_eq!(defaults, 3);
}
