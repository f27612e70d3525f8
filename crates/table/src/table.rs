// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card draw table.
use anyhow::Context;
use log::{debug, error, warn};
use rand::prelude::*;
use std::sync::Arc;

use drawpoker_core::{
    ActionTracker, AntePayment, ChipLedger, Chips, Error, PlayerId, Result, SeatTracker,
    Settlement, Strategy, TableView,
    cards::{Card, Deck},
    eval::{HAND_SIZE, HandEvaluator, HandRankTables, HandValue},
};

use crate::{
    Config,
    event::{BetAction, EventSink, LogSink, TableEvent},
};

mod player;
pub use player::{Player, PlayersState};

/// A player chips when the game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The player id.
    pub player: PlayerId,
    /// The player nickname.
    pub nickname: String,
    /// The player chips.
    pub chips: Chips,
}

/// A five card draw table that runs hands between the seated players.
pub struct Table {
    players: PlayersState,
    seats: SeatTracker,
    ledger: ChipLedger,
    action: ActionTracker,
    deck: Deck,
    evaluator: HandEvaluator,
    join_chips: Chips,
    sink: Box<dyn EventSink>,
    rng: StdRng,
    hands: usize,
}

impl Table {
    /// How many times a player is asked for a decision before using the default.
    const MAX_ATTEMPTS: usize = 3;

    /// Creates a table that logs its events.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_sink(config, Box::new(LogSink::default()))
    }

    /// Creates a table that sends its events to the given sink.
    pub fn with_sink(config: &Config, sink: Box<dyn EventSink>) -> Result<Self> {
        let tables = match &config.data_dir {
            Some(dir) => Arc::new(HandRankTables::load(dir)?),
            None => HandRankTables::embedded(),
        };

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut ledger = ChipLedger::default();
        ledger.set_ante(config.ante);

        Ok(Self {
            players: PlayersState::default(),
            seats: SeatTracker::new(config.seats),
            ledger,
            action: ActionTracker::default(),
            deck: Deck::new_and_shuffled(&mut rng),
            evaluator: HandEvaluator::new(tables),
            join_chips: config.chips,
            sink,
            rng,
            hands: 0,
        })
    }

    /// A player joins the table at a random free seat.
    pub fn join(&mut self, nickname: &str, strategy: Box<dyn Strategy>) -> Result<PlayerId> {
        let player = Player::new(nickname, strategy);
        let player_id = player.player_id;

        self.ledger.track(player_id)?;
        let seated = self
            .ledger
            .reward(player_id, self.join_chips)
            .and_then(|_| self.seats.seat_players(&[player_id], &mut self.rng));
        if let Err(err) = seated {
            self.ledger.untrack(player_id)?;
            return Err(err);
        }
        self.players.join(player);

        let seat = self
            .seats
            .seat_of(player_id)
            .ok_or(Error::UnknownPlayer(player_id))?;
        self.emit(TableEvent::PlayerJoined {
            player: player_id,
            nickname: nickname.to_string(),
            seat,
            chips: self.join_chips,
        });

        Ok(player_id)
    }

    /// A player leaves the table, returns the player chips.
    pub fn leave(&mut self, player_id: PlayerId) -> Result<Chips> {
        self.seats.kick(&[player_id])?;
        let record = self.ledger.untrack(player_id)?;
        if self.action.status(player_id).is_ok() {
            self.action.untrack(player_id)?;
        }
        self.players.leave(player_id)?;

        self.emit(TableEvent::PlayerLeft { player: player_id });
        Ok(record.stack + record.contribution)
    }

    /// The table chips ledger.
    pub fn ledger(&self) -> &ChipLedger {
        &self.ledger
    }

    /// The table seats.
    pub fn seats(&self) -> &SeatTracker {
        &self.seats
    }

    /// The table deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns a player.
    pub fn player(&self, player_id: PlayerId) -> Result<&Player> {
        self.players.get(player_id)
    }

    /// The number of hands played.
    pub fn hands_played(&self) -> usize {
        self.hands
    }

    /// Plays hands until one player is left or `max_hands` have been played.
    pub fn run(&mut self, max_hands: usize) -> anyhow::Result<Vec<Standing>> {
        for _ in 0..max_hands {
            let hand = self.hands + 1;
            let settlement = self
                .play_hand()
                .with_context(|| format!("hand {hand} failed"))?;
            if settlement.is_none() {
                break;
            }
        }

        self.kick_skint_players()?;
        if let [winner] = self.seats.players()[..] {
            self.emit(TableEvent::GameOver { winner });
        }

        Ok(self.standings()?)
    }

    /// The players chips sorted from the largest stack.
    pub fn standings(&self) -> Result<Vec<Standing>> {
        let mut standings = self
            .seats
            .players()
            .into_iter()
            .map(|player| -> Result<Standing> {
                Ok(Standing {
                    player,
                    nickname: self.players.get(player)?.nickname.clone(),
                    chips: self.ledger.stack(player)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        standings.sort_by(|a, b| b.chips.cmp(&a.chips));
        Ok(standings)
    }

    /// Plays one hand.
    ///
    /// Returns `None` if there are less than two players with chips. If the hand
    /// fails all bets are returned to the players before returning the error.
    pub fn play_hand(&mut self) -> Result<Option<Settlement>> {
        self.kick_skint_players()?;
        if self.seats.count() < 2 {
            return Ok(None);
        }

        self.hands += 1;
        self.emit(TableEvent::HandStarted { hand: self.hands });

        match self.run_hand() {
            Ok(settlement) => {
                self.collect_cards();
                for player in self.seats.players() {
                    let chips = self.ledger.stack(player)?;
                    self.emit(TableEvent::Standing { player, chips });
                }

                Ok(Some(settlement))
            }
            Err(err) => {
                error!("Hand {} aborted: {err}", self.hands);
                self.emit(TableEvent::HandAborted {
                    reason: err.to_string(),
                });

                for (player, amount) in self.ledger.refund() {
                    self.emit(TableEvent::Refunded { player, amount });
                }

                self.collect_cards();
                Err(err)
            }
        }
    }

    fn run_hand(&mut self) -> Result<Settlement> {
        self.start_hand()?;

        let order = self.seats.preflop_order();
        self.betting_phase(&order)?;

        self.discard_phase()?;

        let order = self.seats.dealing_order();
        self.betting_phase(&order)?;

        self.showdown()
    }

    /// Takes the ante, moves the button and deals the cards.
    fn start_hand(&mut self) -> Result<()> {
        let players = self.seats.players();

        // Reset the status before the ante so that players forced all in by the
        // ante don't have to act.
        self.action.new_round(&players);

        for player in players {
            let (amount, all_in) = match self.ledger.pay_ante(player)? {
                AntePayment::Paid(amount) => (amount, false),
                AntePayment::AllIn(amount) => {
                    self.action.set_all_in(player)?;
                    (amount, true)
                }
            };

            if amount > Chips::ZERO || all_in {
                self.emit(TableEvent::AntePaid {
                    player,
                    amount,
                    all_in,
                });
            }
        }

        self.deck.shuffle(&mut self.rng);
        self.emit(TableEvent::DeckShuffled);

        if let Some(player) = self.seats.move_button() {
            self.emit(TableEvent::ButtonMoved { player });
        }

        for player in self.seats.dealing_order() {
            let hand = self.deck.deal_many(HAND_SIZE)?;
            let value = self.evaluator.evaluate(&hand)?;
            self.players.get_mut(player)?.set_hand(hand, value);
        }

        self.emit(TableEvent::HandsDealt);
        Ok(())
    }

    /// Asks players in `order` to bet until every player has acted.
    fn betting_phase(&mut self, order: &[PlayerId]) -> Result<()> {
        if self.action.acting_players(order).len() < 2 {
            return Ok(());
        }

        while !self.action.is_round_complete(order) {
            for player in order {
                if !self.action.has_acted(*player)? {
                    self.request_bet(*player)?;
                }
            }
        }

        self.action.extend_round();
        Ok(())
    }

    fn request_bet(&mut self, player: PlayerId) -> Result<()> {
        for attempt in 1..=Self::MAX_ATTEMPTS {
            let view = self.table_view(player)?;
            let amount = self.players.get_mut(player)?.strategy.bet(&view);
            match self.take_bet(player, amount) {
                Ok(_) => return Ok(()),
                Err(err) if err.is_recoverable() => {
                    debug!("Player {player} bet attempt {attempt} rejected: {err}");
                }
                Err(err) => return Err(err),
            }
        }

        warn!("Player {player} made no valid bet, betting zero");
        self.emit(TableEvent::DefaultDecision { player });
        self.take_bet(player, Chips::ZERO).map(|_| ())
    }

    /// Applies a player bet.
    ///
    /// Zero folds when there is something to call, a raise reopens the betting
    /// for the other players. Returns [Error::InsufficientChips] if the amount is
    /// larger than the player stack and [Error::IllegalAction] if the amount
    /// doesn't call, fold or put the player all in.
    pub fn take_bet(&mut self, player: PlayerId, amount: Chips) -> Result<BetAction> {
        if !self.ledger.has_enough(player, amount)? {
            return Err(Error::InsufficientChips {
                player,
                amount,
                stack: self.ledger.stack(player)?,
            });
        }

        let details = self.ledger.bet_details(player, amount)?;
        if !details.is_legal() {
            return Err(Error::IllegalAction {
                player,
                amount,
                call: self.ledger.call_amount(player)?,
            });
        }

        if details.raised {
            self.action.extend_round();
        }

        let action = if details.all_in {
            self.action.set_all_in(player)?;
            BetAction::AllIn
        } else if details.min_called {
            self.action.set_min_called(player)?;
            if details.raised {
                BetAction::Raise
            } else if amount == Chips::ZERO {
                BetAction::Check
            } else {
                BetAction::Call
            }
        } else {
            self.action.set_folded(player)?;
            BetAction::Fold
        };

        self.ledger.bet(player, amount)?;
        self.emit(TableEvent::Bet {
            player,
            action,
            amount,
        });

        Ok(action)
    }

    /// Lets each player still in the hand change some cards.
    fn discard_phase(&mut self) -> Result<()> {
        let order = self.seats.dealing_order();
        let players = self.action.showdown_players(&order);
        if players.len() < 2 {
            return Ok(());
        }

        for player in players {
            self.request_discards(player)?;
        }

        Ok(())
    }

    fn request_discards(&mut self, player: PlayerId) -> Result<()> {
        for attempt in 1..=Self::MAX_ATTEMPTS {
            let view = self.table_view(player)?;
            let discards = self.players.get_mut(player)?.strategy.discards(&view);
            match self.swap_cards(player, &discards) {
                Ok(()) => return Ok(()),
                Err(err) if err.is_recoverable() => {
                    debug!("Player {player} discard attempt {attempt} rejected: {err}");
                }
                Err(err) => return Err(err),
            }
        }

        warn!("Player {player} made no valid discard, keeping all cards");
        self.emit(TableEvent::DefaultDecision { player });
        self.swap_cards(player, &[])
    }

    /// Replaces a player discards with cards from the deck.
    pub fn swap_cards(&mut self, player: PlayerId, discards: &[Card]) -> Result<()> {
        let hand = &self.players.get(player)?.hand;
        HandEvaluator::check_discards(hand, discards)?;

        let mut hand = hand
            .iter()
            .filter(|c| !discards.contains(*c))
            .copied()
            .collect::<Vec<_>>();
        hand.extend(self.deck.deal_many(discards.len())?);

        let value = self.evaluator.evaluate(&hand)?;
        self.players.get_mut(player)?.set_hand(hand, value);

        self.emit(TableEvent::Discarded {
            player,
            count: discards.len(),
        });

        Ok(())
    }

    /// What a player sees when asked for a decision.
    pub fn table_view(&self, player: PlayerId) -> Result<TableView> {
        Ok(TableView {
            player,
            hand: self.players.get(player)?.hand.clone(),
            stack: self.ledger.stack(player)?,
            contribution: self.ledger.contribution(player)?,
            pot: self.ledger.pot(),
            call: self.ledger.call_amount(player)?,
        })
    }

    /// Reveals the hands and pays the pot.
    fn showdown(&mut self) -> Result<Settlement> {
        let order = self.seats.dealing_order();
        let mut candidates = Vec::<(PlayerId, HandValue)>::new();
        for player_id in self.action.showdown_players(&order) {
            let player = self.players.get(player_id)?;
            let value = match player.value {
                Some(value) => value,
                None => self.evaluator.evaluate(&player.hand)?,
            };
            candidates.push((player_id, value));
        }

        let ranks = candidates
            .iter()
            .map(|(p, v)| (*p, v.rank()))
            .collect::<Vec<_>>();
        let settlement = self.ledger.settle(&ranks)?;

        // A player shows if its hand is at least as good as the best shown so far.
        let mut shown = Vec::new();
        if candidates.len() > 1 {
            let mut best = u16::MAX;
            for (player, value) in &candidates {
                if value.rank() <= best {
                    best = value.rank();
                    shown.push(*player);
                    let hand = self.players.get(*player)?.hand.clone();
                    self.emit(TableEvent::Showed {
                        player: *player,
                        hand,
                        value: *value,
                    });
                } else {
                    self.emit(TableEvent::Mucked { player: *player });
                }
            }
        }

        for (player, amount) in &settlement.rewards {
            if *amount == Chips::ZERO {
                continue;
            }

            let value = candidates
                .iter()
                .find(|(p, _)| p == player && shown.contains(p))
                .map(|(_, v)| *v);
            self.emit(TableEvent::Won {
                player: *player,
                amount: *amount,
                value,
            });
        }

        for (player, amount) in &settlement.refunds {
            self.emit(TableEvent::Refunded {
                player: *player,
                amount: *amount,
            });
        }

        Ok(settlement)
    }

    fn collect_cards(&mut self) {
        for player in self.players.iter_mut() {
            player.take_hand();
        }

        self.deck.collect();
        self.emit(TableEvent::CardsCollected);
    }

    fn kick_skint_players(&mut self) -> Result<()> {
        for player in self.ledger.skint_players() {
            self.leave(player)?;
        }

        Ok(())
    }

    fn emit(&mut self, event: TableEvent) {
        self.sink.emit(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpoker_bot::CallingStation;
    use drawpoker_core::cards::{Rank, Suit};
    use std::sync::mpsc;

    fn new_table(seats: usize, players: usize) -> (Table, Vec<PlayerId>, mpsc::Receiver<TableEvent>) {
        let config = Config {
            seats,
            seed: Some(13),
            ..Config::default()
        };

        let (tx, rx) = mpsc::channel();
        let mut table = Table::with_sink(&config, Box::new(tx)).unwrap();
        let ids = (0..players)
            .map(|i| table.join(&format!("P{i}"), Box::new(CallingStation)).unwrap())
            .collect();
        (table, ids, rx)
    }

    fn events(rx: &mpsc::Receiver<TableEvent>) -> Vec<TableEvent> {
        rx.try_iter().collect()
    }

    /// Raises 50 chips the first time it bets, then calls.
    #[derive(Default)]
    struct RaiseOnce {
        raised: bool,
    }

    impl Strategy for RaiseOnce {
        fn bet(&mut self, view: &TableView) -> Chips {
            if self.raised {
                view.call.min(view.stack)
            } else {
                self.raised = true;
                view.call + Chips::new(50)
            }
        }

        fn discards(&mut self, _view: &TableView) -> Vec<Card> {
            Vec::new()
        }
    }

    /// Never puts chips in the pot.
    struct Folder;

    impl Strategy for Folder {
        fn bet(&mut self, _view: &TableView) -> Chips {
            Chips::ZERO
        }

        fn discards(&mut self, _view: &TableView) -> Vec<Card> {
            Vec::new()
        }
    }

    fn set_strategy(table: &mut Table, player: PlayerId, strategy: Box<dyn Strategy>) {
        table.players.get_mut(player).unwrap().strategy = strategy;
    }

    fn bets(events: &[TableEvent], player: PlayerId) -> Vec<(BetAction, Chips)> {
        events
            .iter()
            .filter_map(|e| match e {
                TableEvent::Bet {
                    player: p,
                    action,
                    amount,
                } if *p == player => Some((*action, *amount)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn join_and_leave() {
        let (mut table, ids, rx) = new_table(3, 3);
        assert_eq!(table.seats().count(), 3);
        assert_eq!(table.ledger().total(), Chips::new(1500));

        let joined = events(&rx)
            .iter()
            .filter(|e| matches!(e, TableEvent::PlayerJoined { .. }))
            .count();
        assert_eq!(joined, 3);

        assert!(matches!(
            table.join("Late", Box::new(CallingStation)),
            Err(Error::TableFull { .. })
        ));

        assert_eq!(table.leave(ids[0]).unwrap(), Chips::new(500));
        assert!(matches!(
            events(&rx)[..],
            [TableEvent::PlayerLeft { player }] if player == ids[0]
        ));
        assert!(table.leave(ids[0]).is_err());
        assert!(table.player(ids[0]).is_err());
        assert_eq!(table.seats().count(), 2);
    }

    #[test]
    fn join_rejects_chips_overflow() {
        let config = Config {
            seats: 5,
            chips: Chips::new(1_000_000_000),
            seed: Some(13),
            ..Config::default()
        };

        let mut table = Table::new(&config).unwrap();
        for i in 0..4 {
            table.join(&format!("P{i}"), Box::new(CallingStation)).unwrap();
        }

        assert!(matches!(
            table.join("P4", Box::new(CallingStation)),
            Err(Error::ChipsOverflow { .. })
        ));
        assert_eq!(table.seats().count(), 4);
        assert_eq!(table.players.count(), 4);
        assert_eq!(table.ledger().players().len(), 4);
        assert_eq!(table.ledger().total(), Chips::new(4_000_000_000));
    }

    #[test]
    fn start_hand_deals_cards() {
        let (mut table, ids, _rx) = new_table(4, 3);
        table.start_hand().unwrap();

        assert_eq!(table.ledger().pot(), Chips::new(15));
        assert_eq!(table.deck().len(), Deck::SIZE - 15);
        assert!(table.seats().button_player().is_some());
        for p in &ids {
            let player = table.player(*p).unwrap();
            assert_eq!(player.hand.len(), HAND_SIZE);
            assert!(player.value.is_some());
        }

        table.collect_cards();
        assert_eq!(table.deck().len(), Deck::SIZE);
        assert!(table.player(ids[0]).unwrap().hand.is_empty());
    }

    #[test]
    fn ante_all_in() {
        let (mut table, ids, _rx) = new_table(3, 3);
        table.ledger.spend(ids[0], Chips::new(497)).unwrap();

        table.start_hand().unwrap();
        assert_eq!(table.ledger().contribution(ids[0]).unwrap(), Chips::new(3));
        assert!(table.action.status(ids[0]).unwrap().all_in);
        assert!(!table.action.has_acted(ids[1]).unwrap());
        assert_eq!(table.action.acting_players(&ids), ids[1..].to_vec());
    }

    #[test]
    fn take_bet() {
        let (mut table, ids, _rx) = new_table(3, 3);
        table.start_hand().unwrap();

        assert_eq!(table.take_bet(ids[0], Chips::ZERO).unwrap(), BetAction::Check);
        assert!(table.action.has_acted(ids[0]).unwrap());

        let err = table.take_bet(ids[1], Chips::new(600)).unwrap_err();
        assert!(matches!(err, Error::InsufficientChips { .. }));
        assert!(err.is_recoverable());

        // A raise reopens the betting.
        assert_eq!(table.take_bet(ids[1], Chips::new(100)).unwrap(), BetAction::Raise);
        assert!(!table.action.has_acted(ids[0]).unwrap());
        assert!(table.action.has_acted(ids[1]).unwrap());

        let err = table.take_bet(ids[2], Chips::new(50)).unwrap_err();
        assert!(matches!(
            err,
            Error::IllegalAction { call, .. } if call == Chips::new(100)
        ));

        assert_eq!(table.take_bet(ids[2], Chips::ZERO).unwrap(), BetAction::Fold);
        assert_eq!(table.take_bet(ids[0], Chips::new(100)).unwrap(), BetAction::Call);
        assert!(table.action.is_round_complete(&ids));
        assert_eq!(table.action.showdown_players(&ids), ids[..2].to_vec());

        // All in for the rest of the stack.
        assert_eq!(table.take_bet(ids[1], Chips::new(395)).unwrap(), BetAction::AllIn);
        assert_eq!(table.ledger().stack(ids[1]).unwrap(), Chips::ZERO);
        assert_eq!(table.ledger().pot(), Chips::new(610));
    }

    #[test]
    fn raise_reopens_betting() {
        let (mut table, _, rx) = new_table(3, 3);
        table.start_hand().unwrap();

        let order = table.seats().preflop_order();
        set_strategy(&mut table, order[1], Box::<RaiseOnce>::default());
        let _ = events(&rx);

        table.betting_phase(&order).unwrap();
        let events = events(&rx);

        // The first player checks then has to call the raise.
        assert_eq!(
            bets(&events, order[0]),
            vec![(BetAction::Check, Chips::ZERO), (BetAction::Call, Chips::new(50))]
        );
        assert_eq!(
            bets(&events, order[1]),
            vec![(BetAction::Raise, Chips::new(50))]
        );
        assert_eq!(
            bets(&events, order[2]),
            vec![(BetAction::Call, Chips::new(50))]
        );
        assert_eq!(table.ledger().pot(), Chips::new(165));
    }

    #[test]
    fn ante_all_in_skips_betting() {
        let (mut table, ids, rx) = new_table(2, 2);
        table.ledger.spend(ids[0], Chips::new(497)).unwrap();

        let settlement = table.play_hand().unwrap().unwrap();
        assert_eq!(settlement.total(), Chips::new(8));
        assert_eq!(table.ledger().total(), Chips::new(503));

        let events = events(&rx);
        assert!(!events.iter().any(|e| matches!(e, TableEvent::Bet { .. })));

        // Both players are still in the hand so they can draw.
        let discarded = events
            .iter()
            .filter(|e| matches!(e, TableEvent::Discarded { .. }))
            .count();
        assert_eq!(discarded, 2);
    }

    #[test]
    fn fold_skips_discards() {
        let (mut table, ids, rx) = new_table(2, 2);
        set_strategy(&mut table, ids[0], Box::<RaiseOnce>::default());
        set_strategy(&mut table, ids[1], Box::new(Folder));

        let settlement = table.play_hand().unwrap().unwrap();
        assert_eq!(settlement.rewards, vec![(ids[0], Chips::new(60))]);
        assert_eq!(table.ledger().stack(ids[0]).unwrap(), Chips::new(505));
        assert_eq!(table.ledger().stack(ids[1]).unwrap(), Chips::new(495));

        let events = events(&rx);
        assert!(!events.iter().any(|e| matches!(e, TableEvent::Discarded { .. })));
        assert_eq!(bets(&events, ids[0]), vec![(BetAction::Raise, Chips::new(50))]);
        assert_eq!(bets(&events, ids[1]).last(), Some(&(BetAction::Fold, Chips::ZERO)));
    }

    #[test]
    fn showdown_shows_and_mucks() {
        let (mut table, _, rx) = new_table(3, 3);
        table.start_hand().unwrap();

        let order = table.seats().dealing_order();
        let hand = |ranks: [Rank; 5], suits: [Suit; 5]| {
            ranks
                .into_iter()
                .zip(suits)
                .map(|(r, s)| Card::new(r, s))
                .collect::<Vec<_>>()
        };
        let mixed = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
        let hands = [
            hand([Rank::Nine, Rank::Seven, Rank::Five, Rank::Four, Rank::Deuce], mixed),
            hand([Rank::Ace, Rank::Ace, Rank::King, Rank::King, Rank::Four], mixed),
            hand([Rank::Jack, Rank::Jack, Rank::Eight, Rank::Six, Rank::Trey], mixed),
        ];

        for (player, cards) in order.iter().zip(hands) {
            let value = table.evaluator.evaluate(&cards).unwrap();
            table.players.get_mut(*player).unwrap().set_hand(cards, value);
        }

        let _ = events(&rx);
        let settlement = table.showdown().unwrap();
        assert_eq!(settlement.reward(order[1]), Chips::new(15));
        assert_eq!(settlement.total(), Chips::new(15));

        let events = events(&rx);
        assert!(matches!(events[0], TableEvent::Showed { player, .. } if player == order[0]));
        assert!(matches!(events[1], TableEvent::Showed { player, .. } if player == order[1]));
        assert!(matches!(events[2], TableEvent::Mucked { player } if player == order[2]));
        assert!(matches!(
            events[3],
            TableEvent::Won { player, value: Some(_), .. } if player == order[1]
        ));
    }

    #[test]
    fn play_hand_conserves_chips() {
        let (mut table, _, rx) = new_table(4, 4);
        for _ in 0..20 {
            table.play_hand().unwrap();
            assert_eq!(table.ledger().total(), Chips::new(2000));
            assert_eq!(table.ledger().pot(), Chips::ZERO);
            assert_eq!(table.deck().len(), Deck::SIZE);
        }

        assert_eq!(table.hands_played(), 20);
        assert!(events(&rx).contains(&TableEvent::CardsCollected));
    }
}
