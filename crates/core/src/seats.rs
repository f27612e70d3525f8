// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table seats and button tracking.
use rand::prelude::*;

use crate::{Error, PlayerId, Result};

/// Tracks which player sits at which seat and the button position.
#[derive(Debug, Clone)]
pub struct SeatTracker {
    seats: Vec<Option<PlayerId>>,
    button: Option<usize>,
}

impl SeatTracker {
    /// Creates a tracker with the given number of empty seats.
    pub fn new(seats: usize) -> Self {
        Self {
            seats: vec![None; seats],
            button: None,
        }
    }

    /// The number of seats.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Checks if the table has no seats.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// The number of occupied seats.
    pub fn count(&self) -> usize {
        self.seats.iter().flatten().count()
    }

    /// Seats a player.
    pub fn occupy(&mut self, player: PlayerId, seat: usize) -> Result<()> {
        if let Some(seat) = self.seat_of(player) {
            return Err(Error::DuplicateSeat { player, seat });
        }

        match self.seats.get_mut(seat) {
            None => Err(Error::NoSuchSeat(seat)),
            Some(Some(other)) => Err(Error::OccupiedSeat {
                seat,
                player: *other,
            }),
            Some(slot) => {
                *slot = Some(player);
                Ok(())
            }
        }
    }

    /// Empties a seat returning the player that was sitting there.
    pub fn empty(&mut self, seat: usize) -> Result<PlayerId> {
        self.seats
            .get_mut(seat)
            .ok_or(Error::NoSuchSeat(seat))?
            .take()
            .ok_or(Error::EmptySeat(seat))
    }

    /// Seats the players at random free seats.
    pub fn seat_players<R: Rng>(&mut self, players: &[PlayerId], rng: &mut R) -> Result<()> {
        let mut free = self.available_seats();
        if players.len() > free.len() {
            return Err(Error::TableFull {
                players: players.len(),
                free: free.len(),
            });
        }

        if let Some(player) = players.iter().find(|p| self.seat_of(**p).is_some()) {
            let seat = self.seat_of(*player).unwrap_or_default();
            return Err(Error::DuplicateSeat {
                player: *player,
                seat,
            });
        }

        free.shuffle(rng);
        for (player, seat) in players.iter().zip(free) {
            self.occupy(*player, seat)?;
        }

        Ok(())
    }

    /// Removes players from their seats.
    pub fn kick(&mut self, players: &[PlayerId]) -> Result<()> {
        for player in players {
            let seat = self.seat_of(*player).ok_or(Error::UnknownPlayer(*player))?;
            self.empty(seat)?;
        }

        Ok(())
    }

    /// Moves the button to the next occupied seat.
    ///
    /// If no seat is occupied the button goes around the table once and stops
    /// where it started.
    pub fn move_button(&mut self) -> Option<PlayerId> {
        let len = self.seats.len();
        if len == 0 {
            return None;
        }

        let mut seat = self.button.map(|b| b + 1).unwrap_or_default();
        for _ in 0..len {
            seat %= len;
            self.button = Some(seat);
            if self.seats[seat].is_some() {
                break;
            }
            seat += 1;
        }

        self.button_player()
    }

    /// The button seat, `None` before the button is placed.
    pub fn button_seat(&self) -> Option<usize> {
        self.button
    }

    /// The player on the button.
    pub fn button_player(&self) -> Option<PlayerId> {
        self.button.and_then(|b| self.seats[b])
    }

    /// The seat of a player.
    pub fn seat_of(&self, player: PlayerId) -> Option<usize> {
        self.seats.iter().position(|p| *p == Some(player))
    }

    /// The player at a seat.
    pub fn player_at(&self, seat: usize) -> Option<PlayerId> {
        self.seats.get(seat).copied().flatten()
    }

    /// The empty seats.
    pub fn available_seats(&self) -> Vec<usize> {
        (0..self.seats.len())
            .filter(|s| self.seats[*s].is_none())
            .collect()
    }

    /// The occupied seats.
    pub fn occupied_seats(&self) -> Vec<usize> {
        (0..self.seats.len())
            .filter(|s| self.seats[*s].is_some())
            .collect()
    }

    /// The seated players in seat order.
    pub fn players(&self) -> Vec<PlayerId> {
        self.seats.iter().flatten().copied().collect()
    }

    /// The players in dealing order, starting after the button with the button
    /// dealt last.
    pub fn dealing_order(&self) -> Vec<PlayerId> {
        let len = self.seats.len();
        let start = self.button.map(|b| b + 1).unwrap_or_default();
        (0..len)
            .filter_map(|i| self.seats[(start + i) % len])
            .collect()
    }

    /// The players in preflop betting order.
    ///
    /// Preflop action starts with the seat immediately after the button, the
    /// same as the dealing order.
    pub fn preflop_order(&self) -> Vec<PlayerId> {
        self.dealing_order()
    }
}
