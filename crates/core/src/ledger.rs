// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players chips bookkeeping and pot settlement.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{Chips, Error, PlayerId, Result};

/// A player chips.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipRecord {
    /// The chips the player has behind.
    pub stack: Chips,
    /// The chips the player has put in the pot.
    pub contribution: Chips,
}

/// How a bet amount relates to the current bets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BetDetails {
    /// The amount is more than the call amount.
    pub raised: bool,
    /// The amount is the player whole stack.
    pub all_in: bool,
    /// The amount is at least the call amount.
    pub min_called: bool,
    /// The amount is zero and below the call amount.
    pub folded: bool,
}

impl BetDetails {
    /// A bet is legal if it calls, folds, or puts the player all in.
    pub fn is_legal(&self) -> bool {
        self.min_called || self.all_in || self.folded
    }
}

/// The result of paying the ante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntePayment {
    /// The player paid the ante.
    Paid(Chips),
    /// The ante took the player whole stack.
    AllIn(Chips),
}

/// The chips paid at the end of a hand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Chips won by each showdown player, in hand rank order.
    pub rewards: Vec<(PlayerId, Chips)>,
    /// Contributions nobody could win that went back to their owners.
    pub refunds: Vec<(PlayerId, Chips)>,
}

impl Settlement {
    /// Total chips paid out.
    pub fn total(&self) -> Chips {
        self.rewards
            .iter()
            .chain(self.refunds.iter())
            .map(|(_, c)| *c)
            .sum()
    }

    /// The chips won by a player.
    pub fn reward(&self, player: PlayerId) -> Chips {
        self.rewards
            .iter()
            .filter(|(p, _)| *p == player)
            .map(|(_, c)| *c)
            .sum()
    }
}

/// Tracks stacks and contributions for each player at the table.
#[derive(Debug, Default, Clone)]
pub struct ChipLedger {
    players: AHashMap<PlayerId, ChipRecord>,
    ante: Chips,
}

impl ChipLedger {
    /// Starts tracking a player with no chips.
    pub fn track(&mut self, player: PlayerId) -> Result<()> {
        if self.players.contains_key(&player) {
            return Err(Error::AlreadyTracked(player));
        }

        self.players.insert(player, ChipRecord::default());
        Ok(())
    }

    /// Stops tracking a player.
    pub fn untrack(&mut self, player: PlayerId) -> Result<ChipRecord> {
        self.players
            .remove(&player)
            .ok_or(Error::UnknownPlayer(player))
    }

    /// The tracked players.
    pub fn players(&self) -> Vec<PlayerId> {
        let mut players = self.players.keys().copied().collect::<Vec<_>>();
        players.sort();
        players
    }

    /// A player chips record.
    pub fn record(&self, player: PlayerId) -> Result<ChipRecord> {
        self.players
            .get(&player)
            .copied()
            .ok_or(Error::UnknownPlayer(player))
    }

    fn record_mut(&mut self, player: PlayerId) -> Result<&mut ChipRecord> {
        self.players
            .get_mut(&player)
            .ok_or(Error::UnknownPlayer(player))
    }

    /// A player stack.
    pub fn stack(&self, player: PlayerId) -> Result<Chips> {
        self.record(player).map(|r| r.stack)
    }

    /// A player contribution to the pot.
    pub fn contribution(&self, player: PlayerId) -> Result<Chips> {
        self.record(player).map(|r| r.contribution)
    }

    /// Adds chips to a player stack.
    ///
    /// Fails with [Error::ChipsOverflow] if the table total would overflow, so
    /// that stacks, pot and contributions sums never saturate.
    pub fn reward(&mut self, player: PlayerId, amount: Chips) -> Result<()> {
        let total = self.total();
        self.record(player)?;
        if total.checked_add(amount).is_none() {
            return Err(Error::ChipsOverflow {
                player,
                amount,
                total,
            });
        }

        self.record_mut(player)?.stack += amount;
        Ok(())
    }

    /// Checks if a player stack covers an amount.
    pub fn has_enough(&self, player: PlayerId, amount: Chips) -> Result<bool> {
        self.stack(player).map(|stack| amount <= stack)
    }

    /// Removes chips from a player stack.
    pub fn spend(&mut self, player: PlayerId, amount: Chips) -> Result<()> {
        let record = self.record_mut(player)?;
        if amount > record.stack {
            return Err(Error::InsufficientChips {
                player,
                amount,
                stack: record.stack,
            });
        }

        record.stack -= amount;
        Ok(())
    }

    /// Moves chips from a player stack to the pot.
    pub fn bet(&mut self, player: PlayerId, amount: Chips) -> Result<()> {
        self.spend(player, amount)?;
        self.record_mut(player)?.contribution += amount;
        Ok(())
    }

    /// The largest contribution at the table.
    pub fn max_contribution(&self) -> Chips {
        self.players
            .values()
            .map(|r| r.contribution)
            .max()
            .unwrap_or_default()
    }

    /// The chips a player has to add to match the largest contribution.
    pub fn call_amount(&self, player: PlayerId) -> Result<Chips> {
        self.contribution(player)
            .map(|c| self.max_contribution() - c)
    }

    /// Classifies a bet amount.
    pub fn bet_details(&self, player: PlayerId, amount: Chips) -> Result<BetDetails> {
        let stack = self.stack(player)?;
        let call = self.call_amount(player)?;
        let min_called = amount >= call;

        Ok(BetDetails {
            raised: amount > call,
            all_in: amount == stack,
            min_called,
            folded: !min_called && amount == Chips::ZERO,
        })
    }

    /// Sets the ante.
    pub fn set_ante(&mut self, ante: Chips) {
        self.ante = ante;
    }

    /// The ante.
    pub fn ante(&self) -> Chips {
        self.ante
    }

    /// Takes the ante from a player, a player who cannot cover the ante goes all in.
    pub fn pay_ante(&mut self, player: PlayerId) -> Result<AntePayment> {
        let stack = self.stack(player)?;
        if self.ante >= stack {
            self.bet(player, stack)?;
            Ok(AntePayment::AllIn(stack))
        } else {
            self.bet(player, self.ante)?;
            Ok(AntePayment::Paid(self.ante))
        }
    }

    /// The chips in the pot.
    pub fn pot(&self) -> Chips {
        self.players.values().map(|r| r.contribution).sum()
    }

    /// All chips at the table, stacks and pot.
    pub fn total(&self) -> Chips {
        self.players
            .values()
            .map(|r| r.stack + r.contribution)
            .sum()
    }

    /// Players with no chips left.
    pub fn skint_players(&self) -> Vec<PlayerId> {
        let mut players = self
            .players
            .iter()
            .filter(|(_, r)| r.stack == Chips::ZERO)
            .map(|(p, _)| *p)
            .collect::<Vec<_>>();
        players.sort();
        players
    }

    /// Takes up to `cap` chips from each player contribution.
    pub fn gather_contributions(&mut self, cap: Chips) -> Chips {
        let mut gathered = Chips::ZERO;
        for record in self.players.values_mut() {
            let taken = record.contribution.min(cap);
            record.contribution -= taken;
            gathered += taken;
        }

        gathered
    }

    /// Splits the pot between players with equal hands.
    ///
    /// Players are paid in order of contribution, each player can only win up to
    /// its contribution from every other player, the chips gathered are split
    /// evenly with the remaining players in the group and the remainder goes to
    /// the next player.
    pub fn split_contributions(&mut self, group: &[PlayerId]) -> Result<Vec<(PlayerId, Chips)>> {
        let mut group = group
            .iter()
            .map(|p| self.contribution(*p).map(|c| (*p, c)))
            .collect::<Result<Vec<_>>>()?;
        group.sort_by_key(|(_, c)| *c);

        let mut pool = Chips::ZERO;
        let mut rewards = Vec::with_capacity(group.len());
        let count = group.len();

        for (idx, (player, _)) in group.into_iter().enumerate() {
            // Take the current contribution as previous splits may have gathered
            // some of this player chips.
            let contribution = self.contribution(player)?;
            if contribution > Chips::ZERO {
                pool += self.gather_contributions(contribution);
            }

            let split = pool / (count - idx) as u32;
            self.reward(player, split)?;
            pool -= split;
            rewards.push((player, split));
        }

        Ok(rewards)
    }

    /// Pays the pot to the showdown players.
    ///
    /// Candidates are the players that didn't fold with their hand ranks, lower
    /// ranks win. Players with the same rank split the chips they are entitled
    /// to, side pots are handled by capping what each player can win to its own
    /// contribution. Any chip still in the pot after the showdown players have
    /// been paid goes back to its owner.
    pub fn settle(&mut self, candidates: &[(PlayerId, u16)]) -> Result<Settlement> {
        let mut sorted = candidates
            .iter()
            .map(|(p, rank)| self.contribution(*p).map(|c| (*p, *rank, c)))
            .collect::<Result<Vec<_>>>()?;
        sorted.sort_by_key(|(_, rank, c)| (*rank, *c));

        let mut settlement = Settlement::default();
        for group in sorted.chunk_by(|a, b| a.1 == b.1) {
            let players = group.iter().map(|(p, _, _)| *p).collect::<Vec<_>>();
            let rewards = self.split_contributions(&players)?;
            settlement.rewards.extend(rewards);
        }

        settlement.refunds = self.refund();
        Ok(settlement)
    }

    /// Returns all contributions to their owners.
    pub fn refund(&mut self) -> Vec<(PlayerId, Chips)> {
        let mut refunds = self
            .players
            .iter_mut()
            .filter(|(_, r)| r.contribution > Chips::ZERO)
            .map(|(p, r)| {
                let amount = r.contribution;
                r.stack += amount;
                r.contribution = Chips::ZERO;
                (*p, amount)
            })
            .collect::<Vec<_>>();
        refunds.sort();
        refunds
    }
}
