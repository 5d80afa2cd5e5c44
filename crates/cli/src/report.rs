// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds report.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io;

use showdown_eval::{Card, HandValue, SeatId, SlotId, Table, TableOdds};

fn symbols(cards: &[Option<Card>]) -> String {
    cards
        .iter()
        .map(|c| c.map(|c| c.symbol()).unwrap_or_else(|| "??".to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The best hand of a seat when it has at least five known cards.
fn best_hand(table: &Table, seat: SeatId) -> String {
    let cards = [table.card(SlotId::Hole(seat, 0)), table.card(SlotId::Hole(seat, 1))]
        .into_iter()
        .chain(table.board())
        .flatten()
        .collect::<Vec<_>>();

    match HandValue::eval_with_best_hand(&cards) {
        Some((value, hand)) => format!("{value} {}", symbols(&hand.map(Some))),
        None => String::new(),
    }
}

/// Prints the board, a row for each seat in the hand and the status line.
pub fn print_odds(w: &mut impl io::Write, table: &Table, odds: &TableOdds) -> Result<()> {
    writeln!(w, "Board: {}", symbols(&table.board()))?;

    let leaders = odds.leaders();
    let winners = odds.winners().unwrap_or_default();
    let positions = table.positions();

    for (seat, seat_odds) in odds.iter() {
        let hole = [table.card(SlotId::Hole(seat, 0)), table.card(SlotId::Hole(seat, 1))];
        let label = if winners.contains(&seat) { "WINNER" } else { "" };
        let position = positions.map(|p| p.label(seat)).unwrap_or_default();

        let text = format!(
            "{:<4}|{position:<4}|{:<6}|{:>7}|{:<32}|{label}",
            seat.to_string(),
            symbols(&hole),
            seat_odds.to_string(),
            best_hand(table, seat),
        );

        if leaders.contains(&seat) {
            queue!(w, style::PrintStyledContent(text.as_str().dark_green()))?;
        } else {
            write!(w, "{text}")?;
        }

        writeln!(w)?;
    }

    writeln!(w, "{}", odds.status())?;
    w.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::{Config, Simulator};

    #[test]
    fn river_report() {
        let mut table = Table::from_slots([
            ("p1c1", "A♠"),
            ("p1c2", "A♥"),
            ("p2c1", "K♦"),
            ("p2c2", "K♣"),
            ("p3c1", "Q♦"),
            ("b0", "2♣"),
            ("b1", "7♦"),
            ("b2", "9♠"),
            ("b3", "J♥"),
            ("b4", "4♦"),
        ])
        .unwrap();
        table.toggle_fold(SeatId::new(3)).unwrap();

        let mut sim = Simulator::new(Config {
            trials: 50,
            seed: Some(1),
            ..Config::default()
        });
        let odds = table.odds(&mut sim).unwrap();

        let mut out = Vec::new();
        print_odds(&mut out, &table, &odds).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Board: 2♣ 7♦ 9♠ J♥ 4♦"), "{out}");
        assert!(out.contains("100.0%"), "{out}");
        assert!(out.contains("One Pair A♠ A♥ J♥ 9♠ 7♦"), "{out}");
        assert!(out.contains("WINNER"), "{out}");
        assert!(out.contains("Q♦ ??"), "{out}");
        assert!(out.contains("Fold"), "{out}");
        assert!(out.contains("Simulated 2 players over 50 trials"), "{out}");
        assert!(out.contains("P1  |D   |A♠ A♥"), "{out}");
        assert!(out.contains("P3  |BB  |Q♦ ??"), "{out}");
    }

    #[test]
    fn preflop_hands_are_not_ranked() {
        let table = Table::from_slots([("p1c1", "A♠"), ("p1c2", "A♥")]).unwrap();
        assert_eq!(best_hand(&table, SeatId::new(1)), "");
        assert_eq!(symbols(&[None, table.card(SlotId::Hole(SeatId::new(1), 1))]), "?? A♥");
    }
}
