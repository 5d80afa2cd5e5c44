// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown equity calculator.
//!
//! Computes the odds of each seat from the known cards:
//!
//! ```bash
//! $ showdown -s 1=A♠,A♥ -s 2=K♦,K♣ -s 3 -b "2♣ 7♦ 9♠"
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{io, time::Duration};

use showdown_eval::{Config, Error, Scenario, SeatId, Simulator, Table};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// A seat in the hand with its known hole cards, e.g. `1=A♠,K♠` or `3`.
    #[clap(long, short)]
    seat: Vec<String>,
    /// The known board cards, e.g. `2♣,7♦,9♠`.
    #[clap(long, short, default_value = "")]
    board: String,
    /// A seat that has folded.
    #[clap(long, short)]
    fold: Vec<u8>,
    /// The seat with the dealer button.
    #[clap(long, short, default_value_t = 1)]
    dealer: u8,
    /// Deal this many streets before computing the odds.
    #[clap(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    deal: u8,
    /// The number of trials.
    #[clap(long, short, default_value_t = Config::DEFAULT_TRIALS)]
    trials: usize,
    /// The number of parallel tasks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// The random seed.
    #[clap(long)]
    seed: Option<u64>,
    /// Stops the simulation after this many milliseconds.
    #[clap(long)]
    timeout_ms: Option<u64>,
}

/// Splits a list of cards separated by commas or spaces.
fn split_cards(s: &str) -> Vec<&str> {
    s.split([',', ' '])
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Parses a `seat=card,card` argument into the seat and its slots.
fn seat_slots(arg: &str) -> Result<(SeatId, Vec<(String, String)>)> {
    let (seat, cards) = arg.split_once('=').unwrap_or((arg, ""));
    let seat = seat
        .trim()
        .parse::<u8>()
        .map_err(|_| Error::MalformedSlot(arg.to_string()))?;

    let cards = split_cards(cards);
    if cards.len() > 2 {
        bail!("Seat {seat} has {} hole cards", cards.len());
    }

    let slots = cards
        .into_iter()
        .enumerate()
        .map(|(idx, card)| (format!("p{seat}c{}", idx + 1), card.to_string()))
        .collect();

    Ok((SeatId::new(seat), slots))
}

fn board_slots(board: &str) -> Result<Vec<(String, String)>> {
    let cards = split_cards(board);
    if cards.len() > Scenario::BOARD_SIZE {
        return Err(Error::BoardOverflow(cards.len()).into());
    }

    Ok(cards
        .into_iter()
        .enumerate()
        .map(|(idx, card)| (format!("b{idx}"), card.to_string()))
        .collect())
}

fn build_table(cli: &Cli) -> Result<Table> {
    let mut slots = board_slots(&cli.board)?;
    let mut seats = Vec::with_capacity(cli.seat.len());
    for arg in &cli.seat {
        let (seat, seat_slots) = seat_slots(arg)?;
        seats.push(seat);
        slots.extend(seat_slots);
    }

    let mut table = Table::from_slots(slots.iter().map(|(s, c)| (s.as_str(), c.as_str())))?;
    for seat in seats {
        table.set_active(seat, true)?;
    }

    table.set_dealer(SeatId::new(cli.dealer))?;

    for seat in cli.fold.iter().copied().map(SeatId::new) {
        if !table.is_folded(seat) {
            table.toggle_fold(seat)?;
        }
    }

    Ok(table)
}

fn run(cli: Cli) -> Result<()> {
    let mut table = build_table(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for _ in 0..cli.deal {
        let street = table.deal_next_street(&mut rng)?;
        info!("Dealt the {street}");
    }

    let config = Config {
        trials: cli.trials,
        tasks: cli.tasks as usize,
        seed: cli.seed,
        time_limit: cli.timeout_ms.map(Duration::from_millis),
    };

    let mut sim = Simulator::new(config);
    match table.odds(&mut sim) {
        Ok(odds) => report::print_odds(&mut io::stdout(), &table, &odds),
        Err(e @ Error::InsufficientPlayers) => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::{Card, SlotId};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("showdown").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parse_seats() {
        let (seat, slots) = seat_slots("3=A♠,10♥").unwrap();
        assert_eq!(seat, SeatId::new(3));
        assert_eq!(
            slots,
            vec![
                ("p3c1".to_string(), "A♠".to_string()),
                ("p3c2".to_string(), "10♥".to_string())
            ]
        );

        let (seat, slots) = seat_slots("5").unwrap();
        assert_eq!(seat, SeatId::new(5));
        assert!(slots.is_empty());

        assert!(seat_slots("x=A♠").is_err());
        assert!(seat_slots("1=A♠,K♠,Q♠").is_err());
    }

    #[test]
    fn parse_board() {
        assert!(board_slots("").unwrap().is_empty());
        assert_eq!(board_slots("2♣, 7♦ 9♠").unwrap().len(), 3);

        let err = board_slots("2♣ 3♣ 4♣ 5♣ 6♣ 7♣").unwrap_err();
        assert_eq!(err.downcast::<Error>().unwrap(), Error::BoardOverflow(6));
    }

    #[test]
    fn table_from_args() {
        let cli = parse(&[
            "-s", "1=A♠,A♥", "-s", "2=Kd,Kc", "-s", "4", "-f", "2", "-f", "2", "-b", "2♣ 7♦ 9♠",
        ]);

        let table = build_table(&cli).unwrap();
        assert_eq!(
            table.seats(),
            vec![SeatId::new(1), SeatId::new(2), SeatId::new(4)]
        );
        assert!(table.is_folded(SeatId::new(2)));
        assert_eq!(table.board_count(), 3);
        assert_eq!(
            table.card(SlotId::Hole(SeatId::new(2), 1)),
            Some("K♣".parse::<Card>().unwrap())
        );
        assert_eq!(table.contestants().len(), 2);

        // The button defaults to seat 1.
        assert_eq!(table.dealer(), SeatId::new(1));
        let positions = table.positions().unwrap();
        assert_eq!(positions.small_blind, SeatId::new(2));
        assert_eq!(positions.big_blind, SeatId::new(4));
    }

    #[test]
    fn dealer_from_args() {
        let table = build_table(&parse(&["-s", "2", "-s", "5", "-s", "7", "-d", "7"])).unwrap();
        assert_eq!(table.dealer(), SeatId::new(7));
        assert_eq!(table.positions().unwrap().small_blind, SeatId::new(2));

        let err = build_table(&parse(&["-s", "2", "-d", "12"])).unwrap_err();
        assert_eq!(err.downcast::<Error>().unwrap(), Error::InvalidSeat(12));
    }

    #[test]
    fn duplicate_cards_are_rejected() {
        let cli = parse(&["-s", "1=A♠,A♥", "-s", "2=As,Kc"]);
        let err = build_table(&cli).unwrap_err();
        assert!(matches!(
            err.downcast::<Error>().unwrap(),
            Error::DuplicateCard(_)
        ));
    }
}
