// src/bin/table_dev_cli.rs
//
// Консольный стол для ручной проверки движка.
//
//   cargo run --bin table_dev_cli -- [config.json]
//
// Одна строка stdin = один кадр. Команды в строке разделяются `;`,
// после строки кадр прокручивается, так что несколько правок в одной
// строке склеиваются в один коммит:
//
//   number 5; number 12; number 9
//   deal
//   hit
//   stand
//   reset
//
// Можно присылать и JSON-команды API: {"type":"submit_bet","value":"7","source":"number"}

use std::io::{self, BufRead};
use std::process::ExitCode;

use blackjack_table::api::{decode_command, execute_command, TableCommand};
use blackjack_table::domain::{BetSource, RawBet, Slot};
use blackjack_table::engine::{PresentationSink, TableController, TableSnapshot};
use blackjack_table::infra::{ManualFrameScheduler, TableConfig};

/// Печатает каждый снапшот одной строкой.
struct PrintSink;

impl PresentationSink for PrintSink {
    fn on_state_change(&mut self, s: &TableSnapshot) {
        println!(
            "[{}] {} | bet={} (range={}, number={}) | inputs={} deal={} hit={} stand={}",
            s.phase,
            s.status,
            s.bet_display,
            s.range_value,
            s.number_value,
            on_off(s.bet_inputs_enabled),
            on_off(s.deal_enabled),
            on_off(s.hit_enabled),
            on_off(s.stand_enabled),
        );
        println!("    dealer: {}", render_hand(s.dealer.slots()));
        println!("    player: {}", render_hand(s.player.slots()));
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn render_hand(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(|s| match s {
            Slot::Real => "[##]",
            Slot::Ghost => "[  ]",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Разобрать одну команду: короткий синтаксис или JSON.
fn parse_command(input: &str) -> Result<TableCommand, String> {
    if input.starts_with('{') {
        return decode_command(input).map_err(|e| e.to_string());
    }

    let mut parts = input.split_whitespace();
    let head = parts.next().unwrap_or_default();
    let rest = parts.collect::<Vec<_>>().join(" ");

    match head {
        "range" | "number" => {
            let source = head.parse::<BetSource>().map_err(|e| e.to_string())?;
            Ok(TableCommand::SubmitBet {
                value: RawBet::Text(rest),
                source,
            })
        }
        "tick" => Ok(TableCommand::Tick),
        "deal" => Ok(TableCommand::Deal),
        "hit" => Ok(TableCommand::Hit),
        "stand" => Ok(TableCommand::Stand),
        "reset" => Ok(TableCommand::Reset),
        other => Err(format!("неизвестная команда: {other}")),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match TableConfig::load(&path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Ошибка конфига: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => TableConfig::default(),
    };

    let bounds = match config.bet_bounds() {
        Ok(b) => b,
        Err(err) => {
            eprintln!("Ошибка конфига: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "=== TABLE DEV CLI === bet {}..={} step {}",
        bounds.min(),
        bounds.max(),
        bounds.step()
    );

    let mut table = TableController::new(bounds, PrintSink, ManualFrameScheduler::new());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(err) => {
                eprintln!("Ошибка чтения stdin: {err}");
                return ExitCode::FAILURE;
            }
        };

        for raw in line.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            if raw == "show" {
                table.publish();
                continue;
            }
            match parse_command(raw) {
                Ok(cmd) => {
                    let outcome = execute_command(&mut table, cmd);
                    if let Some(reason) = outcome.ignored_reason() {
                        println!("  (ничего не произошло: {reason})");
                    }
                }
                Err(err) => println!("  {err}"),
            }
        }

        // Конец строки = кадр отрисовки.
        table.pump_frame();
    }

    println!("=== TABLE DEV CLI DONE ===");
    ExitCode::SUCCESS
}
