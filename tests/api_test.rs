//! Тесты внешнего API: разбор JSON-команд, выполнение, запросы, форма DTO.

use blackjack_table::{
    api::{
        answer_query, decode_command, execute_command, ApiError, CommandResponse, OutcomeDto,
        Query, QueryResponse, TableCommand,
    },
    domain::{BetBounds, BetSource, BoundsError, Chips, Phase, RawBet},
    engine::{RoundAction, TableController},
    infra::{ManualFrameScheduler, RecordingSink},
};

type TestTable = TableController<RecordingSink, ManualFrameScheduler>;

/// Утилита: стол 0..=500 с шагом 5.
fn make_table() -> TestTable {
    let bounds = BetBounds::new(Chips(0), Chips(500), Chips(5)).unwrap();
    TableController::new(bounds, RecordingSink::new(), ManualFrameScheduler::new())
}

/// Утилита: разобрать и выполнить JSON-команду.
fn run(table: &mut TestTable, json: &str) -> OutcomeDto {
    let cmd = decode_command(json).expect("команда должна разбираться");
    OutcomeDto::from(&execute_command(table, cmd))
}

#[test]
fn decode_submit_bet_with_string_value() {
    let cmd = decode_command(r#"{"type":"submit_bet","value":"7","source":"number"}"#).unwrap();
    assert_eq!(
        cmd,
        TableCommand::SubmitBet {
            value: RawBet::Text("7".to_string()),
            source: BetSource::Number,
        }
    );
    assert_eq!(cmd.round_action(), None);
}

#[test]
fn decode_submit_bet_with_numeric_value() {
    let cmd = decode_command(r#"{"type":"submit_bet","value":120,"source":"range"}"#).unwrap();
    match cmd {
        TableCommand::SubmitBet { value, source } => {
            assert_eq!(value.to_number(), 120.0);
            assert_eq!(source, BetSource::Range);
        }
        other => panic!("ожидали SubmitBet, получили {other:?}"),
    }
}

#[test]
fn decode_round_actions() {
    let cases = [
        (r#"{"type":"deal"}"#, RoundAction::Deal),
        (r#"{"type":"hit"}"#, RoundAction::Hit),
        (r#"{"type":"stand"}"#, RoundAction::Stand),
        (r#"{"type":"reset"}"#, RoundAction::Reset),
    ];
    for (json, action) in cases {
        assert_eq!(decode_command(json).unwrap().round_action(), Some(action));
    }
    assert_eq!(decode_command(r#"{"type":"tick"}"#).unwrap(), TableCommand::Tick);
}

#[test]
fn decode_rejects_bad_json_and_unknown_source() {
    assert!(matches!(decode_command("not json"), Err(ApiError::BadRequest(_))));
    assert!(matches!(
        decode_command(r#"{"type":"submit_bet","value":"7","source":"slider"}"#),
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        decode_command(r#"{"type":"double_down"}"#),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn json_driven_round() {
    let mut table = make_table();

    assert!(run(&mut table, r#"{"type":"submit_bet","value":"7","source":"number"}"#).applied);
    assert!(run(&mut table, r#"{"type":"tick"}"#).applied);
    assert_eq!(table.bet().canonical(), Chips(5));

    assert!(run(&mut table, r#"{"type":"deal"}"#).applied);
    assert!(run(&mut table, r#"{"type":"hit"}"#).applied);

    let ignored = run(&mut table, r#"{"type":"deal"}"#);
    assert!(!ignored.applied);
    assert!(ignored.ignored.is_some());

    assert!(run(&mut table, r#"{"type":"stand"}"#).applied);
    assert_eq!(table.phase(), Phase::RoundOver);

    assert!(run(&mut table, r#"{"type":"reset"}"#).applied);
    assert_eq!(table.phase(), Phase::Betting);
    assert_eq!(table.bet().canonical(), Chips::ZERO);
}

#[test]
fn snapshot_json_shape() {
    let mut table = make_table();
    table.submit_bet(1250.0, BetSource::Range);
    table.pump_frame();

    let json = serde_json::to_value(table.snapshot()).unwrap();
    assert_eq!(json["phase"], "BETTING");
    assert_eq!(json["status"], "Ready to deal");
    assert_eq!(json["bet"], 500);
    assert_eq!(json["bet_display"], "$500");
    assert_eq!(json["number_value"], "500");
    assert_eq!(json["range_value"], "1250");
    assert_eq!(json["bet_inputs_enabled"], true);
    assert_eq!(json["deal_enabled"], true);
    assert_eq!(json["hit_enabled"], false);
    assert_eq!(json["dealer"], serde_json::json!(["REAL", "REAL", "GHOST"]));
}

#[test]
fn command_response_serializes_outcome_and_table() {
    let mut table = make_table();
    let outcome = execute_command(&mut table, TableCommand::Hit);
    let response = CommandResponse {
        outcome: OutcomeDto::from(&outcome),
        table: table.snapshot(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["outcome"]["applied"], false);
    assert!(json["outcome"]["ignored"].is_string());
    assert_eq!(json["table"]["phase"], "BETTING");
}

#[test]
fn queries_are_read_only() {
    let table = make_table();

    match answer_query(&table, &Query::GetBounds) {
        QueryResponse::Bounds(b) => {
            assert_eq!(b.min, Chips(0));
            assert_eq!(b.max, Chips(500));
            assert_eq!(b.step, Chips(5));
        }
        other => panic!("ожидали Bounds, получили {other:?}"),
    }

    match answer_query(&table, &Query::GetTable) {
        QueryResponse::Table(s) => assert_eq!(s, table.snapshot()),
        other => panic!("ожидали Table, получили {other:?}"),
    }

    // Запросы ничего не отправляют: в приёмнике только стартовый снапшот.
    assert_eq!(table.sink().len(), 1);
}

#[test]
fn api_error_from_bounds_error() {
    let err: ApiError = BoundsError::ZeroStep.into();
    assert!(matches!(err, ApiError::InvalidConfig(_)));
}
