//! Тесты крикет-мета пути: агрегация ball-by-ball записей.

use result_engine::decode_round;
use result_engine::domain::{DecodeFlag, SideMarketValue};
use result_engine::feed::RawRoundRecord;
use serde_json::json;

fn record(game: &str, balls: Vec<serde_json::Value>) -> RawRoundRecord {
    let mut rec = RawRoundRecord::new(game, "214250101");
    rec.score = Some(balls);
    rec
}

fn number(result: &result_engine::domain::CanonicalResult, name: &str) -> i64 {
    match result
        .side_market(name)
        .unwrap_or_else(|| panic!("нет рынка {name}"))
        .value
    {
        SideMarketValue::Number(n) => n,
        ref other => panic!("{name}: ожидалось число, а не {other:?}"),
    }
}

/// Мячи группируются по иннингсам: раны, калитки, оверы.
#[test]
fn balls_aggregate_by_innings() {
    let result = decode_round(&record(
        "superover",
        vec![
            json!({"innings": 1, "runs": 4, "isWicket": false}),
            json!({"innings": 1, "runs": 6, "isWicket": false}),
            json!({"innings": 1, "runs": 0, "isWicket": true}),
            json!({"innings": 2, "runs": 1, "isWicket": false}),
        ],
    ));

    assert_eq!(number(&result, "Innings 1 Runs"), 10);
    assert_eq!(number(&result, "Innings 1 Wickets"), 1);
    assert_eq!(number(&result, "Innings 2 Runs"), 1);
    assert_eq!(number(&result, "Innings 2 Wickets"), 0);
    assert!(result.participant("Team 1").is_some());
    assert!(result.participant("Team 2").is_some());
}

/// Оверы считаются из числа мячей: 6 мячей = 1 овер.
#[test]
fn overs_derived_from_ball_count() {
    let balls: Vec<serde_json::Value> = (0..8)
        .map(|_| json!({"innings": 1, "runs": 1}))
        .collect();
    let result = decode_round(&record("cricketv3", balls));

    let overs = result.side_market("Innings 1 Overs").unwrap();
    assert_eq!(overs.value, SideMarketValue::Text("1.2".to_string()));
}

/// Ключи и типы в записях мячей гуляют: принимаем альтернативные
/// написания и числа-в-строках.
#[test]
fn tolerates_alternate_keys_and_string_numbers() {
    let result = decode_round(&record(
        "kbc",
        vec![
            json!({"inning": "1", "run": "4", "wicket": "1"}),
            json!({"inning": 1, "run": 2}),
        ],
    ));

    assert_eq!(number(&result, "Innings 1 Runs"), 6);
    assert_eq!(number(&result, "Innings 1 Wickets"), 1);
}

/// Кривой мяч пропускается с флагом, остальные считаются.
#[test]
fn malformed_ball_is_flagged_and_skipped() {
    let result = decode_round(&record(
        "cmatch20",
        vec![
            json!({"innings": 1, "runs": 4}),
            json!("не объект"),
            json!({"runs": 2}), // нет иннингса
            json!({"innings": 1, "runs": 1}),
        ],
    ));

    assert_eq!(number(&result, "Innings 1 Runs"), 5);
    assert!(result
        .flags
        .iter()
        .any(|f| matches!(f, DecodeFlag::MalformedBallRecord(1))));
    assert!(result
        .flags
        .iter()
        .any(|f| matches!(f, DecodeFlag::MalformedBallRecord(2))));
}

/// Победитель — только из карты кодов, из сырых мячей не выводится.
#[test]
fn winner_comes_from_code_map_only() {
    let mut rec = record(
        "superover",
        vec![
            json!({"innings": 1, "runs": 20}),
            json!({"innings": 2, "runs": 3}),
        ],
    );
    rec.win = Some("2".to_string());
    let result = decode_round(&rec);

    // Team 1 набрала больше, но код говорит Team 2
    assert!(result.participant("Team 2").unwrap().is_winner);
    assert!(!result.participant("Team 1").unwrap().is_winner);
    assert_eq!(result.win_label, "Team 2");
}

/// Без score — флаг и пустые рынки, но команды-участники на месте.
#[test]
fn missing_score_is_flagged() {
    let result = decode_round(&RawRoundRecord::new("kbc", "214250101"));

    assert!(result.side_markets.is_empty());
    assert_eq!(result.participants.len(), 2);
    assert!(result
        .flags
        .iter()
        .any(|f| matches!(f, DecodeFlag::MissingField(n) if n == "score")));
}

/// Фид прислал третий иннингс — команда добавляется динамически.
#[test]
fn extra_innings_add_teams() {
    let result = decode_round(&record(
        "cricketv3",
        vec![json!({"innings": 3, "runs": 1})],
    ));

    assert!(result.participant("Team 3").is_some());
    assert_eq!(number(&result, "Innings 3 Runs"), 1);
}
