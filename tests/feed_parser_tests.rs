//! Тесты разбора сырых полей записи (crate::feed).

use result_engine::descriptor::descriptor_for;
use result_engine::domain::{CanonicalGameType, DecodeFlag};
use result_engine::feed::{parse_record, RawRoundRecord};

fn record(game: &str) -> RawRoundRecord {
    RawRoundRecord::new(game, "114250101")
}

/// Заглушки в CSV остаются на своих позициях: раскладка позиционная.
#[test]
fn cards_keep_placeholder_positions() {
    let mut rec = record("teen20");
    rec.cards = Some("AHH,1,3DD,1,5HH,1".to_string());

    let descriptor = descriptor_for(CanonicalGameType::Teen20);
    let mut flags = Vec::new();
    let parsed = parse_record(&rec, descriptor, &mut flags);

    assert_eq!(parsed.cards.len(), 6);
    assert!(!parsed.cards[0].placeholder);
    assert!(parsed.cards[1].placeholder);
    assert!(parsed.cards[3].placeholder);
    assert!(parsed.cards[5].placeholder);
}

/// Нечитаемый токен даёт флаг, но не выкидывается из последовательности.
#[test]
fn malformed_token_is_flagged_not_dropped() {
    let mut rec = record("dt6");
    rec.cards = Some("AHH,???".to_string());

    let descriptor = descriptor_for(CanonicalGameType::Dt6);
    let mut flags = Vec::new();
    let parsed = parse_record(&rec, descriptor, &mut flags);

    assert_eq!(parsed.cards.len(), 2);
    assert!(parsed.cards[1].is_malformed());
    assert!(flags
        .iter()
        .any(|f| matches!(f, DecodeFlag::MalformedCardToken(t) if t == "???")));
}

/// Отсутствие карт и описания — не ошибка, а флаги `MissingField`.
#[test]
fn missing_fields_are_flagged() {
    let rec = record("teen20");
    let descriptor = descriptor_for(CanonicalGameType::Teen20);
    let mut flags = Vec::new();
    let parsed = parse_record(&rec, descriptor, &mut flags);

    assert!(parsed.cards.is_empty());
    assert!(parsed.desc_segments.is_empty());
    assert!(flags
        .iter()
        .any(|f| matches!(f, DecodeFlag::MissingField(n) if n == "cards")));
    assert!(flags
        .iter()
        .any(|f| matches!(f, DecodeFlag::MissingField(n) if n == "desc")));
}

/// У игр нового формата `newdesc` предпочтителен, но только если он
/// реально сегментирован.
#[test]
fn newdesc_preferred_when_segmented() {
    let descriptor = descriptor_for(CanonicalGameType::Teen20);
    assert!(descriptor.prefer_newdesc);

    let mut rec = record("teen20");
    rec.desc = Some("old#fields".to_string());
    rec.newdesc = Some("Pair#Plus".to_string());

    let mut flags = Vec::new();
    let parsed = parse_record(&rec, descriptor, &mut flags);
    assert_eq!(parsed.desc_segments, vec!["Pair", "Plus"]);
}

/// `newdesc` без `#` — не сегментирован, берём старый `desc`.
#[test]
fn unsegmented_newdesc_falls_back_to_desc() {
    let descriptor = descriptor_for(CanonicalGameType::Teen20);

    let mut rec = record("teen20");
    rec.desc = Some("old#fields".to_string());
    rec.newdesc = Some("plain text".to_string());

    let mut flags = Vec::new();
    let parsed = parse_record(&rec, descriptor, &mut flags);
    assert_eq!(parsed.desc_segments, vec!["old", "fields"]);
}

/// У старых игр порядок обратный: сперва `desc`.
#[test]
fn legacy_games_prefer_desc() {
    let descriptor = descriptor_for(CanonicalGameType::Dt6);
    assert!(!descriptor.prefer_newdesc);

    let mut rec = record("dt6");
    rec.desc = Some("a#b".to_string());
    rec.newdesc = Some("c#d".to_string());

    let mut flags = Vec::new();
    let parsed = parse_record(&rec, descriptor, &mut flags);
    assert_eq!(parsed.desc_segments, vec!["a", "b"]);
}

/// Сегменты описания подрезаются по краям.
#[test]
fn desc_segments_are_trimmed() {
    let descriptor = descriptor_for(CanonicalGameType::Dt6);

    let mut rec = record("dt6");
    rec.desc = Some(" High Card # Red ".to_string());

    let mut flags = Vec::new();
    let parsed = parse_record(&rec, descriptor, &mut flags);
    assert_eq!(parsed.desc_segments, vec!["High Card", "Red"]);
}

/// Пустые win/winnat эквивалентны отсутствующим.
#[test]
fn blank_win_fields_are_none() {
    let descriptor = descriptor_for(CanonicalGameType::Dt6);

    let mut rec = record("dt6");
    rec.win = Some("   ".to_string());
    rec.winnat = Some("".to_string());

    let mut flags = Vec::new();
    let parsed = parse_record(&rec, descriptor, &mut flags);
    assert_eq!(parsed.win, None);
    assert_eq!(parsed.winnat, None);
}
