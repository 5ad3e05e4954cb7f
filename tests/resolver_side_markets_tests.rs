//! Тесты вычислителей побочных рынков.

use result_engine::decode_round;
use result_engine::domain::SideMarketValue;
use result_engine::feed::RawRoundRecord;

fn record(game: &str, cards: &str) -> RawRoundRecord {
    let mut rec = RawRoundRecord::new(game, "114250101");
    rec.cards = Some(cards.to_string());
    rec
}

fn flag_value(result: &result_engine::domain::CanonicalResult, name: &str) -> bool {
    match result
        .side_market(name)
        .unwrap_or_else(|| panic!("нет рынка {name}"))
        .value
    {
        SideMarketValue::Flag(b) => b,
        ref other => panic!("{name}: ожидался флаг, а не {other:?}"),
    }
}

fn text_value(result: &result_engine::domain::CanonicalResult, name: &str) -> String {
    match &result
        .side_market(name)
        .unwrap_or_else(|| panic!("нет рынка {name}"))
        .value
    {
        SideMarketValue::Text(s) => s.clone(),
        other => panic!("{name}: ожидался текст, а не {other:?}"),
    }
}

/// Pair plus: повтор ранга в руке, ранги через масти не сравниваются.
#[test]
fn pair_markets() {
    let mut rec = record("teen20", "AHH,2SS,ADD,4CC,5HH,6SS");
    rec.win = Some("1".to_string());
    let result = decode_round(&rec);

    // Player A: AH, AD, 5H — пара тузов
    assert!(flag_value(&result, "Player A Pair"));
    // Player B: 2S, 4C, 6S — пары нет
    assert!(!flag_value(&result, "Player B Pair"));
}

/// Color plus: вся рука одного цвета.
#[test]
fn color_plus_markets() {
    let mut rec = record("teen32", "AHH,2SS,3DD,4CC,5HH,6SS");
    rec.win = Some("1".to_string());
    let result = decode_round(&rec);

    // Player A: AH, 3D, 5H — все красные
    assert!(flag_value(&result, "Player A Color Plus"));
    // Player B: 2S, 4C, 6S — все чёрные, тоже плюс
    assert!(flag_value(&result, "Player B Color Plus"));

    let mut mixed = record("teen32", "AHH,2SS,3CC,4CC,5HH,6SS");
    mixed.win = Some("1".to_string());
    let result = decode_round(&mixed);
    // Player A: AH, 3C, 5H — цвета смешаны
    assert!(!flag_value(&result, "Player A Color Plus"));
}

/// cmeter: порог суммы «60 or More».
#[test]
fn threshold_sum_market() {
    // 13+13+13+13+12 = 64
    let over = decode_round(&record("cmeter", "KHH,KSS,KDD,KCC,QHH"));
    assert!(flag_value(&over, "60 or More"));

    let under = decode_round(&record("cmeter", "2HH,3SS"));
    assert!(!flag_value(&under, "60 or More"));
}

/// race20: суммы очков по мастям; несданные масти не утверждаются.
#[test]
fn suit_groups_market() {
    let result = decode_round(&record("race20", "KHH,5HH,QDD,2SS"));

    assert_eq!(
        result.side_market("Hearts").unwrap().value,
        SideMarketValue::Number(18)
    );
    assert_eq!(
        result.side_market("Diamonds").unwrap().value,
        SideMarketValue::Number(12)
    );
    assert_eq!(
        result.side_market("Spades").unwrap().value,
        SideMarketValue::Number(2)
    );
    // треф не сдавали — рынка нет
    assert!(result.side_market("Clubs").is_none());
}

/// lucky7: чёт/нечет и цвет решающей карты.
#[test]
fn odd_even_and_red_black_markets() {
    let result = decode_round(&record("lucky7", "KSS"));
    assert_eq!(text_value(&result, "Card Odd/Even"), "Odd");
    assert_eq!(text_value(&result, "Card Red/Black"), "Black");

    let result = decode_round(&record("lucky7", "QHH"));
    assert_eq!(text_value(&result, "Card Odd/Even"), "Even");
    assert_eq!(text_value(&result, "Card Red/Black"), "Red");
}

/// dt6: рынки решающих карт именуются по роли.
#[test]
fn dt_markets_are_role_prefixed() {
    let result = decode_round(&record("dt6", "KHH,4SS"));

    assert_eq!(text_value(&result, "Dragon Odd/Even"), "Odd");
    assert_eq!(text_value(&result, "Dragon Red/Black"), "Red");
    assert_eq!(text_value(&result, "Tiger Odd/Even"), "Even");
    assert_eq!(text_value(&result, "Tiger Red/Black"), "Black");
}

/// abj: первый сегмент описания — карта-джокер.
#[test]
fn desc_segment_market() {
    let mut rec = record("abj", "KHH,AHH");
    rec.desc = Some("9DD#extra".to_string());
    let result = decode_round(&rec);

    assert_eq!(text_value(&result, "Joker"), "9DD");
}

/// Несданная рука не порождает рынков — «не знаем» лучше, чем враньё.
#[test]
fn undealt_hands_produce_no_markets() {
    let result = decode_round(&record("dt6", "KHH,1"));

    assert!(result.side_market("Tiger Odd/Even").is_none());
    assert!(result.side_market("Tiger Red/Black").is_none());
    // у дракона карта есть, его рынки на месте
    assert!(result.side_market("Dragon Odd/Even").is_some());
}
