//! Тесты нормализатора типов игр: порядок правил значим.

use result_engine::domain::{CanonicalGameType, GameType};
use result_engine::normalize::{clean, normalize};

fn known(raw: &str) -> CanonicalGameType {
    match normalize(raw) {
        GameType::Known(t) => t,
        GameType::Unrecognized(s) => panic!("{raw:?} не распознан (очищено: {s:?})"),
    }
}

#[test]
fn clean_strips_punctuation_and_case() {
    assert_eq!(clean("DRAGON_TIGER_20_2"), "dragontiger202");
    assert_eq!(clean("Teen Patti 2.0-B"), "teenpatti20b");
    assert_eq!(clean("lucky7"), "lucky7");
}

/// Исторические написания API из разных версий фида.
#[test]
fn canonical_spellings() {
    assert_eq!(known("DRAGON_TIGER_20_2"), CanonicalGameType::Dt202);
    assert_eq!(known("CARD_32"), CanonicalGameType::Card32);
    assert_eq!(known("LUCKY7B"), CanonicalGameType::Lucky7Eu);
    assert_eq!(known("TEEN_PATTI_20B"), CanonicalGameType::Teen20B);
    assert_eq!(known("teen20"), CanonicalGameType::Teen20);
    assert_eq!(known("Andar Bahar 20"), CanonicalGameType::Ab20);
    assert_eq!(known("baccarat2"), CanonicalGameType::Baccarat2);
    assert_eq!(known("superover"), CanonicalGameType::SuperOver);
}

/// Анти-пример из продакшена: "lucky715" не должен падать в правило lucky7.
#[test]
fn lucky15_not_shadowed_by_lucky7() {
    assert_eq!(known("lucky715"), CanonicalGameType::Lucky15);
    assert_eq!(known("lucky15"), CanonicalGameType::Lucky15);
    assert_eq!(known("lucky7"), CanonicalGameType::Lucky7);
    assert_eq!(known("lucky7eu"), CanonicalGameType::Lucky7Eu);
}

/// Анти-пример: "dt202" содержит "dt20", а тот содержит "dt"-семейство.
#[test]
fn dragon_tiger_specific_before_general() {
    assert_eq!(known("dt202"), CanonicalGameType::Dt202);
    assert_eq!(known("dt20"), CanonicalGameType::Dt20);
    assert_eq!(known("dt6"), CanonicalGameType::Dt6);
    assert_eq!(known("dt"), CanonicalGameType::Dt6);
    assert_eq!(known("dragontiger202"), CanonicalGameType::Dt202);
    assert_eq!(known("dragontiger20"), CanonicalGameType::Dt20);
    assert_eq!(known("DRAGON TIGER"), CanonicalGameType::Dt6);
    assert_eq!(known("dtl20"), CanonicalGameType::Dtl20);
}

/// "teen20b" содержит "teen20"; оба содержат префикс "teen".
#[test]
fn teen_family_ordering() {
    assert_eq!(known("teen20b"), CanonicalGameType::Teen20B);
    assert_eq!(known("teen20"), CanonicalGameType::Teen20);
    assert_eq!(known("teen32"), CanonicalGameType::Teen32);
    assert_eq!(known("teen3"), CanonicalGameType::Teen3);
    assert_eq!(known("teen8"), CanonicalGameType::Teen8);
    assert_eq!(known("teen9"), CanonicalGameType::Teen9);
    // «голый» teen уходит в классический стол
    assert_eq!(known("teen"), CanonicalGameType::Teen);
    assert_eq!(known("teenpatti"), CanonicalGameType::Teen);
}

#[test]
fn card32_eu_before_card32() {
    assert_eq!(known("card32eu"), CanonicalGameType::Card32Eu);
    assert_eq!(known("card32"), CanonicalGameType::Card32);
}

/// Обе гонки принимают написание "race to N".
#[test]
fn race_spellings() {
    assert_eq!(known("raceto17"), CanonicalGameType::Race17);
    assert_eq!(known("raceto20"), CanonicalGameType::Race20);
    assert_eq!(known("race17"), CanonicalGameType::Race17);
    assert_eq!(known("race20"), CanonicalGameType::Race20);
}

/// Нормализатор тотальный: на любой строке что-то возвращается.
#[test]
fn unrecognized_is_explicit_passthrough() {
    match normalize("Some Brand New Game!") {
        GameType::Unrecognized(s) => assert_eq!(s, "somebrandnewgame"),
        GameType::Known(t) => panic!("не должен был распознаться: {t}"),
    }

    // пустая и мусорная строки тоже не роняют
    assert!(normalize("").is_unrecognized());
    assert!(normalize("!@#$%").is_unrecognized());
}

/// Каждое каноническое имя распознаётся самим собой.
#[test]
fn canonical_names_roundtrip() {
    for game in CanonicalGameType::ALL {
        assert_eq!(
            known(game.name()),
            *game,
            "имя {} не вернулось в свой тип",
            game.name()
        );
    }
}
