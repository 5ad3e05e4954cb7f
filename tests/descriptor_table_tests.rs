//! Тесты статической таблицы дескрипторов: инварианты по всем играм
//! плюс точечные игро-специфичные записи.

use result_engine::descriptor::{descriptor_for, DescriptorKind, WinTarget};
use result_engine::domain::CanonicalGameType;

/// Инварианты, обязательные для каждой записи таблицы.
#[test]
fn every_game_has_consistent_descriptor() {
    for game in CanonicalGameType::ALL {
        let d = descriptor_for(*game);
        assert_eq!(d.game, *game, "дескриптор {} ссылается не на себя", game);
        assert!(
            !d.distribution.roles().is_empty(),
            "{}: пустой список ролей",
            game
        );
        assert!(
            !d.asset_namespace.is_empty(),
            "{}: пустой неймспейс ассетов",
            game
        );
    }
}

/// Дубликатов кодов внутри одной карты быть не может.
#[test]
fn win_codes_are_unique_per_game() {
    for game in CanonicalGameType::ALL {
        let d = descriptor_for(*game);
        for (i, (code, _)) in d.win_codes.iter().enumerate() {
            let dup = d.win_codes[i + 1..].iter().any(|(c, _)| c == code);
            assert!(!dup, "{}: код {:?} описан дважды", game, code);
        }
    }
}

/// Один и тот же литерал кода значит разное в разных играх.
#[test]
fn win_code_scope_is_per_game() {
    let dt6 = descriptor_for(CanonicalGameType::Dt6);
    let dt20 = descriptor_for(CanonicalGameType::Dt20);
    let dtl20 = descriptor_for(CanonicalGameType::Dtl20);

    // "2" в dt6 — Tiger; в dt20 такого кода вообще нет
    assert_eq!(dt6.win_target("2"), Some(WinTarget::Role("Tiger")));
    assert_eq!(dt20.win_target("2"), None);

    // "21" в dt20 — Tiger, в dt6 не описан
    assert_eq!(dt20.win_target("21"), Some(WinTarget::Role("Tiger")));
    assert_eq!(dt6.win_target("21"), None);

    // "41" — Tie в dt20, но Lion в dtl20
    assert_eq!(dt20.win_target("41"), Some(WinTarget::Tie));
    assert_eq!(dtl20.win_target("41"), Some(WinTarget::Role("Lion")));
}

/// У классического teen и teen20 разные коды Player B.
#[test]
fn teen_families_use_different_player_b_codes() {
    let teen = descriptor_for(CanonicalGameType::Teen);
    let teen20 = descriptor_for(CanonicalGameType::Teen20);

    assert_eq!(teen.win_target("21"), Some(WinTarget::Role("Player B")));
    assert_eq!(teen20.win_target("2"), Some(WinTarget::Role("Player B")));
    assert_eq!(teen20.win_target("21"), None);
}

/// Исторический казус: стол teen20b рисуется ассетами baccarat2.
#[test]
fn teen20b_borrows_baccarat2_assets() {
    let d = descriptor_for(CanonicalGameType::Teen20B);
    assert_eq!(d.asset_namespace, "baccarat2");
    // при этом остаётся карточной teen-игрой, не баккарой
    assert_eq!(d.kind, DescriptorKind::CardGame);
    assert_eq!(d.distribution.roles(), vec!["Player A", "Player B"]);
}

/// Крикет-столы идут через ball-by-ball путь, карточные — нет.
#[test]
fn cricket_tables_are_meta() {
    for game in [
        CanonicalGameType::Kbc,
        CanonicalGameType::CricketV3,
        CanonicalGameType::SuperOver,
        CanonicalGameType::CMatch20,
    ] {
        assert_eq!(descriptor_for(game).kind, DescriptorKind::CricketMeta);
    }
    assert_eq!(
        descriptor_for(CanonicalGameType::Teen).kind,
        DescriptorKind::CardGame
    );
}

/// teen8: 24 карты основного круга, хвост — дилеру.
#[test]
fn teen8_roles_include_trailing_dealer() {
    let roles = descriptor_for(CanonicalGameType::Teen8).distribution.roles();
    assert_eq!(roles.len(), 9);
    assert_eq!(roles[0], "Player 1");
    assert_eq!(roles[8], "Dealer");
}

/// Andar bahar: ab20 ведёт джокер, abj — нет.
#[test]
fn andar_bahar_joker_variants() {
    let ab20 = descriptor_for(CanonicalGameType::Ab20).distribution.roles();
    assert_eq!(ab20, vec!["Joker", "Andar", "Bahar"]);

    let abj = descriptor_for(CanonicalGameType::Abj).distribution.roles();
    assert_eq!(abj, vec!["Andar", "Bahar"]);
}
