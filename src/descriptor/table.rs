//! Статическая таблица дескрипторов: один `GameDescriptor` на каждый
//! канонический тип. Здесь закодированы игро-специфичные, никуда не
//! обобщаемые правила — каждая запись покрывается тестами отдельно.

use crate::domain::card::Suit;
use crate::domain::CanonicalGameType;

use super::distribution::{DistributionRule, SlotSpec};
use super::side_markets::SideMarketRule;
use super::GameDescriptor;

use super::distribution::DistributionRule::{
    Alternating, Board, BySuit, Columns, FixedSlots, RoundRobin,
};
use super::side_markets::SideMarketRule::{
    ColorPlus, DescSegment, OddEven, Pair, RedBlack, SuitGroups, ThresholdSum,
};
use super::win::WinFallback as Fb;
use super::win::WinTarget::{NoResult, Outcome, Role, Tie};
use super::DescriptorKind::{CardGame, CricketMeta};

// Роли, повторяющиеся между играми. Сами КОДЫ победителей между играми
// не разделяются — у каждого дескриптора своя карта.
const PLAYER_A: &str = "Player A";
const PLAYER_B: &str = "Player B";
const DRAGON: &str = "Dragon";
const TIGER: &str = "Tiger";
const LION: &str = "Lion";
const ANDAR: &str = "Andar";
const BAHAR: &str = "Bahar";
const JOKER: &str = "Joker";
const DEALER: &str = "Dealer";
const PLAYER: &str = "Player";
const BANKER: &str = "Banker";
const BOARD: &str = "Board";

const AB_PAIR: &[&str] = &[PLAYER_A, PLAYER_B];
const TEEN8_PLAYERS: &[&str] = &[
    "Player 1", "Player 2", "Player 3", "Player 4", "Player 5", "Player 6", "Player 7",
    "Player 8",
];
const POKER6_PLAYERS: &[&str] = &[
    "Player 1", "Player 2", "Player 3", "Player 4", "Player 5", "Player 6",
];
const CARD32_PLAYERS: &[&str] = &["Player 8", "Player 9", "Player 10", "Player 11"];
const QUEEN_TOTALS: &[&str] = &["Total 0", "Total 1", "Total 2", "Total 3"];
const SUIT_RACERS: &[(Suit, &str)] = &[
    (Suit::Hearts, "Hearts"),
    (Suit::Diamonds, "Diamonds"),
    (Suit::Clubs, "Clubs"),
    (Suit::Spades, "Spades"),
];
const CRICKET_TEAMS: &[&str] = &["Team 1", "Team 2"];

// Чередование A/B без джокера — основная раздача семейства teen patti:
// Player A получает чётные позиции, Player B нечётные.
const TEEN_DEAL: DistributionRule = Alternating {
    first: PLAYER_A,
    second: PLAYER_B,
    lead_joker: None,
};

// Баккара: карты игрока на позициях 0,1,4, банкира — 2,3,5
// (пятая/шестая — третьи карты, если их доносили).
const BACCARAT_DEAL: DistributionRule = FixedSlots(&[
    SlotSpec {
        role: PLAYER,
        indices: &[0, 1, 4],
    },
    SlotSpec {
        role: BANKER,
        indices: &[2, 3, 5],
    },
]);

const DT_DEAL: DistributionRule = FixedSlots(&[
    SlotSpec {
        role: DRAGON,
        indices: &[0],
    },
    SlotSpec {
        role: TIGER,
        indices: &[1],
    },
]);

const DT_MARKETS: &[SideMarketRule] = &[
    OddEven {
        role: DRAGON,
        index: 0,
    },
    RedBlack {
        role: DRAGON,
        index: 0,
    },
    OddEven {
        role: TIGER,
        index: 0,
    },
    RedBlack {
        role: TIGER,
        index: 0,
    },
];

const TEEN_PAIR_MARKETS: &[SideMarketRule] =
    &[Pair { role: PLAYER_A }, Pair { role: PLAYER_B }];

const BACCARAT_MARKETS: &[SideMarketRule] = &[Pair { role: PLAYER }, Pair { role: BANKER }];

macro_rules! descriptors {
    ($($variant:ident => $desc:expr;)+) => {
        /// Дескриптор для канонического типа. Матч исчерпывающий:
        /// новый вариант игры не скомпилируется без своей записи здесь.
        pub fn descriptor_for(game: CanonicalGameType) -> &'static GameDescriptor {
            match game {
                $(CanonicalGameType::$variant => {
                    static D: GameDescriptor = $desc;
                    &D
                })+
            }
        }
    };
}

descriptors! {
    // --- семейство teen patti: A против B, 3 карты каждому ---
    Teen => GameDescriptor {
        game: CanonicalGameType::Teen,
        kind: CardGame,
        distribution: TEEN_DEAL,
        // исторические sid-коды старого API
        win_codes: &[("1", Role(PLAYER_A)), ("21", Role(PLAYER_B)), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: TEEN_PAIR_MARKETS,
        prefer_newdesc: false,
        asset_namespace: "teen",
    };
    Teen20 => GameDescriptor {
        game: CanonicalGameType::Teen20,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B)), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: TEEN_PAIR_MARKETS,
        prefer_newdesc: true,
        asset_namespace: "teen20",
    };
    Teen20B => GameDescriptor {
        game: CanonicalGameType::Teen20B,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B)), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: TEEN_PAIR_MARKETS,
        prefer_newdesc: true,
        // стол B рисуется ассетами baccarat2
        asset_namespace: "baccarat2",
    };
    Teen120 => GameDescriptor {
        game: CanonicalGameType::Teen120,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B))],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: true,
        asset_namespace: "teen120",
    };
    Teen3 => GameDescriptor {
        game: CanonicalGameType::Teen3,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B)), ("0", Tie)],
        // teen 3.0 сравнивается по баккара-очкам
        win_fallback: Fb::BaccaratScore,
        side_markets: &[],
        prefer_newdesc: true,
        asset_namespace: "teen3",
    };
    Teen32 => GameDescriptor {
        game: CanonicalGameType::Teen32,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B))],
        win_fallback: Fb::None,
        side_markets: &[ColorPlus { role: PLAYER_A }, ColorPlus { role: PLAYER_B }],
        prefer_newdesc: false,
        asset_namespace: "teen32",
    };
    Teen33 => GameDescriptor {
        game: CanonicalGameType::Teen33,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B)), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: TEEN_PAIR_MARKETS,
        prefer_newdesc: false,
        asset_namespace: "teen33",
    };
    Teen41 => GameDescriptor {
        game: CanonicalGameType::Teen41,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B))],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "teen41",
    };
    Teen42 => GameDescriptor {
        game: CanonicalGameType::Teen42,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B))],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "teen42",
    };
    Teen8 => GameDescriptor {
        game: CanonicalGameType::Teen8,
        kind: CardGame,
        // 24 карты по кругу на 8 игроков (3 круга), хвост — дилеру
        distribution: RoundRobin {
            roles: TEEN8_PLAYERS,
            per_role: Some(3),
            trailing: Some(DEALER),
        },
        win_codes: &[
            ("1", Role("Player 1")),
            ("2", Role("Player 2")),
            ("3", Role("Player 3")),
            ("4", Role("Player 4")),
            ("5", Role("Player 5")),
            ("6", Role("Player 6")),
            ("7", Role("Player 7")),
            ("8", Role("Player 8")),
            ("0", NoResult),
        ],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "teen8",
    };
    Teen9 => GameDescriptor {
        game: CanonicalGameType::Teen9,
        kind: CardGame,
        // три команды, карта i уходит команде i % 3
        distribution: RoundRobin {
            roles: &[TIGER, LION, DRAGON],
            per_role: None,
            trailing: None,
        },
        win_codes: &[
            ("1", Role(TIGER)),
            ("2", Role(LION)),
            ("3", Role(DRAGON)),
            ("0", Tie),
        ],
        win_fallback: Fb::BaccaratScore,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "teen9",
    };
    Teen2024 => GameDescriptor {
        game: CanonicalGameType::Teen2024,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B))],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: true,
        asset_namespace: "teen2024",
    };
    TeenMuf => GameDescriptor {
        game: CanonicalGameType::TeenMuf,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B)), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: TEEN_PAIR_MARKETS,
        prefer_newdesc: false,
        asset_namespace: "teenmuf",
    };
    TeenSin => GameDescriptor {
        game: CanonicalGameType::TeenSin,
        kind: CardGame,
        distribution: TEEN_DEAL,
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B))],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "teensin",
    };

    // --- dragon / tiger: по одной карте на сторону ---
    Dt6 => GameDescriptor {
        game: CanonicalGameType::Dt6,
        kind: CardGame,
        distribution: DT_DEAL,
        win_codes: &[("1", Role(DRAGON)), ("2", Role(TIGER)), ("0", Tie)],
        win_fallback: Fb::HighCardValue,
        side_markets: DT_MARKETS,
        prefer_newdesc: false,
        asset_namespace: "dt6",
    };
    Dt20 => GameDescriptor {
        game: CanonicalGameType::Dt20,
        kind: CardGame,
        distribution: DT_DEAL,
        // sid-коды нового API: те же стороны, другие литералы, чем в dt6
        win_codes: &[("1", Role(DRAGON)), ("21", Role(TIGER)), ("41", Tie)],
        win_fallback: Fb::HighCardValue,
        side_markets: DT_MARKETS,
        prefer_newdesc: false,
        asset_namespace: "dt20",
    };
    Dt202 => GameDescriptor {
        game: CanonicalGameType::Dt202,
        kind: CardGame,
        distribution: DT_DEAL,
        win_codes: &[("1", Role(DRAGON)), ("21", Role(TIGER)), ("41", Tie)],
        win_fallback: Fb::HighCardValue,
        side_markets: DT_MARKETS,
        prefer_newdesc: false,
        asset_namespace: "dt202",
    };
    Dtl20 => GameDescriptor {
        game: CanonicalGameType::Dtl20,
        kind: CardGame,
        distribution: FixedSlots(&[
            SlotSpec { role: DRAGON, indices: &[0] },
            SlotSpec { role: TIGER, indices: &[1] },
            SlotSpec { role: LION, indices: &[2] },
        ]),
        win_codes: &[("1", Role(DRAGON)), ("21", Role(TIGER)), ("41", Role(LION))],
        win_fallback: Fb::HighCardValue,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "dtl20",
    };

    // --- lucky 7: одна решающая карта против семёрки ---
    Lucky7 => GameDescriptor {
        game: CanonicalGameType::Lucky7,
        kind: CardGame,
        distribution: Board("Card"),
        win_codes: &[
            ("1", Outcome("Low Card")),
            ("2", Outcome("High Card")),
            ("0", Tie),
        ],
        win_fallback: Fb::PivotCard(7),
        side_markets: &[
            OddEven { role: "Card", index: 0 },
            RedBlack { role: "Card", index: 0 },
        ],
        prefer_newdesc: false,
        asset_namespace: "lucky7",
    };
    Lucky7Eu => GameDescriptor {
        game: CanonicalGameType::Lucky7Eu,
        kind: CardGame,
        distribution: Board("Card"),
        win_codes: &[
            ("1", Outcome("Low Card")),
            ("2", Outcome("High Card")),
            ("0", Tie),
        ],
        win_fallback: Fb::PivotCard(7),
        side_markets: &[
            OddEven { role: "Card", index: 0 },
            RedBlack { role: "Card", index: 0 },
        ],
        prefer_newdesc: false,
        asset_namespace: "lucky7eu",
    };
    Lucky15 => GameDescriptor {
        game: CanonicalGameType::Lucky15,
        kind: CardGame,
        distribution: Board(BOARD),
        win_codes: &[("1", Outcome("Low")), ("2", Outcome("High")), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: &[
            ThresholdSum { role: BOARD, threshold: 15, name: "15 or More" },
            OddEven { role: BOARD, index: 0 },
        ],
        prefer_newdesc: false,
        asset_namespace: "lucky15",
    };

    // --- baccarat ---
    Baccarat => GameDescriptor {
        game: CanonicalGameType::Baccarat,
        kind: CardGame,
        distribution: BACCARAT_DEAL,
        win_codes: &[("1", Role(PLAYER)), ("2", Role(BANKER)), ("3", Tie)],
        win_fallback: Fb::BaccaratScore,
        side_markets: BACCARAT_MARKETS,
        prefer_newdesc: true,
        asset_namespace: "baccarat",
    };
    Baccarat2 => GameDescriptor {
        game: CanonicalGameType::Baccarat2,
        kind: CardGame,
        distribution: BACCARAT_DEAL,
        win_codes: &[("1", Role(PLAYER)), ("2", Role(BANKER)), ("3", Tie)],
        win_fallback: Fb::BaccaratScore,
        side_markets: BACCARAT_MARKETS,
        prefer_newdesc: true,
        asset_namespace: "baccarat2",
    };
    Baccarat29 => GameDescriptor {
        game: CanonicalGameType::Baccarat29,
        kind: CardGame,
        distribution: BACCARAT_DEAL,
        win_codes: &[("1", Role(PLAYER)), ("2", Role(BANKER)), ("3", Tie)],
        win_fallback: Fb::BaccaratScore,
        side_markets: BACCARAT_MARKETS,
        prefer_newdesc: false,
        asset_namespace: "baccarat29",
    };

    // --- andar bahar ---
    Ab20 => GameDescriptor {
        game: CanonicalGameType::Ab20,
        kind: CardGame,
        // первая карта — джокер, дальше чередование andar/bahar
        distribution: Alternating {
            first: ANDAR,
            second: BAHAR,
            lead_joker: Some(JOKER),
        },
        win_codes: &[("1", Role(ANDAR)), ("2", Role(BAHAR))],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "ab20",
    };
    Ab3 => GameDescriptor {
        game: CanonicalGameType::Ab3,
        kind: CardGame,
        distribution: Alternating {
            first: ANDAR,
            second: BAHAR,
            lead_joker: Some(JOKER),
        },
        win_codes: &[("1", Role(ANDAR)), ("2", Role(BAHAR))],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "ab3",
    };
    Abj => GameDescriptor {
        game: CanonicalGameType::Abj,
        kind: CardGame,
        // у этого стола джокер не входит в список карт, чётность без сдвига
        distribution: Alternating {
            first: ANDAR,
            second: BAHAR,
            lead_joker: None,
        },
        win_codes: &[("1", Role(ANDAR)), ("2", Role(BAHAR))],
        win_fallback: Fb::None,
        side_markets: &[DescSegment { segment: 0, name: "Joker" }],
        prefer_newdesc: false,
        asset_namespace: "abj",
    };

    // --- poker: карманные карты колонками + общий борд ---
    Poker => GameDescriptor {
        game: CanonicalGameType::Poker,
        kind: CardGame,
        distribution: Columns {
            roles: AB_PAIR,
            per_role: 2,
            board: Some(BOARD),
        },
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B)), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: &[DescSegment { segment: 0, name: "Winning Hand" }],
        prefer_newdesc: false,
        asset_namespace: "poker",
    };
    Poker20 => GameDescriptor {
        game: CanonicalGameType::Poker20,
        kind: CardGame,
        distribution: Columns {
            roles: AB_PAIR,
            per_role: 2,
            board: Some(BOARD),
        },
        win_codes: &[("1", Role(PLAYER_A)), ("2", Role(PLAYER_B)), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: &[DescSegment { segment: 0, name: "Winning Hand" }],
        prefer_newdesc: false,
        asset_namespace: "poker20",
    };
    Poker6 => GameDescriptor {
        game: CanonicalGameType::Poker6,
        kind: CardGame,
        // карты 0..5 — первая карманная каждого из шести, 6..11 — вторая,
        // остаток — общий борд
        distribution: Columns {
            roles: POKER6_PLAYERS,
            per_role: 2,
            board: Some(BOARD),
        },
        win_codes: &[
            ("1", Role("Player 1")),
            ("2", Role("Player 2")),
            ("3", Role("Player 3")),
            ("4", Role("Player 4")),
            ("5", Role("Player 5")),
            ("6", Role("Player 6")),
            ("0", NoResult),
        ],
        win_fallback: Fb::None,
        side_markets: &[DescSegment { segment: 0, name: "Winning Hand" }],
        prefer_newdesc: false,
        asset_namespace: "poker6",
    };

    // --- card 32 ---
    Card32 => GameDescriptor {
        game: CanonicalGameType::Card32,
        kind: CardGame,
        distribution: RoundRobin {
            roles: CARD32_PLAYERS,
            per_role: None,
            trailing: None,
        },
        win_codes: &[
            ("1", Role("Player 8")),
            ("2", Role("Player 9")),
            ("3", Role("Player 10")),
            ("4", Role("Player 11")),
        ],
        // итог зависит от базовых очков 8..11, из карт его не вывести
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "card32",
    };
    Card32Eu => GameDescriptor {
        game: CanonicalGameType::Card32Eu,
        kind: CardGame,
        distribution: RoundRobin {
            roles: CARD32_PLAYERS,
            per_role: None,
            trailing: None,
        },
        win_codes: &[
            ("1", Role("Player 8")),
            ("2", Role("Player 9")),
            ("3", Role("Player 10")),
            ("4", Role("Player 11")),
        ],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "card32eu",
    };

    // --- worli / matka ---
    Worli => GameDescriptor {
        game: CanonicalGameType::Worli,
        kind: CardGame,
        distribution: Board(BOARD),
        win_codes: &[],
        win_fallback: Fb::None,
        side_markets: &[OddEven { role: BOARD, index: 0 }],
        prefer_newdesc: false,
        asset_namespace: "worli",
    };
    Worli2 => GameDescriptor {
        game: CanonicalGameType::Worli2,
        kind: CardGame,
        distribution: Board(BOARD),
        win_codes: &[],
        win_fallback: Fb::None,
        side_markets: &[
            OddEven { role: BOARD, index: 0 },
            RedBlack { role: BOARD, index: 0 },
        ],
        prefer_newdesc: false,
        asset_namespace: "worli2",
    };

    // --- одиночные столы ---
    War => GameDescriptor {
        game: CanonicalGameType::War,
        kind: CardGame,
        // дилер первым, шесть игроков по одной карте
        distribution: FixedSlots(&[
            SlotSpec { role: DEALER, indices: &[0] },
            SlotSpec { role: "Player 1", indices: &[1] },
            SlotSpec { role: "Player 2", indices: &[2] },
            SlotSpec { role: "Player 3", indices: &[3] },
            SlotSpec { role: "Player 4", indices: &[4] },
            SlotSpec { role: "Player 5", indices: &[5] },
            SlotSpec { role: "Player 6", indices: &[6] },
        ]),
        win_codes: &[
            ("1", Role("Player 1")),
            ("2", Role("Player 2")),
            ("3", Role("Player 3")),
            ("4", Role("Player 4")),
            ("5", Role("Player 5")),
            ("6", Role("Player 6")),
            ("0", Role(DEALER)),
        ],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "war",
    };
    ThreeCardJ => GameDescriptor {
        game: CanonicalGameType::ThreeCardJ,
        kind: CardGame,
        distribution: Board("Cards"),
        win_codes: &[],
        win_fallback: Fb::None,
        side_markets: &[
            OddEven { role: "Cards", index: 0 },
            RedBlack { role: "Cards", index: 0 },
            Pair { role: "Cards" },
        ],
        prefer_newdesc: false,
        asset_namespace: "3cardj",
    };
    Queen => GameDescriptor {
        game: CanonicalGameType::Queen,
        kind: CardGame,
        distribution: RoundRobin {
            roles: QUEEN_TOTALS,
            per_role: None,
            trailing: None,
        },
        win_codes: &[
            ("0", Role("Total 0")),
            ("1", Role("Total 1")),
            ("2", Role("Total 2")),
            ("3", Role("Total 3")),
        ],
        win_fallback: Fb::HandValueSum,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "queen",
    };
    Trio => GameDescriptor {
        game: CanonicalGameType::Trio,
        kind: CardGame,
        distribution: Board(BOARD),
        win_codes: &[("1", Outcome("Trio")), ("0", NoResult)],
        win_fallback: Fb::None,
        side_markets: &[Pair { role: BOARD }, ColorPlus { role: BOARD }],
        prefer_newdesc: false,
        asset_namespace: "trio",
    };
    Race20 => GameDescriptor {
        game: CanonicalGameType::Race20,
        kind: CardGame,
        // каждая карта уходит «гонщику» своей масти
        distribution: BySuit(SUIT_RACERS),
        win_codes: &[
            ("1", Role("Hearts")),
            ("2", Role("Diamonds")),
            ("3", Role("Clubs")),
            ("4", Role("Spades")),
        ],
        win_fallback: Fb::HandValueSum,
        side_markets: &[SuitGroups],
        prefer_newdesc: false,
        asset_namespace: "race20",
    };
    Race17 => GameDescriptor {
        game: CanonicalGameType::Race17,
        kind: CardGame,
        distribution: BySuit(SUIT_RACERS),
        win_codes: &[
            ("1", Role("Hearts")),
            ("2", Role("Diamonds")),
            ("3", Role("Clubs")),
            ("4", Role("Spades")),
        ],
        // гонка до 17 очков по порядку сдачи
        win_fallback: Fb::ThresholdRace(17),
        side_markets: &[SuitGroups],
        prefer_newdesc: false,
        asset_namespace: "race17",
    };
    NoteNum => GameDescriptor {
        game: CanonicalGameType::NoteNum,
        kind: CardGame,
        distribution: Board("Note"),
        win_codes: &[],
        win_fallback: Fb::None,
        side_markets: &[OddEven { role: "Note", index: 0 }],
        prefer_newdesc: false,
        asset_namespace: "notenum",
    };
    CMeter => GameDescriptor {
        game: CanonicalGameType::CMeter,
        kind: CardGame,
        distribution: Board("Meter"),
        win_codes: &[("1", Outcome("Low")), ("2", Outcome("High"))],
        win_fallback: Fb::None,
        side_markets: &[ThresholdSum {
            role: "Meter",
            threshold: 60,
            name: "60 or More",
        }],
        prefer_newdesc: false,
        asset_namespace: "cmeter",
    };
    BTable => GameDescriptor {
        game: CanonicalGameType::BTable,
        kind: CardGame,
        distribution: Board(BOARD),
        win_codes: &[
            ("1", Outcome("Don")),
            ("2", Outcome("Amar Akbar Anthony")),
            ("3", Outcome("Sahib Bibi Aur Ghulam")),
            ("4", Outcome("Dharam Veer")),
            ("5", Outcome("Kis Kisko Pyaar Karoon")),
            ("6", Outcome("Ghulam")),
        ],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "btable",
    };
    Lottery => GameDescriptor {
        game: CanonicalGameType::Lottery,
        kind: CardGame,
        distribution: Board("Ticket"),
        win_codes: &[],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "lottcard",
    };

    // --- крикет-мета: ball-by-ball агрегация вместо карт ---
    Kbc => GameDescriptor {
        game: CanonicalGameType::Kbc,
        kind: CricketMeta,
        distribution: RoundRobin {
            roles: CRICKET_TEAMS,
            per_role: None,
            trailing: None,
        },
        win_codes: &[("1", Role("Team 1")), ("2", Role("Team 2")), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "kbc",
    };
    CricketV3 => GameDescriptor {
        game: CanonicalGameType::CricketV3,
        kind: CricketMeta,
        distribution: RoundRobin {
            roles: CRICKET_TEAMS,
            per_role: None,
            trailing: None,
        },
        win_codes: &[("1", Role("Team 1")), ("2", Role("Team 2")), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "cricketv3",
    };
    SuperOver => GameDescriptor {
        game: CanonicalGameType::SuperOver,
        kind: CricketMeta,
        distribution: RoundRobin {
            roles: CRICKET_TEAMS,
            per_role: None,
            trailing: None,
        },
        win_codes: &[("1", Role("Team 1")), ("2", Role("Team 2")), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "superover",
    };
    CMatch20 => GameDescriptor {
        game: CanonicalGameType::CMatch20,
        kind: CricketMeta,
        distribution: RoundRobin {
            roles: CRICKET_TEAMS,
            per_role: None,
            trailing: None,
        },
        win_codes: &[("1", Role("Team 1")), ("2", Role("Team 2")), ("0", Tie)],
        win_fallback: Fb::None,
        side_markets: &[],
        prefer_newdesc: false,
        asset_namespace: "cmatch20",
    };
}
