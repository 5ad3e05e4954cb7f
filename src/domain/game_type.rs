use core::fmt;

use serde::{Deserialize, Serialize};

/// Канонический тип игры.
///
/// Закрытый список всех вариантов, которые умеет присылать фид. Сырая
/// строка (`"TEEN_PATTI_20B"`, `"dragon_tiger_20_2"` и т.п.) приводится
/// к одному из этих значений нормализатором (`crate::normalize`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CanonicalGameType {
    // --- семейство teen patti ---
    Teen,
    Teen20,
    Teen20B,
    Teen120,
    Teen3,
    Teen32,
    Teen33,
    Teen41,
    Teen42,
    Teen8,
    Teen9,
    Teen2024,
    TeenMuf,
    TeenSin,
    // --- dragon / tiger ---
    Dt6,
    Dt20,
    Dt202,
    Dtl20,
    // --- lucky ---
    Lucky7,
    Lucky7Eu,
    Lucky15,
    // --- baccarat ---
    Baccarat,
    Baccarat2,
    Baccarat29,
    // --- andar bahar ---
    Ab20,
    Ab3,
    Abj,
    // --- poker ---
    Poker,
    Poker20,
    Poker6,
    // --- card 32 ---
    Card32,
    Card32Eu,
    // --- worli / matka ---
    Worli,
    Worli2,
    // --- одиночные столы ---
    War,
    ThreeCardJ,
    Queen,
    Trio,
    Race20,
    Race17,
    NoteNum,
    CMeter,
    BTable,
    Lottery,
    // --- крикет-мета (ball-by-ball, без карт) ---
    Kbc,
    CricketV3,
    SuperOver,
    CMatch20,
}

impl CanonicalGameType {
    /// Каноническое имя — то, что видно в логах/снапшотах и в тестах.
    pub fn name(&self) -> &'static str {
        use CanonicalGameType::*;
        match self {
            Teen => "teen",
            Teen20 => "teen20",
            Teen20B => "teen20b",
            Teen120 => "teen120",
            Teen3 => "teen3",
            Teen32 => "teen32",
            Teen33 => "teen33",
            Teen41 => "teen41",
            Teen42 => "teen42",
            Teen8 => "teen8",
            Teen9 => "teen9",
            Teen2024 => "teen2024",
            TeenMuf => "teenmuf",
            TeenSin => "teensin",
            Dt6 => "dt6",
            Dt20 => "dt20",
            Dt202 => "dt202",
            Dtl20 => "dtl20",
            Lucky7 => "lucky7",
            Lucky7Eu => "lucky7eu",
            Lucky15 => "lucky15",
            Baccarat => "baccarat",
            Baccarat2 => "baccarat2",
            Baccarat29 => "baccarat29",
            Ab20 => "ab20",
            Ab3 => "ab3",
            Abj => "abj",
            Poker => "poker",
            Poker20 => "poker20",
            Poker6 => "poker6",
            Card32 => "card32",
            Card32Eu => "card32eu",
            Worli => "worli",
            Worli2 => "worli2",
            War => "war",
            ThreeCardJ => "3cardj",
            Queen => "queen",
            Trio => "trio",
            Race20 => "race20",
            Race17 => "race17",
            NoteNum => "notenum",
            CMeter => "cmeter",
            BTable => "btable",
            Lottery => "lottcard",
            Kbc => "kbc",
            CricketV3 => "cricketv3",
            SuperOver => "superover",
            CMatch20 => "cmatch20",
        }
    }

    /// Полный список вариантов — для проверок полноты таблицы дескрипторов.
    pub const ALL: &'static [CanonicalGameType] = {
        use CanonicalGameType::*;
        &[
            Teen, Teen20, Teen20B, Teen120, Teen3, Teen32, Teen33, Teen41, Teen42, Teen8,
            Teen9, Teen2024, TeenMuf, TeenSin, Dt6, Dt20, Dt202, Dtl20, Lucky7, Lucky7Eu,
            Lucky15, Baccarat, Baccarat2, Baccarat29, Ab20, Ab3, Abj, Poker, Poker20, Poker6,
            Card32, Card32Eu, Worli, Worli2, War, ThreeCardJ, Queen, Trio, Race20, Race17,
            NoteNum, CMeter, BTable, Lottery, Kbc, CricketV3, SuperOver, CMatch20,
        ]
    };
}

impl fmt::Display for CanonicalGameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Результат нормализации сырого типа игры.
///
/// Неизвестный тип — это НЕ ошибка: фид периодически добавляет и
/// переименовывает столы, пайплайн обязан переварить любую строку.
/// Но маркер `Unrecognized` в выходе явный, чтобы вызывающий код и тесты
/// могли такое заметить (в отличие от «молча пустого» результата).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameType {
    Known(CanonicalGameType),
    /// Очищенная сырая строка, для которой не нашлось правила.
    Unrecognized(String),
}

impl GameType {
    pub fn known(&self) -> Option<CanonicalGameType> {
        match self {
            GameType::Known(t) => Some(*t),
            GameType::Unrecognized(_) => None,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, GameType::Unrecognized(_))
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::Known(t) => write!(f, "{t}"),
            GameType::Unrecognized(raw) => write!(f, "{raw}"),
        }
    }
}
