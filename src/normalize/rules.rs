use crate::domain::CanonicalGameType::{self, *};

/// Предикат одного правила нормализации.
///
/// Применяется к уже очищенной строке (lowercase, только буквы/цифры).
#[derive(Clone, Copy, Debug)]
pub enum Matcher {
    /// Точное совпадение.
    Exact(&'static str),
    /// Очищенная строка начинается с образца.
    Prefix(&'static str),
    /// Образец встречается как подстрока.
    Contains(&'static str),
    /// Точное совпадение с одним из исторических написаний API.
    AnyOf(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, cleaned: &str) -> bool {
        match self {
            Matcher::Exact(p) => cleaned == *p,
            Matcher::Prefix(p) => cleaned.starts_with(p),
            Matcher::Contains(p) => cleaned.contains(p),
            Matcher::AnyOf(list) => list.iter().any(|p| cleaned == *p),
        }
    }
}

/// Упорядоченная таблица правил: первый совпавший выигрывает.
///
/// ПОРЯДОК ЗНАЧИМ. Частные образцы стоят раньше общих, которые иначе бы
/// их перехватили:
///   - `lucky15` (включая написание `lucky715`) раньше `Contains("lucky7")`;
///   - `dt202` раньше `dt20` раньше `dt6` — `"dt202"` содержит `"dt20"`,
///     а `"dragontiger202"` содержит `"dragontiger20"`;
///   - `teen20b` раньше `Contains("teen20")` раньше `Prefix("teen")`;
///   - `card32eu` раньше `Contains("card32")`;
///   - конкретные `ab20`/`abj`/`ab3` раньше общего `andarbahar`.
/// Не переставлять и не превращать в HashMap.
pub const RULES: &[(Matcher, CanonicalGameType)] = &[
    // lucky: 15 перехватывает исторические "lucky715"
    (Matcher::AnyOf(&["lucky15", "lucky715"]), Lucky15),
    (Matcher::AnyOf(&["lucky7eu", "lucky7b"]), Lucky7Eu),
    (Matcher::Contains("lucky7"), Lucky7),
    // dragon tiger lion — до обычных dt
    (
        Matcher::AnyOf(&["dtl20", "dtl", "dragontigerlion20", "dragontigerlion"]),
        Dtl20,
    ),
    // dt202 до dt20: "dt202" содержит "dt20"
    (Matcher::Contains("dt202"), Dt202),
    (Matcher::AnyOf(&["dragontiger202", "dragontiger2022"]), Dt202),
    (Matcher::Contains("dt20"), Dt20),
    (Matcher::Exact("dragontiger20"), Dt20),
    (
        Matcher::AnyOf(&["dt6", "dt", "dragontiger", "dragontiger6"]),
        Dt6,
    ),
    // teen patti: частные столы до Contains("teen20") и Prefix("teen")
    (
        Matcher::AnyOf(&["teen20b", "teenpatti20b", "teen2b"]),
        Teen20B,
    ),
    (Matcher::AnyOf(&["teen120", "teenpatti120"]), Teen120),
    (Matcher::AnyOf(&["teen2024", "teenpatti2024"]), Teen2024),
    (Matcher::AnyOf(&["teen32", "teenpatti32"]), Teen32),
    (Matcher::AnyOf(&["teen33", "teenpatti33"]), Teen33),
    (Matcher::AnyOf(&["teen41", "teenpatti41"]), Teen41),
    (Matcher::AnyOf(&["teen42", "teenpatti42"]), Teen42),
    (Matcher::AnyOf(&["teen8", "teenpatti8"]), Teen8),
    (Matcher::AnyOf(&["teen9", "teenpatti9"]), Teen9),
    (Matcher::AnyOf(&["teen3", "teenpatti3", "teen3card"]), Teen3),
    (
        Matcher::AnyOf(&["teenmuf", "teenmuflis", "muflisteenpatti"]),
        TeenMuf,
    ),
    (Matcher::AnyOf(&["teensin", "teenpattisin"]), TeenSin),
    (Matcher::Contains("teen20"), Teen20),
    (Matcher::Exact("teenpatti20"), Teen20),
    (Matcher::Prefix("teen"), Teen),
    // baccarat: номерные столы до общего
    (Matcher::AnyOf(&["baccarat29", "bac29"]), Baccarat29),
    (Matcher::AnyOf(&["baccarat2", "bac2"]), Baccarat2),
    (Matcher::Contains("baccarat"), Baccarat),
    (Matcher::Exact("bac"), Baccarat),
    // card32: eu до общего
    (Matcher::Contains("card32eu"), Card32Eu),
    (Matcher::Contains("card32"), Card32),
    // andar bahar
    (Matcher::AnyOf(&["ab20", "andarbahar20"]), Ab20),
    (Matcher::AnyOf(&["ab3", "andarbahar3"]), Ab3),
    (Matcher::AnyOf(&["abj", "andarbaharj"]), Abj),
    (Matcher::Contains("andarbahar"), Ab20),
    // poker: 6-max и 20-20 до префикса
    (Matcher::Contains("poker6"), Poker6),
    (Matcher::Contains("poker20"), Poker20),
    (Matcher::Prefix("poker"), Poker),
    // worli
    (Matcher::AnyOf(&["worli2", "instantworli2"]), Worli2),
    (Matcher::Contains("worli"), Worli),
    // одиночные столы
    (Matcher::AnyOf(&["war", "casinowar", "cwar"]), War),
    (
        Matcher::AnyOf(&["3cardj", "threecardj", "3cardjudgement"]),
        ThreeCardJ,
    ),
    (Matcher::AnyOf(&["queen", "casinoqueen", "queen20"]), Queen),
    (Matcher::Exact("trio"), Trio),
    (Matcher::AnyOf(&["race17", "raceto17"]), Race17),
    (Matcher::AnyOf(&["raceto20"]), Race20),
    (Matcher::Contains("race20"), Race20),
    (Matcher::AnyOf(&["notenum", "notenumber"]), NoteNum),
    (
        Matcher::AnyOf(&["cmeter", "cmeter1", "casinometer"]),
        CMeter,
    ),
    (Matcher::AnyOf(&["btable", "bollywoodtable"]), BTable),
    (
        Matcher::AnyOf(&["lottcard", "lotcard", "lottery"]),
        Lottery,
    ),
    // крикет-мета
    (Matcher::AnyOf(&["kbc", "cricketkbc"]), Kbc),
    (Matcher::AnyOf(&["cricketv3", "cricket3"]), CricketV3),
    (Matcher::AnyOf(&["superover", "superover2"]), SuperOver),
    (Matcher::AnyOf(&["cmatch20", "cricketmatch20"]), CMatch20),
];
