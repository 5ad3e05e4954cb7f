/// Во что отображается сырой код победителя ВНУТРИ одного дескриптора.
///
/// Семантика кодов намеренно не разделяется между типами игр: `"21"`
/// в dtl20 — это Tiger, а в классическом teen — Player B. Источник
/// правды — только `GameDescriptor::win_codes` конкретной игры.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinTarget {
    /// Побеждает участник с этой ролью.
    Role(&'static str),
    /// Исход без участника-победителя (lucky7: «Low Card»/«High Card»).
    Outcome(&'static str),
    /// Ничья.
    Tie,
    /// Раунд аннулирован / без результата.
    NoResult,
}

/// Производное правило победителя, когда код отсутствует или не описан.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinFallback {
    /// Правила нет: победителя не назначаем, показываем сырой код.
    None,
    /// Сравнить руки по баккара-очкам (sum mod 10), строго больший выигрывает.
    BaccaratScore,
    /// Сравнить по максимальной одиночной карте (dragon/tiger).
    HighCardValue,
    /// Сравнить по сумме значений карт руки (queen, масти-гонщики).
    HandValueSum,
    /// Гонка: выигрывает рука, первой добравшая сумму до порога
    /// (по порядку сдачи карт).
    ThresholdRace(u32),
    /// Одна решающая карта против опорного значения:
    /// меньше — «Low Card», больше — «High Card», равно — ничья (lucky7).
    PivotCard(u32),
}
