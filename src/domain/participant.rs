use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Участник раунда: рука («Dragon», «Player A», «Andar», «Board»...).
///
/// Инвариант: `cards` не содержит заглушек — пустые слоты выкидываются
/// при раздаче по ролям. Пустая рука допустима («ещё не сдано»).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub role: String,
    pub cards: Vec<Card>,
    pub is_winner: bool,
}

impl Participant {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            cards: Vec::new(),
            is_winner: false,
        }
    }
}

/// Значение побочного рынка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SideMarketValue {
    Text(String),
    Flag(bool),
    Number(i64),
}

/// Итог одного побочного рынка (pair plus, odd/even, color и т.п.).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SideMarketResult {
    pub name: String,
    pub value: SideMarketValue,
}

impl SideMarketResult {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: SideMarketValue::Text(value.into()),
        }
    }

    pub fn flag(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value: SideMarketValue::Flag(value),
        }
    }

    pub fn number(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: SideMarketValue::Number(value),
        }
    }
}
