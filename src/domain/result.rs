use serde::{Deserialize, Serialize};

use crate::domain::flags::DecodeFlag;
use crate::domain::game_type::GameType;
use crate::domain::participant::{Participant, SideMarketResult};

/// Канонический результат одного раунда.
///
/// Единственный выход ядра; слой отображения не знает про сырые поля
/// фида — только про эту структуру. Создаётся заново на каждую запись,
/// после конструирования не мутируется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalResult {
    pub game_type: GameType,
    pub participants: Vec<Participant>,
    pub side_markets: Vec<SideMarketResult>,
    /// Сырой код победителя (`win`) как пришёл из фида; `""` если не было.
    pub raw_win_code: String,
    /// Человекочитаемая подпись победителя для отображения.
    /// Приоритет: `winnat` из фида → метка из winCodeMap/производного
    /// правила → роль победителя → сырой код → `"N/A"`.
    pub win_label: String,
    pub round_id: String,
    /// Нефатальные проблемы, накопленные по пути.
    pub flags: Vec<DecodeFlag>,
}

impl CanonicalResult {
    /// Участник по роли.
    pub fn participant(&self, role: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.role == role)
    }

    /// Все победители раунда (может быть несколько, может не быть вовсе).
    pub fn winners(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_winner)
    }

    /// Рынок по имени.
    pub fn side_market(&self, name: &str) -> Option<&SideMarketResult> {
        self.side_markets.iter().find(|m| m.name == name)
    }
}
