//! Доменная модель результата раунда: карты, типы игр, участники, итог.

pub mod card;
pub mod flags;
pub mod game_type;
pub mod participant;
pub mod result;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use flags::*;
pub use game_type::*;
pub use participant::*;
pub use result::*;
