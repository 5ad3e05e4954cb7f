//! Разрешение результата раунда.
//!
//! Высокоуровневая операция: `resolve` — карты по ролям, победитель,
//! побочные рынки. Крикет-мета записи уходят в отдельный путь
//! агрегации (`cricket`), общие метрики рук — в `scoring`.

pub mod cricket;
pub mod resolver;
pub mod scoring;

pub use resolver::resolve;
pub use scoring::{baccarat_score, baccarat_value, hand_value_sum, high_card_value};
