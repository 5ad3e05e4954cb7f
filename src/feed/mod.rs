//! Сырые записи фида и их разбор в типизированные поля.

pub mod parser;
pub mod record;

pub use parser::{parse_record, ParsedFields};
pub use record::RawRoundRecord;
