use crate::descriptor::GameDescriptor;
use crate::domain::card::Card;
use crate::domain::flags::DecodeFlag;

use super::record::RawRoundRecord;

/// Промежуточные типизированные поля записи.
///
/// Карты здесь ещё С заглушками на своих позициях: раскладка по ролям
/// позиционная, и выкидывать пустые слоты до неё нельзя.
#[derive(Clone, Debug, Default)]
pub struct ParsedFields {
    pub cards: Vec<Card>,
    pub desc_segments: Vec<String>,
    pub win: Option<String>,
    pub winnat: Option<String>,
}

/// Разобрать сырые поля записи в типизированные последовательности.
///
/// Отсутствующие поля дают пустые значения + флаг `MissingField`;
/// функция тотальная.
pub fn parse_record(
    record: &RawRoundRecord,
    descriptor: &GameDescriptor,
    flags: &mut Vec<DecodeFlag>,
) -> ParsedFields {
    let cards = match &record.cards {
        Some(raw) if !raw.trim().is_empty() => parse_cards(raw, flags),
        _ => {
            flags.push(DecodeFlag::missing_field("cards"));
            Vec::new()
        }
    };

    let desc_segments = match pick_desc(record, descriptor) {
        Some(raw) => split_desc(raw),
        None => {
            flags.push(DecodeFlag::missing_field("desc"));
            Vec::new()
        }
    };

    let win = record
        .win
        .as_ref()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty());
    let winnat = record
        .winnat
        .as_ref()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty());

    ParsedFields {
        cards,
        desc_segments,
        win,
        winnat,
    }
}

/// CSV-список карт → последовательность с сохранением позиций.
fn parse_cards(raw: &str, flags: &mut Vec<DecodeFlag>) -> Vec<Card> {
    raw.split(',')
        .map(|token| {
            let card = Card::parse(token);
            if card.is_malformed() {
                flags.push(DecodeFlag::MalformedCardToken(token.trim().to_string()));
            }
            card
        })
        .collect()
}

/// Выбор источника описания.
///
/// Порядок desc/newdesc НЕ глобальный: часть игр переведена на новый
/// формат (`prefer_newdesc` в дескрипторе), и для них `newdesc` берётся,
/// только если он реально сегментирован (`#` внутри). Иначе — `desc`,
/// с откатом на то поле, которое вообще есть.
fn pick_desc<'a>(record: &'a RawRoundRecord, descriptor: &GameDescriptor) -> Option<&'a str> {
    let desc = record.desc.as_deref().filter(|s| !s.trim().is_empty());
    let newdesc = record.newdesc.as_deref().filter(|s| !s.trim().is_empty());

    if descriptor.prefer_newdesc {
        if let Some(nd) = newdesc {
            if nd.contains('#') {
                return Some(nd);
            }
        }
        return desc.or(newdesc);
    }

    desc.or(newdesc)
}

/// `#`-описание → упорядоченные сегменты. Смысл сегмента определяет
/// дескриптор игры (`DescSegment`), здесь только разрезаем.
fn split_desc(raw: &str) -> Vec<String> {
    raw.split('#').map(|s| s.trim().to_string()).collect()
}
