use core::fmt;

use serde::{Deserialize, Serialize};

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

/// Цвет карты (для рынков red/black).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Black,
    /// Масть не распознана.
    Unknown,
}

impl Suit {
    pub fn color(&self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }
}

/// Ранг карты. Туз в этом фиде всегда младший (значение 1).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Числовое значение ранга: A=1, 2..10 — номинал, J=11, Q=12, K=13.
    pub fn value(&self) -> u32 {
        *self as u32
    }
}

/// Карта из фида.
///
/// Фид присылает токены вида `"KHH"`, `"10SS"`, `"9DD"`: префикс — ранг,
/// последние два символа — код масти. Токен `"1"` (или пустой) — это
/// sentinel «карта ещё не сдана».
///
/// Нераспознанный ранг/масть — это `None`, а не ошибка: парсинг тотальный.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub rank: Option<Rank>,
    pub suit: Option<Suit>,
    /// true = слот без карты (sentinel `"1"` либо пустой токен).
    pub placeholder: bool,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank: Some(rank),
            suit: Some(suit),
            placeholder: false,
        }
    }

    /// Карта-заглушка: слот, в который ещё ничего не сдано.
    pub const fn placeholder() -> Self {
        Self {
            rank: None,
            suit: None,
            placeholder: true,
        }
    }

    /// Разобрать один токен фида. Никогда не падает:
    /// пустая строка и `"1"` дают заглушку, неизвестный ранг/масть — `None`.
    ///
    /// Пробелы внутри токена встречаются в исторических записях
    /// (`"AH H"` == `"AHH"`), поэтому выкидываем все whitespace, не только края.
    pub fn parse(token: &str) -> Self {
        // Работаем по символам, не по байтам: фид изредка присылает
        // не-ASCII мусор, и резать строку по байтовому индексу нельзя.
        let chars: Vec<char> = token.chars().filter(|c| !c.is_whitespace()).collect();

        if chars.is_empty() || chars[..] == ['1'] {
            return Card::placeholder();
        }

        // Последние 2 символа — код масти, остальное — ранг.
        if chars.len() < 3 {
            // Слишком короткий токен: масти нет, пробуем хотя бы ранг.
            let cleaned: String = chars.iter().collect();
            return Card {
                rank: parse_rank(&cleaned),
                suit: None,
                placeholder: false,
            };
        }

        let split_at = chars.len() - 2;
        let rank_part: String = chars[..split_at].iter().collect();
        let suit_part: String = chars[split_at..].iter().collect();

        Card {
            rank: parse_rank(&rank_part),
            suit: parse_suit(&suit_part),
            placeholder: false,
        }
    }

    /// Значение карты для подсчётов. Заглушка и нераспознанный ранг = 0.
    pub fn value(&self) -> u32 {
        if self.placeholder {
            return 0;
        }
        self.rank.map(|r| r.value()).unwrap_or(0)
    }

    pub fn color(&self) -> CardColor {
        match self.suit {
            Some(s) if !self.placeholder => s.color(),
            _ => CardColor::Unknown,
        }
    }

    /// Токен не дал ни ранга, ни масти (и это не заглушка).
    pub fn is_malformed(&self) -> bool {
        !self.placeholder && self.rank.is_none() && self.suit.is_none()
    }
}

fn parse_rank(s: &str) -> Option<Rank> {
    match s.to_ascii_uppercase().as_str() {
        "A" => Some(Rank::Ace),
        "2" => Some(Rank::Two),
        "3" => Some(Rank::Three),
        "4" => Some(Rank::Four),
        "5" => Some(Rank::Five),
        "6" => Some(Rank::Six),
        "7" => Some(Rank::Seven),
        "8" => Some(Rank::Eight),
        "9" => Some(Rank::Nine),
        "10" => Some(Rank::Ten),
        "J" => Some(Rank::Jack),
        "Q" => Some(Rank::Queen),
        "K" => Some(Rank::King),
        _ => None,
    }
}

fn parse_suit(s: &str) -> Option<Suit> {
    match s.to_ascii_uppercase().as_str() {
        "HH" => Some(Suit::Hearts),
        "DD" => Some(Suit::Diamonds),
        "CC" => Some(Suit::Clubs),
        "SS" => Some(Suit::Spades),
        _ => None,
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Ace => "A",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            r => return write!(f, "{}", *r as u32),
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `AH`, `10S`, `7C`; заглушка — `--`, неизвестная масть — `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.placeholder {
            return write!(f, "--");
        }
        match self.rank {
            Some(r) => write!(f, "{r}")?,
            None => write!(f, "?")?,
        }
        match self.suit {
            Some(s) => write!(f, "{s}"),
            None => write!(f, "?"),
        }
    }
}
