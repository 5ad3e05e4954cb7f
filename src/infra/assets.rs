use crate::descriptor::descriptor_for;
use crate::domain::card::Card;
use crate::domain::game_type::CanonicalGameType;

/// Ключи карточных ассетов.
///
/// Сам резолвер ассетов — внешний коллаборатор (слой отображения),
/// ядро лишь умеет адресовать его по неймспейсу канонического типа.
pub trait AssetKeyResolver {
    fn asset_key(&self, namespace: &str, card: &Card) -> String;
}

/// Простая реализация: `"{namespace}/{ранг}{масть}"`,
/// рубашка для несданных слотов.
pub struct DefaultAssetResolver;

impl AssetKeyResolver for DefaultAssetResolver {
    fn asset_key(&self, namespace: &str, card: &Card) -> String {
        if card.placeholder {
            return format!("{namespace}/back");
        }
        match (card.rank, card.suit) {
            (Some(rank), Some(suit)) => format!("{namespace}/{rank}{suit}"),
            _ => format!("{namespace}/unknown"),
        }
    }
}

/// Неймспейс ассетов канонического типа (из его дескриптора).
pub fn asset_namespace(game: CanonicalGameType) -> &'static str {
    descriptor_for(game).asset_namespace
}

/// Удобная обёртка: ключ ассета карты в конкретной игре.
pub fn card_asset_key(
    resolver: &impl AssetKeyResolver,
    game: CanonicalGameType,
    card: &Card,
) -> String {
    resolver.asset_key(asset_namespace(game), card)
}
