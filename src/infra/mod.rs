//! Инфраструктурные швы: адресация внешних коллабораторов.

pub mod assets;

pub use assets::{asset_namespace, card_asset_key, AssetKeyResolver, DefaultAssetResolver};
