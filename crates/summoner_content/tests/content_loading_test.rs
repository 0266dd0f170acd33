//! Loads the shipped content file and checks it the way the server does at startup.

use summoner_content::{Chance, ContentTables, Currency, ItemKind, Rarity, SCALE};

const CONTENT: &str = include_str!("../../../data/content.toml");

#[test]
fn shipped_content_is_valid() {
    let content = ContentTables::from_toml_str(CONTENT).unwrap();

    assert_eq!(content.pools().count(), 6);
    assert_eq!(content.vip_levels().len(), 5);
    assert!(content.character("hero_seraphine").is_some());
    assert!(content.rune("rune_fury").is_some());
}

#[test]
fn shipped_rates_resolve_to_whole_scale() {
    let content = ContentTables::from_toml_str(CONTENT).unwrap();

    for pool in content.pools().filter(|p| !p.is_lucky_draw) {
        let total: u32 = Rarity::RAREST_FIRST
            .into_iter()
            .map(|r| pool.rates.chance(r).ppm())
            .sum();
        assert_eq!(total, SCALE, "pool `{}` rates resolve to {total} ppm", pool.id);
    }
}

#[test]
fn limited_pool_has_up_item() {
    let content = ContentTables::from_toml_str(CONTENT).unwrap();
    let pool = content.pool("hero_limited_aria").unwrap();

    let ups: Vec<_> = pool.up_items_of(Rarity::Ssr).collect();
    assert_eq!(ups.len(), 1);
    assert_eq!(ups[0].kind, ItemKind::Character { id: "hero_aria".to_string() });
    assert_eq!(pool.guarantees.up_chance(), Chance::from_ppm(500_000));
}

#[test]
fn lucky_wheel_weights_parse() {
    let content = ContentTables::from_toml_str(CONTENT).unwrap();
    let wheel = content.pool("lucky_wheel").unwrap();

    assert!(wheel.is_lucky_draw);
    let weights: Vec<u32> = wheel.item_pool.iter().map(|i| i.weight).collect();
    assert_eq!(weights, vec![50, 30, 15, 5]);
    assert_eq!(
        wheel.item_pool[1].kind,
        ItemKind::Resource { currency: Currency::Diamonds, amount: 50 }
    );
}

#[test]
fn missing_file_is_io_error() {
    let err = ContentTables::from_toml_file("does/not/exist.toml").unwrap_err();
    assert!(err.to_string().starts_with("failed to read content file"));
}
