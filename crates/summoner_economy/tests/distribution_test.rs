//! Statistical and property checks on the draw path.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use summoner_content::{
    CharacterTemplate, ContentTables, Cost, Currency, GachaPool, Guarantees, ItemKind, PoolItem,
    RateTable, Rarity,
};
use summoner_economy::{
    draw, simulate, GachaEngine, GachaError, GameState, PityState, PullRequest,
};

fn hero(id: &str, rarity: Rarity) -> PoolItem {
    PoolItem {
        kind: ItemKind::Character { id: id.to_string() },
        rarity,
        weight: 1,
    }
}

fn banner(id: &str, guarantees: Guarantees, up_items: &[&str]) -> GachaPool {
    GachaPool {
        id: id.to_string(),
        name: id.to_string(),
        cost_currency: Currency::Diamonds,
        cost_amount: 2700,
        single_pull_cost: Some(Cost::new(Currency::HeroTicket, 1)),
        pulls: vec![1, 10],
        guarantees,
        rates: RateTable { ur: 0.006, ssr: 0.024, sr: 0.15, r: 0.82, n: 0.0 },
        item_pool: vec![
            hero("hero_seraphine", Rarity::Ur),
            hero("hero_aria", Rarity::Ssr),
            hero("hero_kaizen", Rarity::Ssr),
            hero("hero_bram", Rarity::Sr),
            hero("hero_milo", Rarity::R),
        ],
        up_items: up_items.iter().map(ToString::to_string).collect(),
        is_lucky_draw: false,
    }
}

fn content_with(pools: Vec<GachaPool>) -> ContentTables {
    let mut content = ContentTables::new();
    for (id, rarity) in [
        ("hero_seraphine", Rarity::Ur),
        ("hero_aria", Rarity::Ssr),
        ("hero_kaizen", Rarity::Ssr),
        ("hero_bram", Rarity::Sr),
        ("hero_milo", Rarity::R),
    ] {
        content
            .register_character(CharacterTemplate {
                id: id.to_string(),
                name: id.to_string(),
                emoji: String::new(),
                rarity,
                duplicate_shards: None,
            })
            .unwrap();
    }
    for pool in pools {
        content.register_pool(pool).unwrap();
    }
    content.validate().unwrap();
    content
}

#[test]
fn rates_hold_over_100k_pulls_without_pity() {
    let content = content_with(vec![banner("plain", Guarantees::default(), &[])]);
    let engine = GachaEngine::new(&content);
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);

    let stats = simulate(&engine, &GameState::default(), "plain", 100_000, &mut rng).unwrap();

    for (rarity, expected, tolerance) in [
        (Rarity::Ur, 0.006, 0.0015),
        (Rarity::Ssr, 0.024, 0.003),
        (Rarity::Sr, 0.15, 0.006),
        (Rarity::R, 0.82, 0.006),
    ] {
        let observed = stats.frequency(rarity);
        assert!(
            (observed - expected).abs() < tolerance,
            "{rarity}: observed {observed}, expected {expected}"
        );
    }
    assert_eq!(stats.count(Rarity::N), 0);
}

// Scenario B: the hundredth pull since the last SSR is forced high.
#[test]
fn hard_pity_forces_high_rarity() {
    let guarantees = Guarantees {
        hard_pity_ssr: Some(100),
        ..Guarantees::default()
    };
    let content = content_with(vec![banner("hard100", guarantees, &[])]);
    let engine = GachaEngine::new(&content);

    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new("Mira");
        state.ledger.add(Currency::HeroTicket, 1);
        state.pity.set(
            "hard100",
            PityState {
                ssr_count: 99,
                up_guaranteed: false,
                total_pulls: 99,
            },
        );

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let outcome = engine
            .pull(&state, PullRequest::single("hard100", now), &mut rng)
            .unwrap();

        // UR is walked first, so it takes the whole wheel.
        assert_eq!(outcome.items[0].rarity, Rarity::Ur);
        let pity = outcome.state.pity.get("hard100");
        assert_eq!(pity.ssr_count, 0);
        assert_eq!(pity.total_pulls, 100);
    }
}

#[test]
fn limited_banner_up_share_is_near_five_sixths() {
    // Two thirds of SSRs roll the 50/50 and land UP three times in four;
    // the owed third is always UP. Hard pity hits add a little on top.
    let guarantees = Guarantees {
        hard_pity_ssr: Some(90),
        up_guarantee_rate: 0.5,
        ..Guarantees::default()
    };
    let mut pool = banner("limited", guarantees, &["hero_aria"]);
    pool.rates = RateTable { ssr: 0.03, sr: 0.15, r: 0.82, ..RateTable::default() };
    pool.item_pool.retain(|item| item.rarity != Rarity::Ur);
    let content = content_with(vec![pool]);
    let engine = GachaEngine::new(&content);
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    let stats = simulate(&engine, &GameState::default(), "limited", 200_000, &mut rng).unwrap();
    #[allow(clippy::cast_precision_loss)]
    let share = stats.up as f64 / stats.high as f64;
    assert!((0.79..0.89).contains(&share), "UP share {share}");
}

// Scenario C: a 1:1 lucky wheel splits evenly.
#[test]
fn lucky_draw_respects_weights() {
    let mut content = ContentTables::new();
    content
        .register_pool(GachaPool {
            id: "coin_flip".to_string(),
            name: "Coin Flip".to_string(),
            cost_currency: Currency::LuckyToken,
            cost_amount: 10,
            single_pull_cost: Some(Cost::new(Currency::LuckyToken, 1)),
            pulls: vec![1, 10],
            guarantees: Guarantees::default(),
            rates: RateTable::default(),
            item_pool: vec![
                PoolItem {
                    kind: ItemKind::Resource { currency: Currency::Gold, amount: 100 },
                    rarity: Rarity::N,
                    weight: 1,
                },
                PoolItem {
                    kind: ItemKind::Resource { currency: Currency::Diamonds, amount: 10 },
                    rarity: Rarity::R,
                    weight: 1,
                },
            ],
            up_items: Vec::new(),
            is_lucky_draw: true,
        })
        .unwrap();
    content.validate().unwrap();
    let engine = GachaEngine::new(&content);
    let mut rng = ChaCha8Rng::seed_from_u64(10);

    let stats = simulate(&engine, &GameState::default(), "coin_flip", 10_000, &mut rng).unwrap();
    let heads = stats.frequency(Rarity::N);
    assert!((0.45..0.55).contains(&heads), "gold share {heads}");
    assert_eq!(stats.count(Rarity::N) + stats.count(Rarity::R), 10_000);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_no_drought_reaches_hard_pity(seed in any::<u64>(), hard in 1u32..120) {
        let pool = banner("p", Guarantees { hard_pity_ssr: Some(hard), ..Guarantees::default() }, &[]);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pity = PityState::default();
        let mut run = 0u32;

        for _ in 0..1_000 {
            let drawn = draw(&pool, &mut pity, &mut rng).unwrap();
            prop_assert!(pity.ssr_count < hard);
            if drawn.item.rarity.is_high() {
                prop_assert_eq!(pity.ssr_count, 0);
                run = 0;
            } else {
                run += 1;
                prop_assert!(run < hard);
            }
        }
    }

    #[test]
    fn prop_lost_up_roll_is_repaid(seed in any::<u64>()) {
        let guarantees = Guarantees {
            soft_pity_start: Some(10),
            ssr_per_soft_pity_increase: 0.1,
            hard_pity_ssr: Some(20),
            up_guarantee_rate: 0.5,
        };
        let mut pool = banner("p", guarantees, &["hero_aria"]);
        pool.rates = RateTable { ssr: 0.03, sr: 0.15, r: 0.82, ..RateTable::default() };
        pool.item_pool.retain(|item| item.rarity != Rarity::Ur);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pity = PityState::default();

        for _ in 0..500 {
            let owed = pity.up_guaranteed;
            let drawn = draw(&pool, &mut pity, &mut rng).unwrap();
            if drawn.item.rarity.is_high() {
                if owed {
                    prop_assert!(drawn.is_up);
                    prop_assert!(!pity.up_guaranteed);
                }
                if !drawn.is_up {
                    prop_assert!(pity.up_guaranteed);
                }
            } else {
                prop_assert_eq!(pity.up_guaranteed, owed);
            }
        }
    }

    #[test]
    fn prop_pull_debits_exactly_or_not_at_all(diamonds in 0u64..6_000, seed in any::<u64>()) {
        let content = content_with(vec![banner("p", Guarantees::default(), &[])]);
        let engine = GachaEngine::new(&content);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new("Mira");
        state.ledger.add(Currency::Diamonds, diamonds);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        match engine.pull(&state, PullRequest::multi("p", 10, now), &mut rng) {
            Ok(outcome) => {
                prop_assert!(diamonds >= 2700);
                prop_assert_eq!(outcome.state.ledger.balance(Currency::Diamonds), diamonds - 2700);
                prop_assert_eq!(outcome.state.ledger.vip_exp(), 2700);
            }
            Err(GachaError::InsufficientFunds { required, available, .. }) => {
                prop_assert!(diamonds < 2700);
                prop_assert_eq!(required, 2700);
                prop_assert_eq!(available, diamonds);
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }
}
