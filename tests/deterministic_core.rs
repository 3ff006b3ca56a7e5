use pizza_economy::{
    EconomyState, PurchaseOutcome, Session, Upgrade, UpgradeCatalog, UpgradeEffect, UpgradeId,
    load_catalog,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn economy_with(auto_click_level: u32, production_rate: f64) -> EconomyState {
    let mut economy = EconomyState::new();
    economy.increase_production(production_rate);
    for _ in 0..auto_click_level {
        economy.level_up_auto_click();
    }
    economy
}

#[test]
fn click_tick_and_purchase_walkthrough() {
    let catalog = UpgradeCatalog::new(vec![Upgrade::new(
        "Stone Oven",
        1101.0,
        1.2,
        0.0,
        UpgradeEffect::IncreaseProduction(50.0),
    )])
    .expect("valid catalog");
    let mut session = Session::with_economy(EconomyState::with_resource(1000.0), catalog);
    assert_close(session.economy.click_power(), 1.0);
    assert_close(session.economy.production_rate(), 0.0);

    session.click();
    assert_close(session.economy.resource(), 1001.0);

    session.economy.increase_production(100.0);
    session.advance(1.0).expect("valid delta");
    assert_close(session.economy.resource(), 1101.0);

    assert_eq!(
        session.purchase(UpgradeId(0)).expect("known upgrade"),
        PurchaseOutcome::Purchased
    );
    assert_close(session.economy.resource(), 0.0);
    assert_close(session.economy.production_rate(), 150.0);
    let oven = session.catalog.get(UpgradeId(0)).expect("oven");
    assert_close(oven.price(), 1321.2);
    assert_eq!(oven.level(), 1);
}

#[test]
fn disabled_auto_click_only_produces() {
    let mut economy = economy_with(0, 10.0);

    let report = economy.advance(5.0).expect("valid delta");

    assert_eq!(report.auto_clicks, 0);
    assert!(!economy.take_auto_click_fired());
    assert_close(economy.resource(), 50.0);
}

#[test]
fn level_ups_shorten_period_down_to_floor() {
    let three = economy_with(3, 0.0);
    assert_close(three.auto_click_period(), 0.934);

    let thirty = economy_with(30, 0.0);
    assert_close(thirty.auto_click_period(), 0.05);
}

#[test]
fn one_long_step_matches_many_short_steps() {
    // 30 and 40 sit on the period floor.
    for level in [1, 3, 12, 20, 30, 40] {
        let mut long = economy_with(level, 10.0);
        let mut short = long.clone();

        let long_clicks = long.advance(3.0).expect("valid delta").auto_clicks;
        let mut short_clicks = 0;
        for _ in 0..200 {
            short_clicks += short.advance(0.015).expect("valid delta").auto_clicks;
        }

        assert_eq!(long_clicks, short_clicks, "level {level}");
        assert!(long_clicks > 0);
        assert!((long.resource() - short.resource()).abs() <= 1e-6);
        assert!((long.record_max() - short.record_max()).abs() <= 1e-6);
    }
}

#[test]
fn burst_of_auto_clicks_raises_a_single_flag() {
    let mut economy = economy_with(30, 0.0);

    let report = economy.advance(1.0).expect("valid delta");

    assert_eq!(report.auto_clicks, 20);
    assert!(economy.take_auto_click_fired());
    assert!(!economy.take_auto_click_fired());
}

#[test]
fn spending_never_relocks_an_upgrade() {
    let mut catalog = load_catalog().expect("bundled catalog");
    let board = catalog.find("Tabla de Pizzería").expect("board");
    let mut economy = EconomyState::with_resource(150.0);
    assert!(catalog.get(board).expect("entry").is_unlocked(economy.record_max()));

    let outcome = catalog.purchase(board, &mut economy);

    assert_eq!(outcome, Some(PurchaseOutcome::Purchased));
    assert!(economy.resource() < 90.0);
    assert!(catalog.get(board).expect("entry").is_unlocked(economy.record_max()));
}

#[test]
fn repeated_sessions_are_deterministic() {
    let catalog = load_catalog().expect("bundled catalog");
    let mut a = Session::with_economy(EconomyState::with_resource(900.0), catalog);
    let mut b = a.clone();

    for step in 0..2_000u32 {
        for session in [&mut a, &mut b] {
            if step % 10 == 0 {
                session.click();
            }
            session.advance(0.015).expect("valid delta");
            if let Some(id) = session.catalog.cheapest_purchasable(&session.economy) {
                session.purchase(id).expect("known upgrade");
            }
        }
        assert_eq!(a, b);
    }
    assert!(a.purchases > 0);
}
