use pizza_economy::{
    EconomyState, PurchaseOutcome, Session, Upgrade, UpgradeCatalog, UpgradeEffect, UpgradeId,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Click,
    Advance(f64),
    Purchase(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Click),
        (0.0f64..2.0).prop_map(Op::Advance),
        (0usize..4).prop_map(Op::Purchase),
    ]
}

fn catalog() -> UpgradeCatalog {
    UpgradeCatalog::new(vec![
        Upgrade::new("Chef", 3.0, 1.15, 0.0, UpgradeEffect::IncreaseClickPower(0.5)),
        Upgrade::new("Cooks", 12.0, 1.225, 10.0, UpgradeEffect::LevelUpAutoClick),
        Upgrade::new("Board", 8.0, 1.1575, 5.0, UpgradeEffect::IncreaseProduction(0.625)),
        Upgrade::new("Fryer", 40.0, 1.1575, 30.0, UpgradeEffect::IncreaseProduction(2.25)),
    ])
    .expect("valid catalog")
}

fn apply(session: &mut Session, op: &Op) {
    match *op {
        Op::Click => session.click(),
        Op::Advance(delta) => {
            session.advance(delta).expect("valid delta");
        }
        Op::Purchase(index) => {
            session.purchase(UpgradeId(index)).expect("known upgrade");
        }
    }
}

proptest! {
    #[test]
    fn prop_replay_is_deterministic(
        start in 0.0f64..100.0,
        ops in prop::collection::vec(arb_op(), 0..120),
    ) {
        let initial = Session::with_economy(EconomyState::with_resource(start), catalog());
        let mut a = initial.clone();
        let mut b = initial;

        for op in &ops {
            apply(&mut a, op);
        }
        for op in &ops {
            apply(&mut b, op);
        }

        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_record_is_monotonic_and_bounds_resource(
        ops in prop::collection::vec(arb_op(), 0..120),
    ) {
        let mut session = Session::new(catalog());
        let mut previous_record = session.economy.record_max();

        for op in &ops {
            apply(&mut session, op);
            let record = session.economy.record_max();
            prop_assert!(record >= previous_record);
            prop_assert!(record >= session.economy.resource());
            prop_assert!(session.economy.resource() >= 0.0);
            previous_record = record;
        }
    }

    #[test]
    fn prop_unlocks_never_revert(
        ops in prop::collection::vec(arb_op(), 0..120),
    ) {
        let mut session = Session::new(catalog());
        let mut unlocked = vec![false; session.catalog.len()];

        for op in &ops {
            apply(&mut session, op);
            for (id, upgrade) in session.catalog.iter() {
                let now = upgrade.is_unlocked(session.economy.record_max());
                prop_assert!(now || !unlocked[id.0], "{} relocked", upgrade.name);
                unlocked[id.0] = now;
            }
        }
    }

    #[test]
    fn prop_unaffordable_purchase_is_atomic(
        price in 1.0f64..1e6,
        shortfall in 0.001f64..1.0,
        growth in 1.01f64..2.0,
    ) {
        let mut economy = EconomyState::with_resource(price * (1.0 - shortfall));
        let mut upgrade = Upgrade::new("Oven", price, growth, 0.0, UpgradeEffect::IncreaseProduction(1.0));
        let economy_before = economy.clone();

        prop_assert_eq!(upgrade.purchase(&mut economy), PurchaseOutcome::Unaffordable);
        prop_assert_eq!(&economy, &economy_before);
        prop_assert_eq!(upgrade.price(), price);
        prop_assert_eq!(upgrade.level(), 0);
    }

    #[test]
    fn prop_price_grows_geometrically(
        base in 1.0f64..1_000.0,
        growth in 1.01f64..1.5,
        purchases in 0u32..40,
    ) {
        let mut economy = EconomyState::with_resource(1e30);
        let mut upgrade = Upgrade::new("Oven", base, growth, 0.0, UpgradeEffect::IncreaseProduction(1.0));

        for _ in 0..purchases {
            prop_assert!(upgrade.purchase(&mut economy).is_purchased());
        }

        let expected = base * growth.powi(purchases as i32);
        prop_assert!(
            ((upgrade.price() - expected) / expected).abs() <= 1e-9,
            "expected {}, got {}", expected, upgrade.price()
        );
        prop_assert_eq!(upgrade.level(), purchases);
    }
}
