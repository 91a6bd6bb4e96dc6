//! End-to-end lattice pricing of American options with cash dividends.

use approx::assert_abs_diff_eq;
use dl_core::Real;
use dl_instruments::{ContractSpec, Dividend, OptionType, Payoff};
use dl_methods::{LatticeConfig, LatticePricer};
use proptest::prelude::*;

fn reference(option_type: OptionType, dividends: &[Dividend]) -> ContractSpec {
    ContractSpec::with_dividends(
        option_type,
        100.0,
        100.0,
        1.0,
        0.25,
        0.04,
        dividends.iter().copied(),
    )
    .unwrap()
}

fn price(contract: &ContractSpec, steps: usize) -> Real {
    LatticePricer::new(contract, LatticeConfig::new(steps))
        .price()
        .unwrap()
}

#[test]
fn dividend_lowers_call_and_raises_put() {
    let div = [Dividend::new(2.0, 0.75)];

    let call = price(&reference(OptionType::Call, &[]), 1000);
    let call_div = price(&reference(OptionType::Call, &div), 1000);
    assert!(call_div < call, "call with dividend {call_div} >= {call}");

    let put = price(&reference(OptionType::Put, &[]), 1000);
    let put_div = price(&reference(OptionType::Put, &div), 1000);
    assert!(put_div > put, "put with dividend {put_div} <= {put}");
}

#[test]
fn reference_values_1000_steps() {
    let div = [Dividend::new(2.0, 0.75)];
    assert_abs_diff_eq!(price(&reference(OptionType::Call, &[]), 1000), 11.834579, epsilon = 1e-5);
    assert_abs_diff_eq!(price(&reference(OptionType::Call, &div), 1000), 11.064426, epsilon = 1e-5);
    assert_abs_diff_eq!(price(&reference(OptionType::Put, &[]), 1000), 8.311985, epsilon = 1e-5);
    assert_abs_diff_eq!(price(&reference(OptionType::Put, &div), 1000), 9.158662, epsilon = 1e-5);
}

#[test]
fn converges_with_step_count() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let c = reference(option_type, &[]);
        let v: Vec<Real> = [10, 100, 1000].iter().map(|&n| price(&c, n)).collect();
        let d1 = (v[1] - v[0]).abs();
        let d2 = (v[2] - v[1]).abs();
        assert!(d2 < d1, "{option_type}: |Δ| {d1} then {d2}");
    }
}

#[test]
fn deep_in_the_money_put_is_exercised() {
    let c = ContractSpec::new(OptionType::Put, 40.0, 100.0, 1.0, 0.2, 0.08).unwrap();
    let v = price(&c, 200);
    // Early exercise caps the value at intrinsic.
    assert_abs_diff_eq!(v, 60.0, epsilon = 1e-12);
}

#[test]
fn american_call_without_dividends_is_not_exercised_early() {
    // With r > 0 and no dividends, holding a call always beats exercising.
    let c = reference(OptionType::Call, &[]);
    let snap = LatticePricer::new(&c, LatticeConfig::new(60))
        .price_with_tree()
        .unwrap();
    let payoff = c.payoff();
    for node in snap.nodes().filter(|n| n.step < 60) {
        let intrinsic = payoff.value(node.price);
        assert!(
            node.value > intrinsic || node.value == 0.0,
            "node ({}, {}) exercised: value {}, intrinsic {intrinsic}",
            node.step,
            node.down_moves,
            node.value
        );
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_rows_match_sequential_tree() {
    let c = reference(OptionType::Put, &[Dividend::new(2.0, 0.75)]);
    let pricer = LatticePricer::new(&c, LatticeConfig::new(500));
    let parallel = pricer.price().unwrap();
    let sequential = pricer.price_with_tree().unwrap().root_value();
    assert_eq!(parallel.to_bits(), sequential.to_bits());
}

fn contract_strategy() -> impl Strategy<Value = ContractSpec> {
    (
        prop_oneof![Just(OptionType::Call), Just(OptionType::Put)],
        10.0f64..200.0,
        10.0f64..200.0,
        0.1f64..3.0,
        0.05f64..0.8,
        -0.02f64..0.1,
        prop::collection::vec((0.1f64..5.0, 0.01f64..=1.0), 0..4),
    )
        .prop_map(|(ot, s, k, t, vol, r, divs)| {
            let divs: Vec<Dividend> = divs
                .into_iter()
                .map(|(amount, frac)| Dividend::new(amount, frac * t))
                .collect();
            ContractSpec::with_dividends(ot, s, k, t, vol, r, divs).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn node_values_dominate_intrinsic(c in contract_strategy(), steps in 1usize..40) {
        let snap = LatticePricer::new(&c, LatticeConfig::new(steps))
            .price_with_tree()
            .unwrap();
        let payoff = c.payoff();
        for node in snap.nodes() {
            prop_assert!(node.value >= payoff.value(node.price));
            prop_assert!(node.value >= 0.0);
        }
        prop_assert_eq!(snap.root_value(), LatticePricer::new(&c, LatticeConfig::new(steps)).price().unwrap());
    }
}
