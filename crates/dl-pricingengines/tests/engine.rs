//! Pricing contracts through the engine interface.

use approx::assert_abs_diff_eq;
use dl_instruments::{ContractSpec, Dividend, OptionType, PricingEngine};
use dl_methods::{LatticeConfig, LatticePricer};
use dl_pricingengines::BinomialDividendEngine;

fn reference(option_type: OptionType, dividends: Vec<Dividend>) -> ContractSpec {
    ContractSpec::with_dividends(option_type, 100.0, 100.0, 1.0, 0.25, 0.04, dividends).unwrap()
}

#[test]
fn engine_agrees_with_lattice_pricer() {
    let c = reference(OptionType::Put, vec![Dividend::new(2.0, 0.75)]);
    let engine = BinomialDividendEngine::with_steps(400);
    let npv = engine.calculate(&c).unwrap().npv;
    let direct = LatticePricer::new(&c, LatticeConfig::new(400)).price().unwrap();
    assert_eq!(npv.to_bits(), direct.to_bits());
}

#[test]
fn engine_reports_dividends_paid_by_expiry() {
    let c = reference(
        OptionType::Call,
        vec![Dividend::new(2.0, 0.75), Dividend::new(1.0, 0.25), Dividend::new(0.5, 1.0)],
    );
    let r = c.price(&BinomialDividendEngine::default()).unwrap();
    // The dividend paid exactly at expiry is not subtracted.
    assert_abs_diff_eq!(r.result("dividends_by_expiry").unwrap(), 3.0, epsilon = 1e-12);
    assert_eq!(r.result("steps"), Some(1000.0));
}

#[test]
fn reference_contract_with_dividend() {
    let with_div = reference(OptionType::Call, vec![Dividend::new(2.0, 0.75)]);
    let without = reference(OptionType::Call, Vec::new());
    let engine = BinomialDividendEngine::with_steps(1000);
    let a = with_div.price(&engine).unwrap().npv;
    let b = without.price(&engine).unwrap().npv;
    assert!(a < b);
    assert_abs_diff_eq!(a, 11.064426, epsilon = 1e-5);
}

#[test]
fn zero_steps_fails_fast() {
    let c = reference(OptionType::Put, Vec::new());
    let err = c.price(&BinomialDividendEngine::with_steps(0)).unwrap_err();
    assert!(err.to_string().contains("at least 1"), "{err}");
}
