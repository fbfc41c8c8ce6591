//! End-to-end pricing tests: reference scenarios, invariants, and the JSON
//! exchange with an authoritative counterpart.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tariff_core::Error;
use tariff_engine::{
    compute_price, FeeAmounts, PricingBreakdown, PricingConfig, PricingEngine, PricingRequest,
    SurchargeKind,
};
use tariff_time::LocalTimestamp;

fn at(s: &str) -> LocalTimestamp {
    s.parse().unwrap()
}

/// Tuesday 12 March 2024, 10:00: no surcharge applies.
fn scenario_a() -> PricingRequest {
    PricingRequest::hourly(dec!(40), dec!(1), at("2024-03-12T10:00"))
}

// ─── Reference scenarios ──────────────────────────────────────────────────────

#[test]
fn test_scenario_a_plain_weekday() {
    let b = compute_price(&scenario_a());
    assert_eq!(b.multiplier, dec!(1));
    assert_eq!(
        b.amounts,
        FeeAmounts {
            base_amount: 4000,
            adjusted_base: 4000,
            urgent_fee: 0,
            travel_fee: 0,
            subtotal: 4000,
            platform_fee: 1000,
            total_before_tax: 5000,
            tax: 1050,
            total_with_tax: 6050,
            processor_fee: 116,
            final_total: 6166,
        }
    );
    assert_eq!(b.formatted.final_total, "61.66");
}

#[test]
fn test_scenario_b_urgent() {
    let b = compute_price(&scenario_a().with_urgent(true));
    let a = b.amounts;
    assert_eq!(a.adjusted_base, 4000);
    assert_eq!(a.urgent_fee, 2000);
    assert_eq!(a.subtotal, 6000);
    assert_eq!(a.platform_fee, 1500);
    assert_eq!(a.total_before_tax, 7500);
    assert_eq!(a.tax, 1575);
    assert_eq!(a.total_with_tax, 9075);
    assert_eq!(a.processor_fee, 161);
    assert_eq!(a.final_total, 9236);
    assert_eq!(b.formatted.final_total, "92.36");
}

#[test]
fn test_scenario_c_travel() {
    let b = compute_price(&scenario_a().with_distance_km(dec!(25)));
    let a = b.amounts;
    assert_eq!(a.travel_fee, 900);
    assert_eq!(a.subtotal, 4900);
    assert_eq!(a.platform_fee, 1225);
    assert_eq!(a.total_before_tax, 6125);
    assert_eq!(a.tax, 1286); // 1286.25
    assert_eq!(a.total_with_tax, 7411);
    assert_eq!(a.processor_fee, 136); // round(111.165) + 25
    assert_eq!(a.final_total, 7547);
}

#[test]
fn test_scenario_d_christmas_on_thursday() {
    let req = PricingRequest::hourly(dec!(40), dec!(1), at("2025-12-25T10:00"));
    let b = compute_price(&req);
    assert_eq!(b.multiplier, dec!(1.5));
    assert_eq!(b.surcharges.len(), 1);
    assert_eq!(b.surcharges[0].kind, SurchargeKind::Holiday);
    assert_eq!(b.amounts.adjusted_base, 6000);
    assert_eq!(b.amounts.final_total, 9236);
}

#[test]
fn test_saturday_night_flat_rate() {
    let req = PricingRequest::flat(dec!(50), at("2024-03-16T23:30"));
    let b = compute_price(&req);
    assert_eq!(b.multiplier, dec!(2.6));
    assert_eq!(b.amounts.base_amount, 5000);
    assert_eq!(b.amounts.adjusted_base, 13_000);
}

#[test]
fn test_fractional_hours() {
    // 35.50 × 2.25 = 79.875 → 7988
    let req = PricingRequest::hourly(dec!(35.50), dec!(2.25), at("2024-03-12T10:00"));
    assert_eq!(compute_price(&req).amounts.base_amount, 7988);
}

#[test]
fn test_midnight_new_year() {
    // Night and holiday: 2.0 × 1.5
    let req = PricingRequest::hourly(dec!(40), dec!(1), at("2025-01-01T00:30"));
    assert_eq!(compute_price(&req).multiplier, dec!(3));
    let eve = PricingRequest::hourly(dec!(40), dec!(1), at("2024-12-31T22:30"));
    assert_eq!(compute_price(&eve).multiplier, dec!(1.3));
}

#[test]
fn test_oversized_requests_saturate() {
    let tuesday = at("2024-03-12T10:00");
    for req in [
        PricingRequest::flat(Decimal::MAX, tuesday),
        PricingRequest::hourly(Decimal::MAX, dec!(2), tuesday),
    ] {
        assert!(req.validate().is_ok());
        let a = compute_price(&req).amounts;
        assert_eq!(a.base_amount, i64::MAX);
        assert_eq!(a.adjusted_base, i64::MAX);
        assert_eq!(a.final_total, i64::MAX);
    }
}

// ─── Configuration ────────────────────────────────────────────────────────────

#[test]
fn test_oversized_surcharge_factor_saturates() {
    let mut config = PricingConfig::default();
    config.surcharges.saturday = Decimal::MAX;
    let engine = PricingEngine::new(config).unwrap();
    // Night (×2) on a Saturday: the product leaves the decimal range.
    let b = engine.compute_price(&PricingRequest::hourly(dec!(40), dec!(1), at("2024-03-16T23:30")));
    assert_eq!(b.multiplier, Decimal::MAX);
    assert_eq!(b.amounts.adjusted_base, i64::MAX);
    assert_eq!(b.amounts.final_total, i64::MAX);
}

#[test]
fn test_custom_tariff_from_toml() {
    let config = PricingConfig::from_toml_str(
        r#"
        [fees]
        tax_rate = "0.06"
        platform_rate = "0.10"
        processor_fixed = 30

        [holidays]
        calendar = "none"
        "#,
    )
    .unwrap();
    let engine = PricingEngine::new(config).unwrap();
    let b = engine.compute_price(&scenario_a());
    // 4000 + 400 = 4400; tax 264; 4664; round(69.96)=70 + 30
    assert_eq!(b.amounts.total_with_tax, 4664);
    assert_eq!(b.amounts.processor_fee, 100);
    assert_eq!(b.amounts.final_total, 4764);
}

// ─── Reconciliation ───────────────────────────────────────────────────────────

#[test]
fn test_json_exchange_and_reconcile() {
    let local = compute_price(&scenario_a().with_urgent(true));
    let json = serde_json::to_string(&local).unwrap();
    let remote: PricingBreakdown = serde_json::from_str(&json).unwrap();
    assert_eq!(remote, local);
    assert!(local.reconcile(&remote.amounts).is_ok());

    let mut diverged = remote.amounts;
    diverged.processor_fee -= 1;
    diverged.final_total -= 1;
    assert!(matches!(
        local.reconcile(&diverged),
        Err(Error::Mismatch { field: "processor_fee", .. })
    ));
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn arb_request() -> impl Strategy<Value = PricingRequest> {
    (
        0i64..100_000,      // rate in cents
        0i64..2_000,        // hours in hundredths
        any::<bool>(),      // urgent
        0i64..100_000,      // distance in metres
        any::<bool>(),      // flat
        1583u16..=9999,
        1u8..=28,
        1u8..=12,
        0u8..=23,
        0u8..=59,
    )
        .prop_map(|(rate, hours, urgent, metres, flat, y, d, m, h, min)| {
            let at = LocalTimestamp::from_ymd_hm(y, m, d, h, min).unwrap();
            let base = if flat {
                PricingRequest::flat(Decimal::new(rate, 2), at)
            } else {
                PricingRequest::hourly(Decimal::new(rate, 2), Decimal::new(hours, 2), at)
            };
            base.with_urgent(urgent)
                .with_distance_km(Decimal::new(metres, 3))
        })
}

proptest! {
    #[test]
    fn totals_are_monotonic(req in arb_request()) {
        prop_assert!(req.validate().is_ok());
        let a = compute_price(&req).amounts;
        prop_assert!(a.final_total >= a.total_with_tax);
        prop_assert!(a.total_with_tax >= a.total_before_tax);
        prop_assert!(a.total_before_tax >= a.subtotal);
        prop_assert!(a.subtotal >= a.adjusted_base);
        prop_assert!(a.adjusted_base >= a.base_amount);
        prop_assert!(a.base_amount >= 0);
    }

    #[test]
    fn totals_are_consistent(req in arb_request()) {
        let a = compute_price(&req).amounts;
        prop_assert_eq!(a.subtotal, a.adjusted_base + a.urgent_fee + a.travel_fee);
        prop_assert_eq!(a.total_before_tax, a.subtotal + a.platform_fee);
        prop_assert_eq!(a.total_with_tax, a.total_before_tax + a.tax);
        prop_assert_eq!(a.final_total, a.total_with_tax + a.processor_fee);
    }

    #[test]
    fn pricing_is_idempotent(req in arb_request()) {
        let engine = PricingEngine::default();
        let first = engine.compute_price(&req);
        let second = engine.compute_price(&req);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, compute_price(&req));
    }
}
