//! Layered fee stack in integer minor units.
//!
//! Each step multiplies an integer amount by an exact decimal rate and rounds
//! the product back to an integer before the next step reads it.  Rounding
//! is not associative, so the step order below is part of the contract:
//!
//! 1. `adjusted_base    = round(base × multiplier)`
//! 2. `urgent_fee       = round(adjusted_base × urgent_rate)` if urgent, else 0
//! 3. `travel_fee       = round(max(0, km − included_km) × per_km_rate)`
//! 4. `subtotal         = adjusted_base + urgent_fee + travel_fee`
//! 5. `platform_fee     = round(subtotal × platform_rate)`
//! 6. `total_before_tax = subtotal + platform_fee`
//! 7. `tax              = round(total_before_tax × tax_rate)`
//! 8. `total_with_tax   = total_before_tax + tax`
//! 9. `processor_fee    = round(total_with_tax × processor_rate) + processor_fixed`
//! 10. `final_total     = total_with_tax + processor_fee`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tariff_core::{round_to_minor, saturating_mul, Factor, MinorUnits, Rounding};

use crate::config::FeeSchedule;

/// Integer amounts produced by the fee stack, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FeeAmounts {
    /// Base amount before surcharges.
    pub base_amount: MinorUnits,
    /// Base amount after the time-of-day / day-of-week multiplier.
    pub adjusted_base: MinorUnits,
    /// Urgency premium.
    pub urgent_fee: MinorUnits,
    /// Distance-based travel fee.
    pub travel_fee: MinorUnits,
    /// `adjusted_base + urgent_fee + travel_fee`.
    pub subtotal: MinorUnits,
    /// Platform commission.
    pub platform_fee: MinorUnits,
    /// `subtotal + platform_fee`.
    pub total_before_tax: MinorUnits,
    /// Consumption tax.
    pub tax: MinorUnits,
    /// `total_before_tax + tax`.
    pub total_with_tax: MinorUnits,
    /// Payment-processor fee (percentage part plus fixed part).
    pub processor_fee: MinorUnits,
    /// `total_with_tax + processor_fee`, the amount to authorise.
    pub final_total: MinorUnits,
}

impl FeeAmounts {
    /// All fields with their names, in computation order.
    pub fn fields(&self) -> [(&'static str, MinorUnits); 11] {
        [
            ("base_amount", self.base_amount),
            ("adjusted_base", self.adjusted_base),
            ("urgent_fee", self.urgent_fee),
            ("travel_fee", self.travel_fee),
            ("subtotal", self.subtotal),
            ("platform_fee", self.platform_fee),
            ("total_before_tax", self.total_before_tax),
            ("tax", self.tax),
            ("total_with_tax", self.total_with_tax),
            ("processor_fee", self.processor_fee),
            ("final_total", self.final_total),
        ]
    }
}

/// The fee stack: a fee schedule plus the rounding convention.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeStack {
    schedule: FeeSchedule,
    rounding: Rounding,
}

impl FeeStack {
    /// Create a fee stack.
    pub fn new(schedule: FeeSchedule, rounding: Rounding) -> Self {
        Self { schedule, rounding }
    }

    /// The fee schedule in use.
    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    fn round(&self, value: Decimal) -> MinorUnits {
        round_to_minor(value, self.rounding)
    }

    fn round_product(&self, a: Decimal, b: Decimal) -> MinorUnits {
        // Saturates like the integer additions below.
        self.round(saturating_mul(a, b))
    }

    fn apply(&self, amount: MinorUnits, rate: Decimal) -> MinorUnits {
        self.round_product(Decimal::from(amount), rate)
    }

    /// Run the fee stack.
    ///
    /// Inputs are not validated; negative values are a caller error.
    pub fn compute_fees(
        &self,
        base_amount: MinorUnits,
        multiplier: Factor,
        is_urgent: bool,
        distance_km: Decimal,
    ) -> FeeAmounts {
        let s = &self.schedule;

        let adjusted_base = self.apply(base_amount, multiplier);
        let urgent_fee = if is_urgent {
            self.apply(adjusted_base, s.urgent_rate)
        } else {
            0
        };
        let billable_km = (distance_km - s.included_km).max(Decimal::ZERO);
        let travel_fee = self.round_product(billable_km, s.per_km_rate);
        let subtotal = adjusted_base
            .saturating_add(urgent_fee)
            .saturating_add(travel_fee);
        tracing::trace!(adjusted_base, urgent_fee, travel_fee, subtotal, "fee stack: subtotal");

        let platform_fee = self.apply(subtotal, s.platform_rate);
        let total_before_tax = subtotal.saturating_add(platform_fee);
        let tax = self.apply(total_before_tax, s.tax_rate);
        let total_with_tax = total_before_tax.saturating_add(tax);
        tracing::trace!(platform_fee, total_before_tax, tax, total_with_tax, "fee stack: tax");

        let processor_fee = self
            .apply(total_with_tax, s.processor_rate)
            .saturating_add(s.processor_fixed);
        let final_total = total_with_tax.saturating_add(processor_fee);
        tracing::trace!(processor_fee, final_total, "fee stack: final");

        FeeAmounts {
            base_amount,
            adjusted_base,
            urgent_fee,
            travel_fee,
            subtotal,
            platform_fee,
            total_before_tax,
            tax,
            total_with_tax,
            processor_fee,
            final_total,
        }
    }
}

impl Default for FeeStack {
    fn default() -> Self {
        Self::new(FeeSchedule::default(), Rounding::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn neutral_multiplier_no_extras() {
        let fees = FeeStack::default().compute_fees(4000, dec!(1), false, Decimal::ZERO);
        assert_eq!(fees.adjusted_base, 4000);
        assert_eq!(fees.urgent_fee, 0);
        assert_eq!(fees.travel_fee, 0);
        assert_eq!(fees.platform_fee, 1000);
        assert_eq!(fees.tax, 1050);
        assert_eq!(fees.processor_fee, 116); // round(90.75) + 25
        assert_eq!(fees.final_total, 6166);
    }

    #[test]
    fn multiplier_rounds_before_urgency() {
        // 3333 × 1.3 = 4332.9 → 4333; 4333 × 0.5 = 2166.5 → 2167
        let fees = FeeStack::default().compute_fees(3333, dec!(1.3), true, Decimal::ZERO);
        assert_eq!(fees.adjusted_base, 4333);
        assert_eq!(fees.urgent_fee, 2167);
    }

    #[test]
    fn travel_within_included_distance_is_free() {
        let stack = FeeStack::default();
        assert_eq!(stack.compute_fees(1000, dec!(1), false, dec!(10)).travel_fee, 0);
        assert_eq!(stack.compute_fees(1000, dec!(1), false, dec!(3.7)).travel_fee, 0);
        // 0.25 km × 60 = 15
        assert_eq!(stack.compute_fees(1000, dec!(1), false, dec!(10.25)).travel_fee, 15);
        // 2.0125 km × 60 = 120.75 → 121
        assert_eq!(stack.compute_fees(1000, dec!(1), false, dec!(12.0125)).travel_fee, 121);
    }

    #[test]
    fn rounding_convention_is_respected() {
        // total_with_tax 6050 × 0.015 = 90.75 → 90 when truncating
        let stack = FeeStack::new(FeeSchedule::default(), Rounding::Truncate);
        let fees = stack.compute_fees(4000, dec!(1), false, Decimal::ZERO);
        assert_eq!(fees.processor_fee, 115);
    }

    #[test]
    fn half_cent_ties() {
        // urgent fee on 4333 is 2166.5: away from zero gives 2167, half-even 2166.
        let closest = FeeStack::default().compute_fees(4333, dec!(1), true, Decimal::ZERO);
        let even = FeeStack::new(FeeSchedule::default(), Rounding::HalfEven)
            .compute_fees(4333, dec!(1), true, Decimal::ZERO);
        assert_eq!(closest.urgent_fee, 2167);
        assert_eq!(even.urgent_fee, 2166);
    }

    #[test]
    fn zero_base_still_pays_fixed_processor_fee() {
        let fees = FeeStack::default().compute_fees(0, dec!(2.6), true, Decimal::ZERO);
        assert_eq!(fees.total_with_tax, 0);
        assert_eq!(fees.processor_fee, 25);
        assert_eq!(fees.final_total, 25);
    }

    #[test]
    fn fields_follow_computation_order() {
        let fees = FeeStack::default().compute_fees(4000, dec!(1), false, Decimal::ZERO);
        let names: Vec<_> = fees.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names.first(), Some(&"base_amount"));
        assert_eq!(names.last(), Some(&"final_total"));
        assert_eq!(fees.fields()[10].1, 6166);
    }
}
