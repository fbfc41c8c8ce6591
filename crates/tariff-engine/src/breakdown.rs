//! Pricing breakdown: integer amounts, the applied multiplier, and their
//! display strings.

use serde::{Deserialize, Serialize};
use tariff_core::errors::{Error, Result};
use tariff_core::{format_minor_units, format_rate, CurrencyExponent, Factor, MinorUnits, Rate};

use crate::config::FeeSchedule;
use crate::fee_stack::FeeAmounts;
use crate::multiplier::{AppliedMultiplier, AppliedSurcharge};

/// Fixed-point strings for every amount of a [`FeeAmounts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct FormattedAmounts {
    pub base_amount: String,
    pub adjusted_base: String,
    pub urgent_fee: String,
    pub travel_fee: String,
    pub subtotal: String,
    pub platform_fee: String,
    pub total_before_tax: String,
    pub tax: String,
    pub total_with_tax: String,
    pub processor_fee: String,
    pub final_total: String,
}

impl FormattedAmounts {
    /// Format `amounts` with `exponent` decimal places.
    pub fn new(amounts: &FeeAmounts, exponent: CurrencyExponent) -> Self {
        let f = |v| format_minor_units(v, exponent);
        Self {
            base_amount: f(amounts.base_amount),
            adjusted_base: f(amounts.adjusted_base),
            urgent_fee: f(amounts.urgent_fee),
            travel_fee: f(amounts.travel_fee),
            subtotal: f(amounts.subtotal),
            platform_fee: f(amounts.platform_fee),
            total_before_tax: f(amounts.total_before_tax),
            tax: f(amounts.tax),
            total_with_tax: f(amounts.total_with_tax),
            processor_fee: f(amounts.processor_fee),
            final_total: f(amounts.final_total),
        }
    }
}

/// One line of an itemised summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display label.
    pub label: String,
    /// Amount in minor units.
    pub amount: MinorUnits,
    /// Amount formatted for display.
    pub formatted: String,
}

/// Result of pricing one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Applied surcharge multiplier.
    pub multiplier: Factor,
    /// Surcharges making up the multiplier.
    pub surcharges: Vec<AppliedSurcharge>,
    /// Integer amounts.
    pub amounts: FeeAmounts,
    /// Display strings of `amounts`.
    pub formatted: FormattedAmounts,
    /// Decimal places used by `formatted`.
    pub currency_exponent: CurrencyExponent,
    /// Platform rate that produced `amounts.platform_fee`.
    pub platform_rate: Rate,
    /// Tax rate that produced `amounts.tax`.
    pub tax_rate: Rate,
}

impl PricingBreakdown {
    /// Assemble a breakdown from its parts.
    ///
    /// `schedule` must be the one the fee stack ran with; its rates label
    /// the itemised lines.
    pub fn new(
        multiplier: AppliedMultiplier,
        amounts: FeeAmounts,
        schedule: &FeeSchedule,
        currency_exponent: CurrencyExponent,
    ) -> Self {
        Self {
            multiplier: multiplier.value,
            surcharges: multiplier.surcharges,
            formatted: FormattedAmounts::new(&amounts, currency_exponent),
            amounts,
            currency_exponent,
            platform_rate: schedule.platform_rate,
            tax_rate: schedule.tax_rate,
        }
    }

    /// The amount to hand to payment initiation, in minor units.
    pub fn final_total(&self) -> MinorUnits {
        self.amounts.final_total
    }

    /// Itemised summary for display.
    ///
    /// Lines that are zero because they did not apply (surcharge, urgency,
    /// travel) are left out; the lines always add up to the final total.
    pub fn line_items(&self) -> Vec<LineItem> {
        let a = &self.amounts;
        let mut lines = Vec::new();
        let mut push = |label: String, amount: MinorUnits| {
            lines.push(LineItem {
                label,
                amount,
                formatted: format_minor_units(amount, self.currency_exponent),
            })
        };

        push("Base cost".into(), a.base_amount);
        let surcharge = a.adjusted_base - a.base_amount;
        if surcharge != 0 {
            push(format!("Surcharges (x{})", self.multiplier.normalize()), surcharge);
        }
        if a.urgent_fee != 0 {
            push("Urgent service".into(), a.urgent_fee);
        }
        if a.travel_fee != 0 {
            push("Travel".into(), a.travel_fee);
        }
        push(
            format!("Platform fee ({})", format_rate(self.platform_rate)),
            a.platform_fee,
        );
        push(format!("Tax ({})", format_rate(self.tax_rate)), a.tax);
        push("Payment processing".into(), a.processor_fee);
        lines
    }

    /// Compare with the breakdown computed by the authoritative counterpart.
    ///
    /// Fails with [`Error::Mismatch`] naming the first differing field in
    /// computation order.
    pub fn reconcile(&self, authoritative: &FeeAmounts) -> Result<()> {
        let theirs = authoritative.fields();
        for ((field, local), (_, other)) in self.amounts.fields().into_iter().zip(theirs) {
            if local != other {
                return Err(Error::Mismatch {
                    field,
                    local,
                    authoritative: other,
                });
            }
        }
        Ok(())
    }
}
