//! Time-of-day and day-of-week surcharge multiplier.
//!
//! | Predicate                     | Default factor |
//! |-------------------------------|----------------|
//! | hour in the evening window    | ×1.3           |
//! | hour in the night window      | ×2.0           |
//! | Saturday                      | ×1.3           |
//! | Sunday or public holiday      | ×1.5           |
//!
//! Every rule whose predicate holds contributes its factor; the multiplier is
//! their product (Saturday night = 2.0 × 1.3 = 2.6), saturating at the
//! decimal maximum.  The evening and night windows never overlap (enforced
//! by configuration validation).

use std::sync::Arc;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tariff_core::{saturating_mul, Factor};
use tariff_time::{HolidayCalendar, LocalTimestamp, Weekday};

use crate::config::SurchargeRules;

/// Which rule produced a surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeKind {
    /// Evening hours.
    Evening,
    /// Night hours.
    Night,
    /// Saturday.
    Saturday,
    /// Sunday that is not also a public holiday.
    Sunday,
    /// Public holiday (any weekday, Sunday included).
    Holiday,
}

/// One applied surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedSurcharge {
    /// Rule that fired.
    pub kind: SurchargeKind,
    /// Its factor.
    pub factor: Factor,
    /// Holiday name, for [`SurchargeKind::Holiday`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
}

/// The resolved multiplier and the surcharges that make it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMultiplier {
    /// Product of all applied factors (1 when none apply).
    pub value: Factor,
    /// Applied surcharges in rule order.
    pub surcharges: Vec<AppliedSurcharge>,
}

impl AppliedMultiplier {
    /// Approximate floating-point view, for display only.
    pub fn as_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or(f64::NAN)
    }
}

/// Resolves the surcharge multiplier of a local timestamp.
#[derive(Debug, Clone)]
pub struct MultiplierResolver {
    rules: SurchargeRules,
    calendar: Arc<dyn HolidayCalendar>,
}

impl MultiplierResolver {
    /// Create a resolver from surcharge rules and a holiday calendar.
    pub fn new(rules: SurchargeRules, calendar: Arc<dyn HolidayCalendar>) -> Self {
        Self { rules, calendar }
    }

    /// The holiday calendar in use.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }

    /// Resolve the multiplier together with the surcharges that fired.
    pub fn resolve(&self, at: LocalTimestamp) -> AppliedMultiplier {
        let rules = &self.rules;
        let hour = at.hour();
        let mut surcharges = Vec::new();

        let mut push = |kind, factor, holiday: Option<&str>| {
            surcharges.push(AppliedSurcharge {
                kind,
                factor,
                holiday: holiday.map(str::to_owned),
            })
        };

        if rules.evening.contains(hour) {
            push(SurchargeKind::Evening, rules.evening.factor, None);
        }
        if rules.night.contains(hour) {
            push(SurchargeKind::Night, rules.night.factor, None);
        }

        let weekday = at.weekday();
        if weekday == Weekday::Saturday {
            push(SurchargeKind::Saturday, rules.saturday, None);
        }
        match self.calendar.holiday_name(at.date()) {
            Some(name) => push(SurchargeKind::Holiday, rules.sunday_or_holiday, Some(name)),
            None if weekday == Weekday::Sunday => {
                push(SurchargeKind::Sunday, rules.sunday_or_holiday, None)
            }
            None => {}
        }

        let value = surcharges
            .iter()
            .fold(Decimal::ONE, |acc, s| saturating_mul(acc, s.factor))
            .normalize();
        AppliedMultiplier { value, surcharges }
    }

    /// Resolve just the multiplier value.
    pub fn resolve_multiplier(&self, at: LocalTimestamp) -> Factor {
        self.resolve(at).value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use tariff_time::{Belgium, NullCalendar};

    fn ts(s: &str) -> LocalTimestamp {
        s.parse().unwrap()
    }

    fn belgium() -> MultiplierResolver {
        MultiplierResolver::new(SurchargeRules::default(), Arc::new(Belgium))
    }

    #[test]
    fn tuesday_morning_is_neutral() {
        let m = belgium().resolve(ts("2024-03-12T10:00"));
        assert_eq!(m.value, dec!(1));
        assert!(m.surcharges.is_empty());
    }

    #[test]
    fn saturday_night() {
        let m = belgium().resolve(ts("2024-03-16T23:30"));
        assert_eq!(m.value, dec!(2.6));
        let kinds: Vec<_> = m.surcharges.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [SurchargeKind::Night, SurchargeKind::Saturday]);
        assert_relative_eq!(m.as_f64(), 2.6, epsilon = 1e-12);
    }

    #[test]
    fn evening_boundaries() {
        let r = belgium();
        assert_eq!(r.resolve_multiplier(ts("2024-03-12T17:59")), dec!(1));
        assert_eq!(r.resolve_multiplier(ts("2024-03-12T18:00")), dec!(1.3));
        assert_eq!(r.resolve_multiplier(ts("2024-03-12T22:59")), dec!(1.3));
        assert_eq!(r.resolve_multiplier(ts("2024-03-12T23:00")), dec!(2));
        assert_eq!(r.resolve_multiplier(ts("2024-03-13T06:59")), dec!(2));
        assert_eq!(r.resolve_multiplier(ts("2024-03-13T07:00")), dec!(1));
    }

    #[test]
    fn sunday_and_holiday_apply_once() {
        let r = belgium();
        // Plain Sunday
        let sunday = r.resolve(ts("2024-03-17T10:00"));
        assert_eq!(sunday.value, dec!(1.5));
        assert_eq!(sunday.surcharges[0].kind, SurchargeKind::Sunday);
        // Easter Sunday is both; the factor is applied once.
        let easter = r.resolve(ts("2024-03-31T10:00"));
        assert_eq!(easter.value, dec!(1.5));
        assert_eq!(easter.surcharges.len(), 1);
        assert_eq!(easter.surcharges[0].holiday.as_deref(), Some("Easter Sunday"));
    }

    #[test]
    fn holiday_on_a_thursday() {
        let m = belgium().resolve(ts("2025-12-25T10:00"));
        assert_eq!(m.value, dec!(1.5));
        assert_eq!(m.surcharges[0].kind, SurchargeKind::Holiday);
        assert_eq!(m.surcharges[0].holiday.as_deref(), Some("Christmas Day"));
    }

    #[test]
    fn holiday_on_saturday_evening_stacks() {
        // 2027-12-25 is a Saturday.
        let m = belgium().resolve(ts("2027-12-25T19:00"));
        assert_eq!(m.value, dec!(2.535)); // 1.3 × 1.3 × 1.5
    }

    #[test]
    fn null_calendar_ignores_holidays() {
        let r = MultiplierResolver::new(SurchargeRules::default(), Arc::new(NullCalendar));
        assert_eq!(r.resolve_multiplier(ts("2025-12-25T10:00")), dec!(1));
        assert_eq!(r.calendar().name(), "Null");
    }
}
