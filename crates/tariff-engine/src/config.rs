//! Pricing configuration.
//!
//! Every rate the engine applies lives here rather than in the algorithm, so
//! jurisdictions and pricing experiments differ only in data.  The defaults
//! reproduce the reference tariff; a TOML file overrides any subset:
//!
//! ```toml
//! rounding = "closest"
//!
//! [fees]
//! tax_rate = "0.21"
//! processor_fixed = 25
//!
//! [surcharges.night]
//! start_hour = 23
//! end_hour = 7
//! factor = "2.0"
//!
//! [holidays]
//! calendar = "belgium"
//!
//! [[holidays.extra]]
//! date = "2025-07-11"
//! name = "Flemish Community Day"
//! ```
//!
//! Decimal values may be written as strings so they never pass through a
//! binary float.

use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tariff_core::errors::{Error, Result};
use tariff_core::{ensure, CurrencyExponent, Factor, MinorUnits, Rate, Rounding};
use tariff_time::{Belgium, BespokeCalendar, Date, HolidayCalendar, NullCalendar};

/// Largest supported currency exponent.
const MAX_CURRENCY_EXPONENT: CurrencyExponent = 6;

/// Complete pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Decimal places between major and minor currency units.
    pub currency_exponent: CurrencyExponent,
    /// Rounding convention applied after every fee step.
    pub rounding: Rounding,
    /// Fee rates.
    pub fees: FeeSchedule,
    /// Time-of-day and day-of-week surcharges.
    pub surcharges: SurchargeRules,
    /// Holiday calendar selection.
    pub holidays: HolidayConfig,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency_exponent: 2,
            rounding: Rounding::Closest,
            fees: FeeSchedule::default(),
            surcharges: SurchargeRules::default(),
            holidays: HolidayConfig::default(),
        }
    }
}

/// Rates of the fee stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeeSchedule {
    /// Urgency premium as a fraction of the adjusted base.
    pub urgent_rate: Rate,
    /// Kilometres travelled free of charge.
    pub included_km: Decimal,
    /// Travel fee per kilometre beyond `included_km`, in minor units.
    pub per_km_rate: Decimal,
    /// Platform commission as a fraction of the subtotal.
    pub platform_rate: Rate,
    /// Consumption tax as a fraction of the pre-tax total.
    pub tax_rate: Rate,
    /// Processor fee as a fraction of the tax-inclusive total.
    pub processor_rate: Rate,
    /// Fixed processor fee per transaction, in minor units.
    pub processor_fixed: MinorUnits,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            urgent_rate: dec!(0.5),
            included_km: dec!(10),
            per_km_rate: dec!(60),
            platform_rate: dec!(0.25),
            tax_rate: dec!(0.21),
            processor_rate: dec!(0.015),
            processor_fixed: 25,
        }
    }
}

impl FeeSchedule {
    fn validate(&self) -> Result<()> {
        let non_negative = [
            ("urgent_rate", self.urgent_rate),
            ("included_km", self.included_km),
            ("per_km_rate", self.per_km_rate),
            ("platform_rate", self.platform_rate),
            ("tax_rate", self.tax_rate),
            ("processor_rate", self.processor_rate),
            ("processor_fixed", Decimal::from(self.processor_fixed)),
        ];
        for (name, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(Error::Config(format!("fees.{name} must be non-negative, got {value}")));
            }
        }
        Ok(())
    }
}

/// A half-open range of hours `[start_hour, end_hour)` with its factor.
///
/// When `start_hour > end_hour` the window wraps past midnight, e.g.
/// `[23, 7)` covers 23:00–06:59.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeWindow {
    /// First hour inside the window (0–23).
    pub start_hour: u8,
    /// First hour after the window (0–24).
    pub end_hour: u8,
    /// Multiplicative surcharge applied inside the window.
    pub factor: Factor,
}

impl TimeWindow {
    /// Create a window, checking the hour bounds.
    pub fn new(start_hour: u8, end_hour: u8, factor: Factor) -> Result<Self> {
        ensure!(start_hour <= 23, "start_hour {start_hour} out of range [0, 23]");
        ensure!(end_hour <= 24, "end_hour {end_hour} out of range [0, 24]");
        ensure!(start_hour != end_hour, "empty window [{start_hour}, {end_hour})");
        Ok(Self {
            start_hour,
            end_hour,
            factor,
        })
    }

    /// Return `true` if `hour` lies inside the window.
    pub fn contains(&self, hour: u8) -> bool {
        if self.start_hour < self.end_hour {
            (self.start_hour..self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// Surcharge rules.  Each rule whose predicate holds multiplies the rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurchargeRules {
    /// Evening window, `[18, 23)` ×1.3 by default.
    pub evening: TimeWindow,
    /// Night window, `[23, 7)` ×2.0 by default.
    pub night: TimeWindow,
    /// Saturday factor.
    pub saturday: Factor,
    /// Factor for Sundays and public holidays (applied once when both hold).
    pub sunday_or_holiday: Factor,
}

impl Default for SurchargeRules {
    fn default() -> Self {
        Self {
            evening: TimeWindow {
                start_hour: 18,
                end_hour: 23,
                factor: dec!(1.3),
            },
            night: TimeWindow {
                start_hour: 23,
                end_hour: 7,
                factor: dec!(2.0),
            },
            saturday: dec!(1.3),
            sunday_or_holiday: dec!(1.5),
        }
    }
}

impl SurchargeRules {
    fn validate(&self) -> Result<()> {
        for (name, window) in [("evening", &self.evening), ("night", &self.night)] {
            TimeWindow::new(window.start_hour, window.end_hour, window.factor)
                .map_err(|e| Error::Config(format!("surcharges.{name}: {e}")))?;
        }
        if let Some(hour) = (0..24).find(|h| self.evening.contains(*h) && self.night.contains(*h)) {
            return Err(Error::Config(format!(
                "surcharges.evening and surcharges.night overlap at hour {hour}"
            )));
        }
        let factors = [
            ("evening.factor", self.evening.factor),
            ("night.factor", self.night.factor),
            ("saturday", self.saturday),
            ("sunday_or_holiday", self.sunday_or_holiday),
        ];
        for (name, factor) in factors {
            if factor < Decimal::ONE {
                return Err(Error::Config(format!(
                    "surcharges.{name} must be at least 1, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

/// Built-in jurisdiction calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    /// Belgian public holidays.
    #[default]
    Belgium,
    /// No public holidays.
    None,
}

/// An explicitly configured extra holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraHoliday {
    /// The local calendar date.
    pub date: Date,
    /// Display name.
    pub name: String,
}

/// Holiday calendar selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HolidayConfig {
    /// Base jurisdiction calendar.
    pub calendar: CalendarKind,
    /// Additional dates treated as holidays.
    pub extra: Vec<ExtraHoliday>,
}

impl HolidayConfig {
    /// Build the calendar described by this configuration.
    pub fn build_calendar(&self) -> Arc<dyn HolidayCalendar> {
        let base: Arc<dyn HolidayCalendar> = match self.calendar {
            CalendarKind::Belgium => Arc::new(Belgium),
            CalendarKind::None => Arc::new(NullCalendar),
        };
        if self.extra.is_empty() {
            return base;
        }
        let name = format!("{} (+{} extra)", base.name(), self.extra.len());
        let mut bespoke = BespokeCalendar::new(name, base);
        for holiday in &self.extra {
            bespoke.add_holiday(holiday.date, holiday.name.clone());
        }
        Arc::new(bespoke)
    }
}

impl PricingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: PricingConfig =
            toml::from_str(s).map_err(|e| Error::Config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded pricing configuration");
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(format!("cannot serialize: {e}")))
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.currency_exponent > MAX_CURRENCY_EXPONENT {
            return Err(Error::Config(format!(
                "currency_exponent {} exceeds {MAX_CURRENCY_EXPONENT}",
                self.currency_exponent
            )));
        }
        self.fees.validate()?;
        self.surcharges.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn default_windows() {
        let rules = SurchargeRules::default();
        assert!(rules.evening.contains(18));
        assert!(rules.evening.contains(22));
        assert!(!rules.evening.contains(23));
        assert!(rules.night.contains(23));
        assert!(rules.night.contains(0));
        assert!(rules.night.contains(6));
        assert!(!rules.night.contains(7));
        assert!(!rules.night.contains(17));
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = PricingConfig::from_toml_str(
            r#"
            [fees]
            tax_rate = "0.06"
            "#,
        )
        .unwrap();
        assert_eq!(config.fees.tax_rate, dec!(0.06));
        assert_eq!(config.fees.platform_rate, dec!(0.25));
        assert_eq!(config.surcharges, SurchargeRules::default());
        assert_eq!(config.rounding, Rounding::Closest);
    }

    #[test]
    fn extra_holidays_from_toml() {
        let config = PricingConfig::from_toml_str(
            r#"
            [holidays]
            calendar = "none"

            [[holidays.extra]]
            date = "2025-07-11"
            name = "Flemish Community Day"
            "#,
        )
        .unwrap();
        let cal = config.holidays.build_calendar();
        let day = Date::from_ymd(2025, 7, 11).unwrap();
        assert_eq!(cal.holiday_name(day), Some("Flemish Community Day"));
        assert!(!cal.is_holiday(Date::from_ymd(2025, 12, 25).unwrap()));
    }

    #[test]
    fn rejects_negative_rate() {
        let err = PricingConfig::from_toml_str("[fees]\nplatform_rate = \"-0.1\"").unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("platform_rate")));
    }

    #[test]
    fn rejects_overlapping_windows() {
        let toml = r#"
            [surcharges.evening]
            start_hour = 18
            end_hour = 24
            factor = "1.3"
        "#;
        let err = PricingConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("overlap at hour 23")));
    }

    #[test]
    fn rejects_discount_factor() {
        let mut config = PricingConfig::default();
        config.surcharges.saturday = dec!(0.9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(PricingConfig::from_toml_str("[fees]\nvat = \"0.2\"").is_err());
    }

    #[test]
    fn time_window_bounds() {
        assert!(TimeWindow::new(24, 2, dec!(1)).is_err());
        assert!(TimeWindow::new(5, 5, dec!(1)).is_err());
        assert!(TimeWindow::new(22, 24, dec!(1)).is_ok());
    }

    #[test]
    fn toml_roundtrip() {
        let config = PricingConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(PricingConfig::from_toml_str(&text).unwrap(), config);
    }
}
