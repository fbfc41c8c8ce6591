//! Pricing façade.
//!
//! [`PricingEngine::compute_price`] is the single entry point: it resolves
//! the base amount, the surcharge multiplier, and the fee stack, then attaches
//! display strings.  It never fails and never reads the clock; the request
//! carries its own local timestamp.

use std::sync::Arc;

use tariff_core::errors::Result;
use tariff_core::{to_minor_units, MinorUnits};
use tariff_time::{Belgium, HolidayCalendar};

use crate::breakdown::PricingBreakdown;
use crate::config::PricingConfig;
use crate::fee_stack::FeeStack;
use crate::multiplier::MultiplierResolver;
use crate::request::{BaseAmount, PricingRequest};

/// Pricing engine built from a [`PricingConfig`].
///
/// Holds no mutable state; one engine can serve any number of threads.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
    resolver: MultiplierResolver,
    fee_stack: FeeStack,
}

impl PricingEngine {
    /// Validate `config` and build the engine, including its holiday
    /// calendar.
    pub fn new(config: PricingConfig) -> Result<Self> {
        let calendar = config.holidays.build_calendar();
        Self::with_calendar(config, calendar)
    }

    /// Build the engine with an explicit holiday calendar, ignoring
    /// `config.holidays`.
    pub fn with_calendar(config: PricingConfig, calendar: Arc<dyn HolidayCalendar>) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, calendar))
    }

    fn assemble(config: PricingConfig, calendar: Arc<dyn HolidayCalendar>) -> Self {
        tracing::debug!(calendar = calendar.name(), rounding = ?config.rounding, "pricing engine ready");
        Self {
            resolver: MultiplierResolver::new(config.surcharges.clone(), calendar),
            fee_stack: FeeStack::new(config.fees.clone(), config.rounding),
            config,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// The multiplier resolver.
    pub fn resolver(&self) -> &MultiplierResolver {
        &self.resolver
    }

    /// The fee stack.
    pub fn fee_stack(&self) -> &FeeStack {
        &self.fee_stack
    }

    /// Base amount in minor units, rounded with the configured convention.
    pub fn base_minor_units(&self, base: &BaseAmount) -> MinorUnits {
        to_minor_units(
            base.major_units(),
            self.config.currency_exponent,
            self.config.rounding,
        )
    }

    /// Price a request.
    ///
    /// Negative inputs are not rejected here; call
    /// [`PricingRequest::validate`] first.
    pub fn compute_price(&self, request: &PricingRequest) -> PricingBreakdown {
        let base = self.base_minor_units(&request.base);
        let multiplier = self.resolver.resolve(request.requested_at);
        let amounts = self.fee_stack.compute_fees(
            base,
            multiplier.value,
            request.is_urgent,
            request.distance_km,
        );
        tracing::debug!(
            requested_at = %request.requested_at,
            multiplier = %multiplier.value,
            base,
            final_total = amounts.final_total,
            "priced request"
        );
        PricingBreakdown::new(
            multiplier,
            amounts,
            self.fee_stack.schedule(),
            self.config.currency_exponent,
        )
    }
}

impl Default for PricingEngine {
    /// The reference tariff with Belgian holidays.
    fn default() -> Self {
        Self::assemble(PricingConfig::default(), Arc::new(Belgium))
    }
}

/// Price `request` with the default configuration.
pub fn compute_price(request: &PricingRequest) -> PricingBreakdown {
    PricingEngine::default().compute_price(request)
}
