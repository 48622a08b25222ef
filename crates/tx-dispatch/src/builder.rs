//! Fluent builder for constructing a [`Dispatcher`].

use tx_core::{CustomerId, DispatchConfig, FareSchedule};
use tx_fleet::{FleetBuilder, FleetRegistry};

use crate::{Dispatcher, DispatchResult, DispatchStats, NearestIdleSelector, TaxiSelector};

/// Fluent builder for [`Dispatcher<S>`].
///
/// # Required inputs
///
/// - [`DispatchConfig`]: taxi count, start location, fare schedule,
///   customer-id policy
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                 |
/// |-----------------|-------------------------|
/// | `.selector(s)`  | `NearestIdleSelector`   |
///
/// # Example
///
/// ```rust
/// use tx_core::DispatchConfig;
/// use tx_dispatch::{DispatcherBuilder, NearestIdleSelector};
///
/// let dispatcher = DispatcherBuilder::new(DispatchConfig::with_taxi_count(3))
///     .selector(NearestIdleSelector)
///     .build()
///     .unwrap();
/// assert_eq!(dispatcher.fleet().len(), 3);
/// ```
pub struct DispatcherBuilder<S: TaxiSelector = NearestIdleSelector> {
    config:   DispatchConfig,
    selector: S,
}

impl DispatcherBuilder<NearestIdleSelector> {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            selector: NearestIdleSelector,
        }
    }
}

impl<S: TaxiSelector> DispatcherBuilder<S> {
    /// Replace the selection rule.
    pub fn selector<T: TaxiSelector>(self, selector: T) -> DispatcherBuilder<T> {
        DispatcherBuilder {
            config: self.config,
            selector,
        }
    }

    /// Override the config's fare schedule.
    pub fn fare(mut self, fare: FareSchedule) -> Self {
        self.config.fare = fare;
        self
    }

    /// Validate the config, create the fleet, and return a ready dispatcher.
    pub fn build(self) -> DispatchResult<Dispatcher<S>> {
        self.config.validate()?;

        let fleet = if self.config.taxi_count <= 0 {
            FleetRegistry::initialize(self.config.taxi_count)
        } else {
            FleetBuilder::new(self.config.fleet_size())
                .start_location(self.config.start_location)
                .build()
        };

        Ok(Dispatcher {
            fleet,
            selector:      self.selector,
            fare:          self.config.fare,
            policy:        self.config.customer_id_policy,
            next_customer: CustomerId::FIRST,
            stats:         DispatchStats::default(),
        })
    }
}
