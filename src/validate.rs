//! Optional attribute validation layered over any builder.
//!
//! The base capability accepts every value. [`Validated`] adds fallible
//! `try_set_*` steps that check an [`AttributePolicy`] first and leave the
//! in-progress product untouched on rejection.

use serde::Deserialize;
use tracing::warn;

use crate::builder::{Builder, Extract};
use crate::director::Step;
use crate::error::{Attribute, BuildError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttributePolicy {
    pub min_seats: i32,
    pub max_seats: i32,
    pub allow_empty_engine: bool,
    pub max_engine_len: usize,
}

impl Default for AttributePolicy {
    // Rejects nothing.
    fn default() -> Self {
        AttributePolicy {
            min_seats: i32::MIN,
            max_seats: i32::MAX,
            allow_empty_engine: true,
            max_engine_len: usize::MAX,
        }
    }
}

impl AttributePolicy {
    /// Non-negative seats, non-empty engine.
    pub fn strict() -> Self {
        AttributePolicy {
            min_seats: 0,
            allow_empty_engine: false,
            ..Self::default()
        }
    }

    pub fn check_seats(&self, seats: i32) -> Result<()> {
        if seats < self.min_seats || seats > self.max_seats {
            return Err(BuildError::invalid(Attribute::Seats, seats));
        }
        Ok(())
    }

    pub fn check_engine(&self, engine: &str) -> Result<()> {
        let too_long = engine.chars().count() > self.max_engine_len;
        if (engine.is_empty() && !self.allow_empty_engine) || too_long {
            return Err(BuildError::invalid(Attribute::Engine, engine));
        }
        Ok(())
    }
}

/// A builder whose steps can be checked against a policy.
///
/// Still a plain [`Builder`]: the unchecked steps pass straight through, so
/// wrapping does not change the base contract.
#[derive(Debug, Default)]
pub struct Validated<B> {
    inner: B,
    policy: AttributePolicy,
}

impl<B: Builder> Validated<B> {
    pub fn new(inner: B, policy: AttributePolicy) -> Self {
        Validated { inner, policy }
    }

    pub fn policy(&self) -> &AttributePolicy {
        &self.policy
    }

    pub fn into_inner(self) -> B {
        self.inner
    }

    pub fn try_set_seats(&mut self, seats: i32) -> Result<()> {
        self.policy.check_seats(seats).inspect_err(log_rejection)?;
        self.inner.set_seats(seats);
        Ok(())
    }

    pub fn try_set_engine(&mut self, engine: &str) -> Result<()> {
        self.policy.check_engine(engine).inspect_err(log_rejection)?;
        self.inner.set_engine(engine);
        Ok(())
    }

    pub fn try_apply(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Seats(seats) => self.try_set_seats(*seats),
            Step::Engine(engine) => self.try_set_engine(engine),
            Step::TripComputer(_) | Step::Gps(_) => {
                step.apply(&mut self.inner);
                Ok(())
            }
        }
    }
}

fn log_rejection(err: &BuildError) {
    warn!(error = %err, "rejected attribute value");
}

impl<B: Builder> Builder for Validated<B> {
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn set_seats(&mut self, seats: i32) {
        self.inner.set_seats(seats);
    }

    fn set_engine(&mut self, engine: &str) {
        self.inner.set_engine(engine);
    }

    fn set_trip_computer(&mut self, trip_computer: bool) {
        self.inner.set_trip_computer(trip_computer);
    }

    fn set_gps(&mut self, gps: bool) {
        self.inner.set_gps(gps);
    }
}

impl<B: Extract> Extract for Validated<B> {
    type Product = B::Product;

    fn get_product(&mut self) -> B::Product {
        self.inner.get_product()
    }
}
