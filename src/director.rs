//! Named build sequences and the director that replays them.
//!
//! A sequence is a fixed, ordered list of capability calls. The director
//! replays it against whatever builder it is handed and never sees the
//! resulting product, so one sequence serves every product variant.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::builder::Builder;
use crate::error::{BuildError, Result};
use crate::validate::Validated;

pub const CAR: &str = "car";
pub const MANUAL: &str = "manual";

/// One capability call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Seats(i32),
    Engine(String),
    TripComputer(bool),
    Gps(bool),
}

impl Step {
    pub fn apply<B: Builder + ?Sized>(&self, builder: &mut B) {
        trace!(step = ?self, "applying step");
        match self {
            Step::Seats(seats) => builder.set_seats(*seats),
            Step::Engine(engine) => builder.set_engine(engine),
            Step::TripComputer(on) => builder.set_trip_computer(*on),
            Step::Gps(on) => builder.set_gps(*on),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Sequence {
    steps: Vec<Step>,
}

impl Sequence {
    pub fn new(steps: Vec<Step>) -> Self {
        Sequence { steps }
    }

    /// Two seats, a V8, trip computer and navigation.
    pub fn standard() -> Self {
        Sequence::new(vec![
            Step::Seats(2),
            Step::Engine("V8".to_string()),
            Step::TripComputer(true),
            Step::Gps(true),
        ])
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn apply<B: Builder + ?Sized>(&self, builder: &mut B) {
        for step in &self.steps {
            step.apply(builder);
        }
    }
}

/// Replays named sequences against any [`Builder`].
///
/// Holds sequences only, never a builder or a product, so a single director
/// can be shared across threads and construction sessions.
#[derive(Debug, Clone)]
pub struct Director {
    sequences: BTreeMap<String, Sequence>,
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

impl Director {
    /// A director with the built-in `car` and `manual` sequences.
    pub fn new() -> Self {
        let mut sequences = BTreeMap::new();
        sequences.insert(CAR.to_string(), Sequence::standard());
        sequences.insert(MANUAL.to_string(), Sequence::standard());
        Director { sequences }
    }

    /// Register a sequence, replacing any existing one of the same name.
    pub fn with_sequence(mut self, name: impl Into<String>, sequence: Sequence) -> Self {
        self.sequences.insert(name.into(), sequence);
        self
    }

    pub fn sequence(&self, name: &str) -> Option<&Sequence> {
        self.sequences.get(name)
    }

    pub fn sequence_names(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    pub fn build_car<B: Builder + ?Sized>(&self, builder: &mut B) {
        self.replay_builtin(CAR, builder);
    }

    pub fn build_manual<B: Builder + ?Sized>(&self, builder: &mut B) {
        self.replay_builtin(MANUAL, builder);
    }

    /// Replay the sequence registered under `name`.
    ///
    /// An unknown name issues no builder call at all.
    pub fn build<B: Builder + ?Sized>(&self, name: &str, builder: &mut B) -> Result<()> {
        let sequence = self.lookup(name)?;
        debug!(sequence = name, steps = sequence.steps.len(), "replaying sequence");
        sequence.apply(builder);
        Ok(())
    }

    /// Replay `name` through validating setters.
    ///
    /// Stops at the first rejected step. Steps before it stay applied; the
    /// rejected one leaves the product untouched.
    pub fn try_build<B: Builder>(&self, name: &str, builder: &mut Validated<B>) -> Result<()> {
        let sequence = self.lookup(name)?;
        debug!(sequence = name, steps = sequence.steps.len(), "replaying validated sequence");
        for step in &sequence.steps {
            builder.try_apply(step)?;
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<&Sequence> {
        self.sequences
            .get(name)
            .ok_or_else(|| BuildError::UnknownSequence(name.to_string()))
    }

    fn replay_builtin<B: Builder + ?Sized>(&self, name: &str, builder: &mut B) {
        debug!(sequence = name, "replaying sequence");
        match self.sequences.get(name) {
            Some(sequence) => sequence.apply(builder),
            None => Sequence::standard().apply(builder),
        }
    }
}
