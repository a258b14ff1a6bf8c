//! Builder capability and the two concrete builders.
//!
//! Every builder owns exactly one in-progress product at all times. Setters
//! overwrite a single attribute of it; `get_product` hands it to the caller
//! and leaves a fresh default product in its place.

use std::mem;

use tracing::debug;

use crate::product::{Car, Manual};

/// The construction-step vocabulary shared by every builder.
///
/// Object safe, so a director can drive `&mut dyn Builder`. No step
/// validates its input.
pub trait Builder {
    /// Discard the in-progress product and start over from defaults.
    fn reset(&mut self);
    fn set_seats(&mut self, seats: i32);
    fn set_engine(&mut self, engine: &str);
    fn set_trip_computer(&mut self, trip_computer: bool);
    fn set_gps(&mut self, gps: bool);
}

/// Extraction of the finished product.
///
/// Kept apart from [`Builder`] because each builder yields its own product
/// type; the director only ever sees the capability side.
pub trait Extract: Builder {
    type Product;

    /// Return the in-progress product and reset the builder.
    ///
    /// Always succeeds. With no setter calls since the last reset the
    /// result is an all-defaults product.
    fn get_product(&mut self) -> Self::Product;
}

// Chaining sugar over the capability steps for direct client use.
pub trait BuilderExt: Builder {
    fn seats(&mut self, seats: i32) -> &mut Self {
        self.set_seats(seats);
        self
    }

    fn engine(&mut self, engine: &str) -> &mut Self {
        self.set_engine(engine);
        self
    }

    fn trip_computer(&mut self, trip_computer: bool) -> &mut Self {
        self.set_trip_computer(trip_computer);
        self
    }

    fn gps(&mut self, gps: bool) -> &mut Self {
        self.set_gps(gps);
        self
    }
}

impl<B: Builder> BuilderExt for B {}

//==============================================================================
// Car
//==============================================================================

#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl CarBuilder {
    pub fn new() -> Self {
        CarBuilder { car: Car::default() }
    }
}

impl Builder for CarBuilder {
    fn reset(&mut self) {
        self.car = Car::default();
    }

    fn set_seats(&mut self, seats: i32) {
        self.car.seats = seats;
    }

    fn set_engine(&mut self, engine: &str) {
        self.car.engine = engine.to_string();
    }

    fn set_trip_computer(&mut self, trip_computer: bool) {
        self.car.trip_computer = trip_computer;
    }

    fn set_gps(&mut self, gps: bool) {
        self.car.gps = gps;
    }
}

impl Extract for CarBuilder {
    type Product = Car;

    fn get_product(&mut self) -> Car {
        // take() swaps in Car::default(), which is exactly what reset() does
        let car = mem::take(&mut self.car);
        debug!(product = "car", %car, "extracted product");
        car
    }
}

//==============================================================================
// Manual
//==============================================================================

#[derive(Debug, Default)]
pub struct CarManualBuilder {
    manual: Manual,
}

impl CarManualBuilder {
    pub fn new() -> Self {
        CarManualBuilder {
            manual: Manual::default(),
        }
    }
}

impl Builder for CarManualBuilder {
    fn reset(&mut self) {
        self.manual = Manual::default();
    }

    fn set_seats(&mut self, seats: i32) {
        self.manual.seats = seats;
    }

    fn set_engine(&mut self, engine: &str) {
        self.manual.engine = engine.to_string();
    }

    fn set_trip_computer(&mut self, trip_computer: bool) {
        self.manual.trip_computer = trip_computer;
    }

    fn set_gps(&mut self, gps: bool) {
        self.manual.gps = gps;
    }
}

impl Extract for CarManualBuilder {
    type Product = Manual;

    fn get_product(&mut self) -> Manual {
        let manual = mem::take(&mut self.manual);
        debug!(product = "manual", %manual, "extracted product");
        manual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Attributes;
    use itertools::Itertools;

    #[derive(Debug, Clone)]
    enum Call {
        Seats(i32),
        Engine(&'static str),
        Trip(bool),
        Gps(bool),
    }

    fn apply(builder: &mut dyn Builder, calls: &[Call]) {
        for call in calls {
            match call {
                Call::Seats(n) => builder.set_seats(*n),
                Call::Engine(e) => builder.set_engine(e),
                Call::Trip(t) => builder.set_trip_computer(*t),
                Call::Gps(g) => builder.set_gps(*g),
            }
        }
    }

    fn full() -> Attributes {
        Attributes {
            seats: 2,
            engine: "V8".into(),
            trip_computer: true,
            gps: true,
        }
    }

    #[test]
    fn test_new_builder_yields_defaults() {
        let mut builder = CarBuilder::new();
        assert_eq!(builder.get_product(), Car::default());

        let mut builder = CarManualBuilder::new();
        assert_eq!(builder.get_product(), Manual::default());
    }

    #[test]
    fn test_all_setters() {
        let mut builder = CarBuilder::new();
        builder.set_seats(2);
        builder.set_engine("V8");
        builder.set_trip_computer(true);
        builder.set_gps(true);
        let car = builder.get_product();
        assert_eq!(
            car,
            Car {
                seats: 2,
                engine: "V8".into(),
                trip_computer: true,
                gps: true,
            }
        );
    }

    #[test]
    fn test_last_write_wins() {
        let mut builder = CarManualBuilder::new();
        apply(
            &mut builder,
            &[
                Call::Seats(4),
                Call::Engine("I4"),
                Call::Seats(7),
                Call::Gps(true),
                Call::Gps(false),
                Call::Engine("V6"),
            ],
        );
        let manual = builder.get_product();
        assert_eq!(manual.seats, 7);
        assert_eq!(manual.engine, "V6");
        assert!(!manual.trip_computer);
        assert!(!manual.gps);
    }

    #[test]
    fn test_setter_touches_one_attribute() {
        let mut builder = CarBuilder::new();
        builder.set_engine("W16");
        let car = builder.get_product();
        assert_eq!(
            car,
            Car {
                engine: "W16".into(),
                ..Car::default()
            }
        );
    }

    #[test]
    fn test_extraction_resets() {
        let mut builder = CarBuilder::new();
        builder.set_seats(5);
        builder.set_gps(true);
        let first = builder.get_product();
        assert_eq!(first.seats, 5);

        let second = builder.get_product();
        assert_eq!(second, Car::default());
    }

    #[test]
    fn test_extracted_product_is_detached() {
        let mut builder = CarBuilder::new();
        builder.set_seats(3);
        let car = builder.get_product();

        builder.set_seats(9);
        assert_eq!(car.seats, 3);
        assert_eq!(builder.get_product().seats, 9);
    }

    #[test]
    fn test_reset_discards_pending_steps() {
        let mut builder = CarManualBuilder::new();
        builder.set_seats(2);
        builder.set_engine("V8");
        builder.reset();
        assert_eq!(builder.get_product(), Manual::default());

        builder.set_seats(2);
        builder.reset();
        builder.set_gps(true);
        let manual = builder.get_product();
        assert_eq!(manual.seats, 0);
        assert!(manual.gps);
    }

    #[test]
    fn test_setter_idempotent() {
        let mut once = CarBuilder::new();
        once.set_seats(2);

        let mut twice = CarBuilder::new();
        twice.set_seats(2);
        twice.set_seats(2);

        assert_eq!(once.get_product(), twice.get_product());
    }

    #[test]
    fn test_order_independent_across_attributes() {
        let calls = [
            Call::Seats(2),
            Call::Engine("V8"),
            Call::Trip(true),
            Call::Gps(true),
        ];

        for perm in calls.iter().cloned().permutations(calls.len()) {
            let mut car_builder = CarBuilder::new();
            apply(&mut car_builder, &perm);
            assert_eq!(car_builder.get_product().attributes(), full(), "{perm:?}");

            let mut manual_builder = CarManualBuilder::new();
            apply(&mut manual_builder, &perm);
            assert_eq!(manual_builder.get_product().attributes(), full(), "{perm:?}");
        }
    }

    #[test]
    fn test_no_validation_in_base_contract() {
        let mut builder = CarBuilder::new();
        builder.set_seats(-4);
        builder.set_engine("");
        let car = builder.get_product();
        assert_eq!(car.seats, -4);
        assert_eq!(car.engine, "");
    }

    #[test]
    fn test_chaining_helpers() {
        let mut builder = CarManualBuilder::new();
        builder.seats(2).engine("V8").trip_computer(true).gps(true);
        assert_eq!(builder.get_product().attributes(), full());
    }
}
