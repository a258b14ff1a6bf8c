//! The two buildable products.
//!
//! `Car` and `Manual` share the same attribute shape but are distinct types:
//! a manual describing a car is not a car. Use [`Attributes`] when values
//! need comparing across the two.

use std::fmt;

/// Type-erased view of a product's attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    pub seats: i32,
    pub engine: String,
    pub trip_computer: bool,
    pub gps: bool,
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seats={}, engine={:?}, trip_computer={}, gps={}",
            self.seats, self.engine, self.trip_computer, self.gps
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Car {
    pub seats: i32,
    pub engine: String,
    pub trip_computer: bool,
    pub gps: bool,
}

impl Car {
    pub fn attributes(&self) -> Attributes {
        Attributes {
            seats: self.seats,
            engine: self.engine.clone(),
            trip_computer: self.trip_computer,
            gps: self.gps,
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car {{ {} }}", self.attributes())
    }
}

/// Owner's manual for a car configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manual {
    pub seats: i32,
    pub engine: String,
    pub trip_computer: bool,
    pub gps: bool,
}

impl Manual {
    pub fn attributes(&self) -> Attributes {
        Attributes {
            seats: self.seats,
            engine: self.engine.clone(),
            trip_computer: self.trip_computer,
            gps: self.gps,
        }
    }
}

impl fmt::Display for Manual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Manual {{ {} }}", self.attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let car = Car::default();
        assert_eq!(car.seats, 0);
        assert_eq!(car.engine, "");
        assert!(!car.trip_computer);
        assert!(!car.gps);
        assert_eq!(Manual::default().attributes(), Attributes::default());
    }

    #[test]
    fn test_display() {
        let car = Car {
            seats: 2,
            engine: "V8".into(),
            trip_computer: true,
            gps: false,
        };
        assert_eq!(
            car.to_string(),
            "Car { seats=2, engine=\"V8\", trip_computer=true, gps=false }"
        );
    }
}
