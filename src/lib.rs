//! # Car Builder
//!
//! Builder and director construction protocol.
//!
//! - [`Builder`] is the step vocabulary: `reset` plus one setter per attribute.
//! - [`CarBuilder`] and [`CarManualBuilder`] each own one in-progress product
//!   and hand it over through [`Extract::get_product`].
//! - [`Director`] replays named, ordered step sequences against any builder.
//! - [`Validated`] layers attribute checks over a builder without changing
//!   the base contract.
//!
//! ```
//! use car_builder::{CarBuilder, CarManualBuilder, Director, Extract};
//!
//! let director = Director::new();
//!
//! let mut car_builder = CarBuilder::new();
//! director.build_car(&mut car_builder);
//! let car = car_builder.get_product();
//!
//! let mut manual_builder = CarManualBuilder::new();
//! director.build_manual(&mut manual_builder);
//! let manual = manual_builder.get_product();
//!
//! assert_eq!(car.attributes(), manual.attributes());
//! ```

pub mod builder;
pub mod config;
pub mod director;
pub mod error;
pub mod logging;
pub mod product;
pub mod validate;

pub use builder::{Builder, BuilderExt, CarBuilder, CarManualBuilder, Extract};
pub use config::DirectorConfig;
pub use director::{Director, Sequence, Step};
pub use error::{Attribute, BuildError, Result};
pub use product::{Attributes, Car, Manual};
pub use validate::{AttributePolicy, Validated};
