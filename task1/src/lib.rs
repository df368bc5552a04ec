//! Factory-method demonstration: regional vehicle factories.
//!
//! A [`VehicleFactory`] builds cars and motorcycles; which implementation is
//! picked at runtime decides the regional spec ("US Spec" or "EU Spec") every
//! vehicle carries. Vehicles report through an explicitly passed [`Logger`].

pub mod factory;
pub mod io_adapters;
pub mod logger;
pub mod vehicle;

pub use factory::{
    EuVehicleFactory, Region, UsVehicleFactory, VehicleFactory, create_vehicles, factory_for,
};
pub use io_adapters::MemWriter;
pub use logger::{LogLevel, Logger};
pub use vehicle::{Car, Motorcycle, Vehicle};
