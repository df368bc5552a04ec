use crate::logger::Logger;
use crate::vehicle::{Car, Motorcycle, Vehicle};
use std::fmt;
use std::io::Result;
use std::str::FromStr;

/// Market a factory builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us,
    Eu,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Us, Region::Eu];

    /// Specification string stamped on every vehicle built for this region.
    pub fn spec(self) -> &'static str {
        match self {
            Region::Us => "US Spec",
            Region::Eu => "EU Spec",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Us => f.write_str("us"),
            Region::Eu => f.write_str("eu"),
        }
    }
}

impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            other => Err(anyhow::anyhow!("unknown region: {} (expected us or eu)", other)),
        }
    }
}

/// Builds the two vehicle families for one region.
pub trait VehicleFactory {
    fn create_car(&self, make: &str, model: &str) -> Car;
    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle;
}

pub struct UsVehicleFactory;

impl VehicleFactory for UsVehicleFactory {
    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, Region::Us.spec())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, Region::Us.spec())
    }
}

pub struct EuVehicleFactory;

impl VehicleFactory for EuVehicleFactory {
    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, Region::Eu.spec())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, Region::Eu.spec())
    }
}

/// Pick the factory for `region` at runtime.
pub fn factory_for(region: Region) -> Box<dyn VehicleFactory> {
    match region {
        Region::Us => Box::new(UsVehicleFactory),
        Region::Eu => Box::new(EuVehicleFactory),
    }
}

/// Build the demo line-up with `factory` and start every vehicle in order.
pub fn create_vehicles(factory: &dyn VehicleFactory, log: &mut Logger) -> Result<()> {
    let lineup: [Box<dyn Vehicle>; 4] = [
        Box::new(factory.create_car("Ford", "Peugeot")),
        Box::new(factory.create_motorcycle("Yamaha", "Honda")),
        Box::new(factory.create_car("Volkswagen", "Citroen")),
        Box::new(factory.create_motorcycle("BMW", "Ducati")),
    ];

    for vehicle in &lineup {
        tracing::debug!(vehicle = %vehicle.describe(), "starting");
        vehicle.start_engine(log)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::MemWriter;

    #[test]
    fn test_factories_stamp_their_region() {
        assert_eq!(UsVehicleFactory.create_car("Ford", "Peugeot").spec(), "US Spec");
        assert_eq!(EuVehicleFactory.create_motorcycle("BMW", "Ducati").spec(), "EU Spec");
    }

    #[test]
    fn test_factory_for_matches_region() {
        for region in Region::ALL {
            let car = factory_for(region).create_car("Ford", "Peugeot");
            assert_eq!(car.spec(), region.spec());
        }
    }

    #[test]
    fn test_region_parsing() {
        assert_eq!("US".parse::<Region>().unwrap(), Region::Us);
        assert_eq!(" eu ".parse::<Region>().unwrap(), Region::Eu);
        assert!("asia".parse::<Region>().is_err());
    }

    #[test]
    fn test_create_vehicles_lineup() {
        let (mw, rc) = MemWriter::with_handle();
        let mut log = Logger::new(Box::new(mw), false);

        create_vehicles(&EuVehicleFactory, &mut log).unwrap();

        let s = String::from_utf8(rc.borrow().clone()).unwrap();
        assert_eq!(
            s,
            "INFO: Ford Peugeot (EU Spec): Engine started\n\
             INFO: Yamaha Honda (EU Spec): Motor started\n\
             INFO: Volkswagen Citroen (EU Spec): Engine started\n\
             INFO: BMW Ducati (EU Spec): Motor started\n"
        );
    }
}
