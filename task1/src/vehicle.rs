use crate::logger::Logger;
use std::io::Result;

/// Anything that can be started and report about it.
pub trait Vehicle {
    fn make(&self) -> &str;
    fn model(&self) -> &str;
    /// Regional specification, e.g. "US Spec".
    fn spec(&self) -> &str;

    /// Start the vehicle and write one INFO line about it to `log`.
    fn start_engine(&self, log: &mut Logger) -> Result<()>;

    /// `"{make} {model} ({spec})"`.
    fn describe(&self) -> String {
        format!("{} {} ({})", self.make(), self.model(), self.spec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    make: String,
    model: String,
    spec: String,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            spec: spec.into(),
        }
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn spec(&self) -> &str {
        &self.spec
    }

    fn start_engine(&self, log: &mut Logger) -> Result<()> {
        log.info(&format!("{}: Engine started", self.describe()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    make: String,
    model: String,
    spec: String,
}

impl Motorcycle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            spec: spec.into(),
        }
    }
}

impl Vehicle for Motorcycle {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn spec(&self) -> &str {
        &self.spec
    }

    fn start_engine(&self, log: &mut Logger) -> Result<()> {
        log.info(&format!("{}: Motor started", self.describe()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::MemWriter;

    #[test]
    fn test_car_and_motorcycle_messages_differ() {
        let (mw, rc) = MemWriter::with_handle();
        let mut log = Logger::new(Box::new(mw), false);

        Car::new("Ford", "Peugeot", "US Spec").start_engine(&mut log).unwrap();
        Motorcycle::new("BMW", "Ducati", "EU Spec")
            .start_engine(&mut log)
            .unwrap();

        let s = String::from_utf8(rc.borrow().clone()).unwrap();
        assert_eq!(
            s,
            "INFO: Ford Peugeot (US Spec): Engine started\n\
             INFO: BMW Ducati (EU Spec): Motor started\n"
        );
    }

    #[test]
    fn test_describe() {
        let car = Car::new("Volkswagen", "Citroen", "EU Spec");
        assert_eq!(car.describe(), "Volkswagen Citroen (EU Spec)");
    }
}
