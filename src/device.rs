use std::{cell::RefCell, io::Write, rc::Rc};

use crate::Result;

pub const DEFAULT_TEMPERATURE: i32 = 22;

/// Handle to a device that several actions may target.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(device: T) -> Shared<T> {
    Rc::new(RefCell::new(device))
}

#[derive(Debug, Default)]
pub struct Light {
    on: bool,
}

#[derive(Debug, Default)]
pub struct Door {
    open: bool,
}

#[derive(Debug)]
pub struct Thermostat {
    temperature: i32,
}

#[derive(Debug, Default)]
pub struct Tv {
    on: bool,
}

impl Light {
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn on(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = true;
        writeln!(out, "Light is on")?;
        Ok(())
    }

    pub fn off(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = false;
        writeln!(out, "Light is off")?;
        Ok(())
    }
}

impl Door {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, out: &mut dyn Write) -> Result<()> {
        self.open = true;
        writeln!(out, "Door is open")?;
        Ok(())
    }

    pub fn close(&mut self, out: &mut dyn Write) -> Result<()> {
        self.open = false;
        writeln!(out, "Door is closed")?;
        Ok(())
    }
}

impl Default for Thermostat {
    fn default() -> Self {
        Self { temperature: DEFAULT_TEMPERATURE }
    }
}

impl Thermostat {
    pub fn with_temperature(temperature: i32) -> Self {
        Self { temperature }
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn increase(&mut self, out: &mut dyn Write) -> Result<()> {
        self.temperature = self.temperature.saturating_add(1);
        writeln!(out, "Temperature raised to {}°C", self.temperature)?;
        Ok(())
    }

    pub fn decrease(&mut self, out: &mut dyn Write) -> Result<()> {
        self.temperature = self.temperature.saturating_sub(1);
        writeln!(out, "Temperature lowered to {}°C", self.temperature)?;
        Ok(())
    }
}

impl Tv {
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn on(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = true;
        writeln!(out, "TV is on")?;
        Ok(())
    }

    pub fn off(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = false;
        writeln!(out, "TV is off")?;
        Ok(())
    }
}
