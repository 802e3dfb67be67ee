use std::{fmt, io::Write, rc::Rc};

use crate::{Door, Light, Result, Shared, Thermostat, Tv, Undo};

pub trait Run {
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

/// A reversible operation bound to the device it acts on.
#[derive(Clone)]
pub enum Action {
    LightOn(Shared<Light>),
    LightOff(Shared<Light>),
    DoorOpen(Shared<Door>),
    DoorClose(Shared<Door>),
    TempUp(Shared<Thermostat>),
    TempDown(Shared<Thermostat>),
    TvOn(Shared<Tv>),
    TvOff(Shared<Tv>),
}

impl Action {
    /// The action whose forward effect cancels this one, on the same device.
    pub fn inverse(&self) -> Action {
        match self {
            Self::LightOn(light) => Self::LightOff(Rc::clone(light)),
            Self::LightOff(light) => Self::LightOn(Rc::clone(light)),
            Self::DoorOpen(door) => Self::DoorClose(Rc::clone(door)),
            Self::DoorClose(door) => Self::DoorOpen(Rc::clone(door)),
            Self::TempUp(thermostat) => Self::TempDown(Rc::clone(thermostat)),
            Self::TempDown(thermostat) => Self::TempUp(Rc::clone(thermostat)),
            Self::TvOn(tv) => Self::TvOff(Rc::clone(tv)),
            Self::TvOff(tv) => Self::TvOn(Rc::clone(tv)),
        }
    }
}

impl Run for Action {
    fn run(&self, out: &mut dyn Write) -> Result<()> {
        match self {
            Self::LightOn(light) => light.borrow_mut().on(out),
            Self::LightOff(light) => light.borrow_mut().off(out),
            Self::DoorOpen(door) => door.borrow_mut().open(out),
            Self::DoorClose(door) => door.borrow_mut().close(out),
            Self::TempUp(thermostat) => thermostat.borrow_mut().increase(out),
            Self::TempDown(thermostat) => thermostat.borrow_mut().decrease(out),
            Self::TvOn(tv) => tv.borrow_mut().on(out),
            Self::TvOff(tv) => tv.borrow_mut().off(out),
        }
    }
}

impl Undo for Action {
    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        self.inverse().run(out)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LightOn(_) => "light-on",
            Self::LightOff(_) => "light-off",
            Self::DoorOpen(_) => "door-open",
            Self::DoorClose(_) => "door-close",
            Self::TempUp(_) => "temp-up",
            Self::TempDown(_) => "temp-down",
            Self::TvOn(_) => "tv-on",
            Self::TvOff(_) => "tv-off",
        };
        f.write_str(name)
    }
}
