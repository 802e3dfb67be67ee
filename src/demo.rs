//! The fixed demonstration sequence run by the binary.

use std::{
    io::{BufRead, Write},
    rc::Rc,
};

use crate::{
    header, shared, Action, ChatRoom, Condiments, Door, Drink, History, Light, Mediator, Prompt,
    Result, Thermostat, Tv, User,
};

/// Runs the three sections in order. `input` answers the condiment prompts.
pub fn run(input: impl BufRead, out: &mut dyn Write, colored: bool) -> Result<()> {
    header(out, "Command pattern", colored)?;
    smart_home(out)?;

    writeln!(out)?;
    header(out, "Template method pattern", colored)?;
    beverages(&mut Prompt::new(input), out)?;

    writeln!(out)?;
    header(out, "Mediator pattern", colored)?;
    chat(out)?;

    out.flush()?;
    Ok(())
}

/// Four actions, then one undo more than there is history for.
pub fn smart_home(out: &mut dyn Write) -> Result<()> {
    let light = shared(Light::default());
    let door = shared(Door::default());
    let thermostat = shared(Thermostat::default());
    let tv = shared(Tv::default());

    let mut history = History::new();
    history.execute(Action::LightOn(Rc::clone(&light)), out)?;
    history.execute(Action::DoorOpen(Rc::clone(&door)), out)?;
    history.execute(Action::TempUp(Rc::clone(&thermostat)), out)?;
    history.execute(Action::TvOn(Rc::clone(&tv)), out)?;

    for _ in 0..=history.len() {
        history.undo(out)?;
    }
    Ok(())
}

pub fn beverages(hook: &mut dyn Condiments, out: &mut dyn Write) -> Result<()> {
    for drink in Drink::ALL {
        drink.get().prepare(hook, out)?;
    }
    Ok(())
}

pub fn chat(out: &mut dyn Write) -> Result<()> {
    let room = ChatRoom::new();
    let alice = User::new(room.clone(), "Alice");
    let bob = User::new(room.clone(), "Bob");
    let eve = User::new(room.clone(), "Eve");

    room.register(&alice, out)?;
    room.register(&bob, out)?;
    room.register(&eve, out)?;

    alice.send("Hello everyone!", out)?;
    bob.send("Hi, Alice!", out)?;
    eve.send("How are you?", out)?;
    Ok(())
}
