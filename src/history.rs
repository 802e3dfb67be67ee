use std::{fmt, io::Write};

use tracing::debug;

use crate::{Result, Run};

pub trait Undo {
    fn undo(&self, out: &mut dyn Write) -> Result<()>;
}

/// Undo stack of executed actions. No redo.
pub struct History<T> {
    done: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self { done: vec![] }
    }
}

impl<T: Run + Undo + fmt::Display> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, action: T, out: &mut dyn Write) -> Result<()> {
        debug!(%action, depth = self.done.len() + 1, "executing");
        action.run(out)?;
        self.done.push(action);
        Ok(())
    }

    /// Reverses the most recent action and hands it back. An empty history
    /// only reports that there is nothing to undo.
    pub fn undo(&mut self, out: &mut dyn Write) -> Result<Option<T>> {
        match self.done.pop() {
            Some(action) => {
                debug!(%action, depth = self.done.len(), "undoing");
                action.undo(out)?;
                Ok(Some(action))
            }
            None => {
                debug!("undo requested on empty history");
                writeln!(out, "Nothing to undo")?;
                Ok(None)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}
