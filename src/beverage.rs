use std::io::{BufRead, Write};

use tracing::debug;

use crate::Result;

/// Decides whether condiments go into the cup.
pub trait Condiments {
    fn wants_condiments(&mut self, out: &mut dyn Write) -> Result<bool>;
}

/// Asks on the console. Only an exact `y` counts as yes.
pub struct Prompt<R> {
    input: R,
}

/// Answers the same way every time without asking.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub bool);

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Condiments for Prompt<R> {
    fn wants_condiments(&mut self, out: &mut dyn Write) -> Result<bool> {
        write!(out, "Add condiments (y/n)? ")?;
        out.flush()?;

        // Raw bytes: an undecodable answer is just another "no".
        let mut answer = Vec::new();
        if self.input.read_until(b'\n', &mut answer)? == 0 {
            debug!("input closed, skipping condiments");
            return Ok(false);
        }
        while matches!(answer.last(), Some(b'\r' | b'\n')) {
            answer.pop();
        }
        Ok(answer == b"y")
    }
}

impl Condiments for Fixed {
    fn wants_condiments(&mut self, _out: &mut dyn Write) -> Result<bool> {
        Ok(self.0)
    }
}

fn boil_water(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Boiling water")?;
    Ok(())
}

fn pour(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Pouring into cup")?;
    Ok(())
}

pub trait Beverage {
    fn name(&self) -> &'static str;
    fn brew(&self, out: &mut dyn Write) -> Result<()>;
    fn add_condiments(&self, out: &mut dyn Write) -> Result<()>;

    fn wants_condiments(&self, hook: &mut dyn Condiments, out: &mut dyn Write) -> Result<bool> {
        hook.wants_condiments(out)
    }

    /// Boil, brew, pour, then condiments if the hook agrees. The order never
    /// changes; only `brew` and `add_condiments` differ between drinks.
    fn prepare(&self, hook: &mut dyn Condiments, out: &mut dyn Write) -> Result<()> {
        debug!(beverage = self.name(), "preparing");
        boil_water(out)?;
        self.brew(out)?;
        pour(out)?;
        if self.wants_condiments(hook, out)? {
            self.add_condiments(out)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drink {
    Tea,
    Coffee,
    HotChocolate,
}

impl Drink {
    pub const ALL: [Drink; 3] = [Drink::Tea, Drink::Coffee, Drink::HotChocolate];

    pub fn get(&self) -> Box<dyn Beverage> {
        match self {
            Self::Tea => Box::new(Tea),
            Self::Coffee => Box::new(Coffee),
            Self::HotChocolate => Box::new(HotChocolate),
        }
    }
}

pub struct Tea;
pub struct Coffee;
pub struct HotChocolate;

impl Beverage for Tea {
    fn name(&self) -> &'static str {
        "tea"
    }

    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Steeping the tea")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding lemon")?;
        Ok(())
    }
}

impl Beverage for Coffee {
    fn name(&self) -> &'static str {
        "coffee"
    }

    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Brewing the coffee")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding sugar and milk")?;
        Ok(())
    }
}

impl Beverage for HotChocolate {
    fn name(&self) -> &'static str {
        "hot chocolate"
    }

    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Melting the chocolate")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding whipped cream")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prepare(drink: Drink, hook: &mut dyn Condiments) -> Vec<String> {
        let mut out = Vec::new();
        drink.get().prepare(hook, &mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(String::from).collect()
    }

    #[test]
    fn tea_with_condiments() {
        assert_eq!(
            prepare(Drink::Tea, &mut Fixed(true)),
            ["Boiling water", "Steeping the tea", "Pouring into cup", "Adding lemon"]
        );
    }

    #[test]
    fn condiments_step_only_when_hook_agrees() {
        for drink in Drink::ALL {
            let with = prepare(drink, &mut Fixed(true));
            let without = prepare(drink, &mut Fixed(false));

            assert_eq!(with.len(), 4);
            assert_eq!(without.len(), 3);
            assert_eq!(with[..3], without[..]);
            assert_eq!(without[0], "Boiling water");
            assert_eq!(without[2], "Pouring into cup");
        }
    }

    #[test]
    fn prompt_accepts_only_exact_y() {
        let mut prompt = Prompt::new(Cursor::new("y\nyes\nY\n\ny\r\n"));
        let mut out = Vec::new();

        let answers: Vec<bool> = (0..5)
            .map(|_| prompt.wants_condiments(&mut out).unwrap())
            .collect();

        assert_eq!(answers, [true, false, false, false, true]);
        assert_eq!(String::from_utf8(out).unwrap(), "Add condiments (y/n)? ".repeat(5));
    }

    #[test]
    fn prompt_declines_undecodable_answer() {
        let mut prompt = Prompt::new(Cursor::new(b"\xff\n".to_vec()));
        let mut out = Vec::new();
        assert!(!prompt.wants_condiments(&mut out).unwrap());
    }

    #[test]
    fn prompt_declines_once_input_is_exhausted() {
        let mut prompt = Prompt::new(Cursor::new(""));
        let mut out = Vec::new();
        assert!(!prompt.wants_condiments(&mut out).unwrap());
    }

    #[test]
    fn prompted_coffee_asks_between_pour_and_condiments() {
        let mut prompt = Prompt::new(Cursor::new("y\n"));
        let mut out = Vec::new();
        Drink::Coffee.get().prepare(&mut prompt, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Boiling water\nBrewing the coffee\nPouring into cup\nAdd condiments (y/n)? Adding sugar and milk\n"
        );
    }

    struct AlwaysSweet;

    impl Beverage for AlwaysSweet {
        fn name(&self) -> &'static str {
            "always sweet"
        }

        fn brew(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Brewing")?;
            Ok(())
        }

        fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Adding honey")?;
            Ok(())
        }

        fn wants_condiments(&self, _hook: &mut dyn Condiments, _out: &mut dyn Write) -> Result<bool> {
            Ok(true)
        }
    }

    #[test]
    fn overridden_hook_ignores_strategy() {
        let mut out = Vec::new();
        AlwaysSweet.prepare(&mut Fixed(false), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Adding honey\n"));
    }
}
