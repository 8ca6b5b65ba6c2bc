use std::io::{self, BufRead, Write};
use cn_core::TeamList;
use crate::messages;

pub const QUESTION: &str = "\nWhich team would you like news about?";
pub const INPUT_PROMPT: &str = "\nEnter the number of the team you want news about: ";

/// Asks once for a team number. There is no re-prompt: anything that does
/// not resolve to a listed team yields `None`.
pub struct SelectionPrompt<'a> {
    teams: &'a TeamList,
}

impl<'a> SelectionPrompt<'a> {
    pub fn new(teams: &'a TeamList) -> Self {
        Self { teams }
    }

    /// Maps one line of input to a team. Surrounding whitespace is ignored;
    /// `0`, negatives and out-of-range numbers do not resolve.
    pub fn resolve(&self, line: &str) -> Option<&'a str> {
        let number: usize = line.trim().parse().ok()?;
        self.teams.get(number)
    }

    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<Option<&'a str>> {
        writeln!(out, "{}", QUESTION)?;
        for (idx, team) in self.teams.iter().enumerate() {
            writeln!(out, "{}. {}", idx + 1, team)?;
        }
        write!(out, "{}", INPUT_PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            tracing::debug!("No input before end of stream");
        }

        let choice = self.resolve(&line);
        match choice {
            Some(team) => tracing::info!("✅ Selected {}", team),
            None => {
                tracing::debug!("Could not resolve selection {:?}", line.trim());
                writeln!(out, "{}", messages::INVALID_CHOICE)?;
            }
        }
        Ok(choice)
    }
}
