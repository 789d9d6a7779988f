//! Line-based terminal prompts
//!
//! Each prompt blocks until a complete answer is read. Invalid answers are
//! re-asked; only a closed input stream ends a prompt with an error.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before an answer was given")]
    Closed,
    #[error("nothing to choose from: {0}")]
    NoChoices(String),
}

/// Interactive questions the menu can ask
pub trait Prompter {
    /// Pick one of `choices`, returning its index
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError>;

    /// Free text, re-asked until `validate` accepts it
    fn input(
        &mut self,
        message: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, PromptError>;

    /// Yes/no question; an empty answer takes `default`
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;
}

/// Prompts over any line reader and writer (stdin/stdout in the binary)
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        // Surrounding whitespace is dropped, so a blank search query is rejected.
        Ok(line.trim().to_string())
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.writer, "{} ", question)?;
        self.writer.flush()?;
        self.read_answer()
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError> {
        if choices.is_empty() {
            return Err(PromptError::NoChoices(message.to_string()));
        }

        writeln!(self.writer, "{} {}", "?".green(), message.white())?;
        for (index, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", index + 1, choice)?;
        }

        loop {
            let answer = self.ask(&format!("  Answer (1-{}):", choices.len()))?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => {
                    log::debug!("Rejected selection {:?}", answer);
                    writeln!(
                        self.writer,
                        "{}",
                        format!(">> Please enter a number between 1 and {}", choices.len()).red()
                    )?;
                }
            }
        }
    }

    fn input(
        &mut self,
        message: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, PromptError> {
        loop {
            let answer = self.ask(&format!("{} {}", "?".green(), message.white()))?;
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => writeln!(self.writer, "{}", format!(">> {}", reason).red())?,
            }
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(&format!("{} {} {}", "?".green(), message.white(), hint.dimmed()))?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, "{}", ">> Please answer y or n".red())?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        LinePrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn choices() -> Vec<String> {
        vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()]
    }

    #[test]
    fn test_select_returns_zero_based_index() {
        let mut p = prompter("2\n");
        assert_eq!(p.select("Pick one", &choices()).unwrap(), 1);
        let shown = String::from_utf8(p.writer).unwrap();
        assert!(shown.contains("? Pick one"));
        assert!(shown.contains("  3) Gamma"));
    }

    #[test]
    fn test_select_reprompts_on_bad_answer() {
        let mut p = prompter("0\nbeta\n4\n3\n");
        assert_eq!(p.select("Pick one", &choices()).unwrap(), 2);
        let shown = String::from_utf8(p.writer).unwrap();
        assert_eq!(shown.matches("Please enter a number between 1 and 3").count(), 3);
    }

    #[test]
    fn test_input_validation() {
        let mut p = prompter("\n  \nautomation\n");
        let answer = p
            .input("Search:", &|s: &str| {
                if s.is_empty() {
                    Err("Please enter a search term".to_string())
                } else {
                    Ok(())
                }
            })
            .unwrap();
        assert_eq!(answer, "automation");
        let shown = String::from_utf8(p.writer).unwrap();
        assert_eq!(shown.matches(">> Please enter a search term").count(), 2);
    }

    #[test]
    fn test_confirm_default_and_explicit() {
        let mut p = prompter("\nn\nYES\nmaybe\ny\n");
        assert!(p.confirm("Continue?", true).unwrap());
        assert!(!p.confirm("Continue?", true).unwrap());
        assert!(p.confirm("Continue?", false).unwrap());
        assert!(p.confirm("Continue?", false).unwrap());
    }

    #[test]
    fn test_select_without_choices_fails_without_reading() {
        let mut p = prompter("1\n");
        assert!(matches!(
            p.select("Pick one", &[]),
            Err(PromptError::NoChoices(_))
        ));
        assert!(p.writer.is_empty());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(matches!(
            p.confirm("Continue?", true),
            Err(PromptError::Closed)
        ));
    }
}
