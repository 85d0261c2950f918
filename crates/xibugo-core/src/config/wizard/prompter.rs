//! Prompting capability used by the setup wizard

use crate::error::XibugoResult;

/// Asks the user questions
///
/// The terminal implementation lives in the CLI; tests script the answers.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Free-text answer, pre-filled with `default`
    fn input(&mut self, message: &str, default: &str) -> XibugoResult<String>;

    /// Index of the chosen option, starting at `default`
    fn select(
        &mut self,
        message: &str,
        options: Vec<String>,
        default: usize,
    ) -> XibugoResult<usize>;

    /// Yes/no answer
    fn confirm(&mut self, message: &str, default: bool) -> XibugoResult<bool>;
}
