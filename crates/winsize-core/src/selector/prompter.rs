use inquire::validator::Validation;
use inquire::{CustomUserError, Select, Text};

use super::errors::SelectorError;

/// Validator for free-text answers: `Err` carries the message to show.
pub type TextValidator = fn(&str) -> Result<(), String>;

/// The interactive prompt engine.
///
/// Each call blocks until the user has answered.
pub trait Prompter {
    /// Let the user pick one of `options`; returns its index.
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize, SelectorError>;

    /// Ask for free text until `validator` accepts it.
    ///
    /// An empty answer takes `default` when one is given.
    fn text(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: TextValidator,
    ) -> Result<String, SelectorError>;
}

/// Terminal prompts rendered by `inquire`.
///
/// The select list filters as the user types.
#[derive(Debug, Default)]
pub struct InquirePrompter {
    page_size: Option<usize>,
}

impl InquirePrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Prompter for InquirePrompter {
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize, SelectorError> {
        let mut prompt = Select::new(message, options.to_vec());
        if let Some(page_size) = self.page_size {
            prompt = prompt.with_page_size(page_size);
        }

        let picked = prompt.raw_prompt()?;
        Ok(picked.index)
    }

    fn text(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: TextValidator,
    ) -> Result<String, SelectorError> {
        let mut prompt = Text::new(message).with_validator(
            move |input: &str| -> Result<Validation, CustomUserError> {
                Ok(match validator(input) {
                    Ok(()) => Validation::Valid,
                    Err(message) => Validation::Invalid(message.into()),
                })
            },
        );
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }

        Ok(prompt.prompt()?)
    }
}
