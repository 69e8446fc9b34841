use crate::constants::{DELETE_DELAY_MS, HOLD_DELAY_MS, NEXT_PHRASE_DELAY_MS, TYPE_DELAY_MS};
use crate::error::FolioError;

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    pub hold_delay_ms: u32,
    pub next_phrase_delay_ms: u32,
}

impl TypewriterConfig {
    pub fn new<I, P>(phrases: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            type_delay_ms: TYPE_DELAY_MS,
            delete_delay_ms: DELETE_DELAY_MS,
            hold_delay_ms: HOLD_DELAY_MS,
            next_phrase_delay_ms: NEXT_PHRASE_DELAY_MS,
        }
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        if self.phrases.is_empty() || self.phrases.iter().any(String::is_empty) {
            return Err(FolioError::NoPhrases);
        }
        Ok(())
    }
}

/// Output of one step: the text to show and how long to wait before the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Types a phrase one character at a time, holds, erases it, then moves on
/// to the next phrase, wrapping forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Result<Self, FolioError> {
        config.validate()?;
        Ok(Self {
            config,
            phrase: 0,
            chars: 0,
            deleting: false,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn step(&mut self) -> TypeStep {
        let current = &self.config.phrases[self.phrase];
        let len = current.chars().count();

        let mut delay_ms = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            self.config.delete_delay_ms
        } else {
            self.chars = (self.chars + 1).min(len);
            self.config.type_delay_ms
        };
        let text: String = current.chars().take(self.chars).collect();

        if !self.deleting && self.chars == len {
            self.deleting = true;
            delay_ms = self.config.hold_delay_ms;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.config.phrases.len();
            delay_ms = self.config.next_phrase_delay_ms;
        }

        TypeStep { text, delay_ms }
    }
}
