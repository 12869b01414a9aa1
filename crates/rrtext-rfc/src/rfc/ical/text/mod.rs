//! English text rendering for recurrence rules.

mod number;
mod tables;
mod translate;

pub use number::number_to_words;
pub use tables::{
    INTERVAL_PHRASES, ORDINAL_WORDS, WEEKDAY_NAMES, interval_phrase, ordinal_word, weekday_name,
};
pub use translate::{Description, Translator, translate};
