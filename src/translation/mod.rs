mod client;
mod error;
mod language;
mod translator;

pub use client::{DEFAULT_ENDPOINT, MyMemoryClient};
pub use error::TranslationError;
pub use language::{SOURCE_LANGUAGE, TargetLanguage, print_languages};
pub use translator::Translator;
