use async_trait::async_trait;

use super::{TargetLanguage, TranslationError};

/// Something that turns English text into one target language.
///
/// Futures are not required to be `Send`: the view drives every call from a
/// single thread and awaits them in place.
#[async_trait(?Send)]
pub trait Translator {
    /// Translates `text` from English into `target`.
    ///
    /// The text is sent as given; callers check that it is non-blank.
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError>;
}
