//! Source and target languages supported by the translator.

use std::fmt;

use crate::ui::Style;

/// Language code of every source text.
pub const SOURCE_LANGUAGE: &str = "en";

/// A language the input is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    Hindi,
    Odia,
}

impl TargetLanguage {
    /// All targets, in the order they are translated.
    pub const ALL: [Self; 2] = [Self::Hindi, Self::Odia];

    /// Language code sent in the `langpair` parameter.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::Odia => "or",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Hindi => "Hindi",
            Self::Odia => "Odia",
        }
    }

    /// Name of the language written in its own script.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Hindi => "हिंदी",
            Self::Odia => "ଓଡିଆ",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Prints the source language and every target language to stdout.
pub fn print_languages() {
    print!("{}", render_languages());
}

fn render_languages() -> String {
    let mut out = format!("{}\n", Style::header("Source language"));
    out.push_str(&format!(
        "  {} {}\n\n",
        padded_code(SOURCE_LANGUAGE),
        Style::secondary("English")
    ));
    out.push_str(&format!("{}\n", Style::header("Target languages")));
    for target in TargetLanguage::ALL {
        out.push_str(&format!(
            "  {} {} ({})\n",
            padded_code(target.code()),
            Style::secondary(target.english_name()),
            target.native_name()
        ));
    }
    out
}

/// Width applies to the bare code, not to the escape sequences around it.
fn padded_code(code: &str) -> String {
    Style::code(format!("{code:3}"))
}
