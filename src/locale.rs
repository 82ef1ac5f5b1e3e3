//! Static interface strings.
//!
//! The locale is chosen once from configuration and its [`Strings`] table is
//! handed to the view. Only the title is translated; everything else falls
//! back to English.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::translation::TargetLanguage;

/// Interface language of the static strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Or,
}

impl Locale {
    pub const ALL: [Self; 3] = [Self::En, Self::Hi, Self::Or];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Or => "or",
        }
    }

    pub const fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Hi => &HI,
            Self::Or => &OR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every static string the panel shows.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_label: &'static str,
    pub input_placeholder: &'static str,
    pub shortcut_hint: &'static str,
    pub translate: &'static str,
    pub translating: &'static str,
    pub hindi_label: &'static str,
    pub hindi_placeholder: &'static str,
    pub odia_label: &'static str,
    pub odia_placeholder: &'static str,
    pub footer: &'static str,
}

impl Strings {
    pub const fn output_label(&self, target: TargetLanguage) -> &'static str {
        match target {
            TargetLanguage::Hindi => self.hindi_label,
            TargetLanguage::Odia => self.odia_label,
        }
    }

    pub const fn output_placeholder(&self, target: TargetLanguage) -> &'static str {
        match target {
            TargetLanguage::Hindi => self.hindi_placeholder,
            TargetLanguage::Odia => self.odia_placeholder,
        }
    }
}

const EN: Strings = Strings {
    title: "English → Hindi + Odia Translator",
    subtitle: "Translate English text to Hindi and Odia instantly",
    input_label: "English Text",
    input_placeholder: "Enter English text here...",
    shortcut_hint: "Press Enter to translate",
    translate: "Translate →",
    translating: "Translating...",
    hindi_label: "Hindi Translation (हिंदी)",
    hindi_placeholder: "Hindi translation will appear here...",
    odia_label: "Odia Translation (ଓଡିଆ)",
    odia_placeholder: "Odia translation will appear here...",
    footer: "Powered by MyMemory Translation API",
};

const HI: Strings = Strings {
    title: "अंग्रेज़ी → हिंदी + उड़िया अनुवादक",
    ..EN
};

const OR: Strings = Strings {
    title: "ଇଂରାଜୀ → ହିନ୍ଦୀ + ଓଡିଆ ଅନୁବାଦକ",
    ..EN
};
