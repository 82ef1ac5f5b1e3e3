use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::config::ResolveOptions;
use crate::locale::Locale;

#[derive(Parser, Debug)]
#[command(name = "itl")]
#[command(about = "Translate English text to Hindi and Odia")]
#[command(version)]
pub struct Args {
    /// English text to translate (reads --file or stdin if not provided)
    pub text: Option<String>,

    /// File containing the English text
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub translator: TranslatorArgs,

    /// Log debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every mode that translates.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TranslatorArgs {
    /// Translation API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Interface locale for static strings
    #[arg(short = 'l', long, value_enum)]
    pub locale: Option<Locale>,

    /// Request Hindi and Odia at the same time
    #[arg(short = 'p', long)]
    pub parallel: bool,

    /// Show translation failures instead of only logging them
    #[arg(long)]
    pub show_errors: bool,
}

impl TranslatorArgs {
    /// Fills options missing here from `outer`, for flags given before a subcommand.
    #[must_use]
    pub fn or(self, outer: Self) -> Self {
        Self {
            endpoint: self.endpoint.or(outer.endpoint),
            locale: self.locale.or(outer.locale),
            parallel: self.parallel || outer.parallel,
            show_errors: self.show_errors || outer.show_errors,
        }
    }
}

impl From<TranslatorArgs> for ResolveOptions {
    fn from(args: TranslatorArgs) -> Self {
        Self {
            endpoint: args.endpoint,
            locale: args.locale,
            parallel: args.parallel,
            show_errors: args.show_errors,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive translation panel
    Panel {
        #[command(flatten)]
        translator: TranslatorArgs,
    },
    /// List the source and target languages
    Languages,
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
