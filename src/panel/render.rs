//! Text rendering of the panel.
//!
//! Everything returns a `String` so the interactive and one-shot modes can
//! print it and tests can inspect it.

use std::fmt::Write;

use crate::locale::Strings;
use crate::session::{Control, ViewState};
use crate::translation::TargetLanguage;
use crate::ui::Style;

pub fn render_header(strings: &Strings) -> String {
    format!(
        "{}\n{}\n",
        Style::header(strings.title),
        Style::secondary(strings.subtitle)
    )
}

/// The activation control: its label, greyed out, or the busy label.
pub fn render_control(control: Control, strings: &Strings) -> String {
    match control {
        Control::Enabled => Style::button(strings.translate),
        Control::Disabled => Style::button_disabled(strings.translate),
        Control::Busy => Style::button_disabled(format!("… {}", strings.translating)),
    }
}

/// Both output regions, showing the placeholder while one is empty.
pub fn render_outputs(state: &ViewState, strings: &Strings) -> String {
    let mut out = String::new();
    for target in TargetLanguage::ALL {
        let text = state.output(target);
        let _ = writeln!(out, "{}", Style::label(strings.output_label(target)));
        if text.is_empty() {
            let _ = writeln!(out, "  {}", Style::secondary(strings.output_placeholder(target)));
        } else {
            for line in text.lines() {
                let _ = writeln!(out, "  {}", Style::value(line));
            }
        }
        out.push('\n');
    }
    out
}

/// Message of the last failure, when the view keeps one.
pub fn render_error(state: &ViewState) -> Option<String> {
    state
        .last_error
        .as_deref()
        .map(|message| format!("{} {message}", Style::error("Error:")))
}

/// The whole panel: title, input region, control, outputs and footer.
pub fn render_panel(state: &ViewState, strings: &Strings) -> String {
    let mut out = render_header(strings);
    out.push('\n');

    let _ = writeln!(out, "{}", Style::label(strings.input_label));
    if state.input.is_empty() {
        let _ = writeln!(out, "  {}", Style::secondary(strings.input_placeholder));
    } else {
        for line in state.input.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }
    let _ = writeln!(out, "{}\n", Style::hint(strings.shortcut_hint));

    let _ = writeln!(out, "{}\n", render_control(state.control(), strings));

    out.push_str(&render_outputs(state, strings));

    if let Some(error) = render_error(state) {
        let _ = writeln!(out, "{error}\n");
    }

    let _ = writeln!(out, "{}", Style::secondary(strings.footer));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::session::Phase;

    #[test]
    fn test_outputs_show_placeholders_when_empty() {
        let strings = Locale::En.strings();
        let rendered = render_outputs(&ViewState::default(), strings);

        assert!(rendered.contains("Hindi translation will appear here..."));
        assert!(rendered.contains("Odia translation will appear here..."));
    }

    #[test]
    fn test_outputs_show_translations() {
        let state = ViewState {
            hindi: "नमस्ते".to_string(),
            odia: "ନମସ୍କାର".to_string(),
            ..ViewState::default()
        };
        let rendered = render_outputs(&state, Locale::En.strings());

        assert!(rendered.contains("नमस्ते"));
        assert!(rendered.contains("ନମସ୍କାର"));
        assert!(!rendered.contains("will appear here"));
        assert!(rendered.find("Hindi Translation") < rendered.find("Odia Translation"));
    }

    #[test]
    fn test_busy_control_replaces_label() {
        let strings = Locale::En.strings();
        let busy = render_control(Control::Busy, strings);

        assert!(busy.contains("Translating..."));
        assert!(!busy.contains("Translate →"));
    }

    #[test]
    fn test_panel_uses_locale_title() {
        let state = ViewState {
            input: "Hello".to_string(),
            phase: Phase::Idle,
            ..ViewState::default()
        };
        let rendered = render_panel(&state, Locale::Or.strings());

        assert!(rendered.contains("ଇଂରାଜୀ → ହିନ୍ଦୀ + ଓଡିଆ ଅନୁବାଦକ"));
        assert!(rendered.contains("Hello"));
        assert!(rendered.contains("Powered by MyMemory Translation API"));
    }

    #[test]
    fn test_panel_shows_surfaced_error() {
        let state = ViewState {
            last_error: Some("Hindi translation failed: boom".to_string()),
            ..ViewState::default()
        };

        assert!(render_error(&ViewState::default()).is_none());
        assert!(render_panel(&state, Locale::En.strings()).contains("Hindi translation failed: boom"));
    }
}
