use serde::Serialize;
use sg_pages::{View, render_text};

use crate::cli::OutputFormat;
use crate::ui;

/// Render a page: its view as text, or its state as JSON.
pub fn render<T: Serialize>(
    view: &View,
    state: &T,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(state)?),
        OutputFormat::Raw => Ok(serde_json::to_string(state)?),
    }
}

/// Print a page in the requested format.
pub fn output<T: Serialize>(view: &View, state: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(view, state, format, ui::prefs().color)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sg_core::enums::Tone;
    use sg_pages::{Element, View};

    use super::render;
    use crate::cli::OutputFormat;

    fn sample() -> (View, serde_json::Value) {
        let view = View {
            elements: vec![Element::text("Audit failed", Tone::Danger)],
        };
        let state = json!({"phase": "failed", "result": {"error": "Audit failed"}});
        (view, state)
    }

    #[test]
    fn text_render_uses_view() {
        let (view, state) = sample();
        let out = render(&view, &state, OutputFormat::Text, false).unwrap();
        assert_eq!(out, "Audit failed");
    }

    #[test]
    fn json_render_is_valid_json() {
        let (view, state) = sample();
        let out = render(&view, &state, OutputFormat::Json, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["phase"], "failed");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let (view, state) = sample();
        let out = render(&view, &state, OutputFormat::Raw, true).unwrap();
        assert!(!out.contains('\n'));
        assert!(!out.contains('\u{1b}'));
    }
}
