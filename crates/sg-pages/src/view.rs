//! Renderable output of a page.
//!
//! Pages build a [`View`] out of a handful of tagged elements; the text
//! renderer turns it into terminal lines with optional ANSI color.

use serde::Serialize;
use sg_core::enums::Tone;

/// One row of the checklist task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub task: String,
    pub badge: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Heading { text: String },
    Text { text: String, tone: Tone },
    /// Bulleted strings, order preserved.
    List { items: Vec<String> },
    /// Verbatim multi-line text, e.g. pretty-printed JSON.
    Preformatted { text: String },
    /// Always rendered, even when empty.
    Tasks { rows: Vec<TaskRow> },
}

impl Element {
    #[must_use]
    pub fn text(text: impl Into<String>, tone: Tone) -> Self {
        Self::Text {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub elements: Vec<Element>,
}

impl View {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// All text content, one element per line, without color.
    #[must_use]
    pub fn plain_text(&self) -> String {
        render_text(self, false)
    }
}

/// Render a view as terminal text.
#[must_use]
pub fn render_text(view: &View, color: bool) -> String {
    let mut lines = Vec::new();
    for element in &view.elements {
        match element {
            Element::Heading { text } => {
                lines.push(text.clone());
                lines.push("-".repeat(text.chars().count()));
            }
            Element::Text { text, tone } => lines.push(paint(text, *tone, color)),
            Element::List { items } => {
                lines.extend(items.iter().map(|item| format!("  - {item}")));
            }
            Element::Preformatted { text } => {
                lines.extend(text.lines().map(|line| format!("    {line}")));
            }
            Element::Tasks { rows } => {
                if rows.is_empty() {
                    lines.push(paint("(no tasks)", Tone::Muted, color));
                }
                let width = rows
                    .iter()
                    .map(|row| row.task.chars().count())
                    .max()
                    .unwrap_or(0);
                for row in rows {
                    let pad = width - row.task.chars().count();
                    lines.push(format!(
                        "{}{}  {}",
                        row.task,
                        " ".repeat(pad),
                        paint(&row.badge, row.tone, color)
                    ));
                }
            }
        }
    }
    lines.join("\n")
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    let code = match tone {
        Tone::Danger => Some("31"),
        Tone::Warning => Some("33"),
        Tone::Success => Some("32"),
        Tone::Muted => Some("90"),
        Tone::Plain => None,
    };

    match code {
        Some(code) if color => format!("\u{1b}[{code}m{text}\u{1b}[0m"),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn task_rows_align_badges() {
        let view = View {
            elements: vec![Element::Tasks {
                rows: vec![
                    TaskRow {
                        task: "t".into(),
                        badge: "open (high)".into(),
                        tone: Tone::Danger,
                    },
                    TaskRow {
                        task: "longer".into(),
                        badge: "done (low)".into(),
                        tone: Tone::Success,
                    },
                ],
            }],
        };
        assert_eq!(
            view.plain_text(),
            "t       open (high)\nlonger  done (low)"
        );
    }

    #[test]
    fn color_wraps_toned_text_only() {
        let view = View {
            elements: vec![
                Element::text("Audit failed", Tone::Danger),
                Element::text("plain", Tone::Plain),
            ],
        };
        assert_eq!(
            render_text(&view, true),
            "\u{1b}[31mAudit failed\u{1b}[0m\nplain"
        );
    }

    #[test]
    fn empty_task_list_says_so() {
        let view = View {
            elements: vec![Element::Tasks { rows: Vec::new() }],
        };
        assert_eq!(view.plain_text(), "(no tasks)");
    }

    #[test]
    fn preformatted_is_indented() {
        let view = View {
            elements: vec![Element::Preformatted {
                text: "{\n  \"a\": 2\n}".into(),
            }],
        };
        assert_eq!(view.plain_text(), "    {\n      \"a\": 2\n    }");
    }
}
