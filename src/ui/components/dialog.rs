//! Modal dialog renderer.
//!
//! Dialogs are drawn as a bordered box centered over the body. Form dialogs
//! list one labelled input per line; confirmation dialogs wrap their message.

use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DialogView, FormFieldView};

const DIALOG_MAX_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 30;

/// Renders `dialog` centered in a `rows` x `cols` screen.
pub fn render_dialog(dialog: &DialogView, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(4).min(DIALOG_MAX_WIDTH);
    if width < 10 {
        return;
    }
    let inner = width - 2;

    let (title, lines) = match dialog {
        DialogView::Form {
            title,
            fields,
            submit_label,
        } => {
            let mut lines: Vec<(String, bool)> = fields
                .iter()
                .map(|field| (field_line(field, inner), field.is_focused))
                .collect();
            lines.push((String::new(), false));
            lines.push((format!("[Enter] {submit_label}   [Esc] Cancel"), false));
            (title, lines)
        }
        DialogView::Confirm { title, message } => {
            let mut lines: Vec<(String, bool)> = wrap(message, inner.saturating_sub(2))
                .into_iter()
                .map(|line| (line, false))
                .collect();
            lines.push((String::new(), false));
            lines.push(("[Enter] Delete   [Esc] Cancel".to_string(), false));
            (title, lines)
        }
    };

    let height = lines.len() + 2;
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = (cols - width) / 2 + 1;
    let border = Theme::fg(&theme.colors.dialog_border);

    let title = fit(&format!(" {title} "), inner);
    position_cursor(top, left);
    print!("{border}┌{}{}┐", title, "─".repeat(inner - width_of(&title)));
    print!("{}", Theme::reset());

    for (offset, (text, focused)) in lines.iter().enumerate() {
        let text = fit(&format!(" {text}"), inner);
        position_cursor(top + 1 + offset, left);
        print!("{border}│{}", Theme::reset());
        if *focused {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{text}{}", " ".repeat(inner - width_of(&text)));
        print!("{}{border}│{}", Theme::reset(), Theme::reset());
    }

    position_cursor(top + 1 + lines.len(), left);
    print!("{border}└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}

/// Formats one form input as `Label*: value_`, the cursor shown when focused.
fn field_line(field: &FormFieldView, inner: usize) -> String {
    let required = if field.is_required { "*" } else { "" };
    let label = format!("{}{required}:", field.label);
    let cursor = if field.is_focused { "_" } else { "" };
    let value_width = inner.saturating_sub(LABEL_WIDTH + 2);

    // Long values scroll so the end (where typing happens) stays visible.
    let value = format!("{}{cursor}", field.value);
    let value_len = width_of(&value);
    let value: String = if value_len > value_width {
        value.chars().skip(value_len - value_width).collect()
    } else {
        value
    };

    format!("{label:<LABEL_WIDTH$}{value}")
}

/// Greedy word wrap to `width` characters. Words longer than a line are cut.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = fit(word, width);
        let needed = if current.is_empty() {
            width_of(&word)
        } else {
            width_of(&current) + 1 + width_of(&word)
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap(
            "Are you sure you want to delete Valley Stop? This action cannot be undone.",
            30,
        );
        assert_eq!(
            lines,
            vec![
                "Are you sure you want to",
                "delete Valley Stop? This",
                "action cannot be undone.",
            ]
        );
        assert!(lines.iter().all(|l| width_of(l) <= 30));
    }

    #[test]
    fn field_line_marks_required_and_focus() {
        let field = FormFieldView {
            label: "Name".to_string(),
            value: "Valley".to_string(),
            is_focused: true,
            is_required: true,
        };
        let line = field_line(&field, 60);
        assert!(line.starts_with("Name*:"));
        assert!(line.ends_with("Valley_"));
    }

    #[test]
    fn long_values_keep_their_tail_visible() {
        let field = FormFieldView {
            label: "Phone".to_string(),
            value: "0123456789".to_string(),
            is_focused: false,
            is_required: false,
        };
        let line = field_line(&field, LABEL_WIDTH + 2 + 4);
        assert!(line.ends_with("6789"));
        assert_eq!(width_of(&line), LABEL_WIDTH + 4);
    }
}
