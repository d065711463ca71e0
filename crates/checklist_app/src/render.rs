use checklist_core::{ActionButton, ChecklistViewModel};

/// Renders the screen as plain text lines.
pub fn render(view: &ChecklistViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 4);

    let header = match view.user_icon_image.as_deref() {
        Some(icon) => format!("== CheckList == [{icon}]"),
        None => "== CheckList ==".to_string(),
    };
    lines.push(header);

    if view.rows.is_empty() {
        lines.push("  (no checks)".to_string());
    }
    for (index, row) in view.rows.iter().enumerate() {
        let mark = if row.checked { 'x' } else { ' ' };
        let line = match &row.detail {
            Some(detail) => format!("{:>3}. [{}] {} ({})", index + 1, mark, row.title, detail),
            None => format!("{:>3}. [{}] {}", index + 1, mark, row.title),
        };
        lines.push(line);
    }

    let button = match view.action_button {
        ActionButton::Plus => "+".to_string(),
        ActionButton::Count(count) => count.to_string(),
        ActionButton::Star => "*".to_string(),
    };
    lines.push(format!(
        "Selected {}/{}  ( {} )",
        view.selected_count, view.total, button
    ));

    if view.show_modal {
        lines.push("[ Modal ]".to_string());
    }
    if let Some(prompt) = &view.prompt {
        lines.push(format!(
            "? {}  [{}] dismiss  [{}] confirm",
            prompt.title, prompt.cancel_label, prompt.confirm_label
        ));
    }

    lines
}
