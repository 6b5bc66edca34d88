//! Formats key bindings into short (one line) or full (grouped columns)
//! help text.

use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::ui::keys::KeyBinding;

const SHORT_SEPARATOR: &str = "  ";
const COLUMN_SEPARATOR: &str = "    ";
const ELLIPSIS: &str = " …";

/// Anything that can list the key bindings to show in help.
pub trait KeyMap {
    /// Bindings shown on the single help line.
    fn short_help(&self) -> Vec<&KeyBinding>;
    /// Groups of bindings, one column per group.
    fn full_help(&self) -> Vec<Vec<&KeyBinding>>;
}

/// Help renderer. The only state it owns is whether the full form is shown.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct HelpView {
    show_all: bool,
}

impl HelpView {
    pub fn new(show_all: bool) -> Self {
        Self { show_all }
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn toggle(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Renders help for `keys` fitted to `width` columns (0 means
    /// unlimited).
    pub fn view(&self, keys: &impl KeyMap, width: u16) -> String {
        if self.show_all {
            full_view(&keys.full_help(), width)
        } else {
            short_view(&keys.short_help(), width)
        }
    }
}

/// Renders `key: desc` pairs on one line. Pairs that do not fit are dropped
/// and replaced by an ellipsis.
pub fn short_view(bindings: &[&KeyBinding], width: u16) -> String {
    let max = usize::from(width);
    let mut out = String::new();

    for (i, binding) in bindings.iter().enumerate() {
        let separator = if i == 0 { "" } else { SHORT_SEPARATOR };
        let item = format!(
            "{separator}{}: {}",
            binding.help_key(),
            binding.help_desc()
        );

        if max > 0 && out.width() + item.width() > max {
            if out.width() + ELLIPSIS.width() <= max {
                out.push_str(ELLIPSIS);
            }
            break;
        }

        out.push_str(&item);
    }

    out
}

/// Renders each group as an aligned column of `key desc` rows, columns side
/// by side. Columns that do not fit are dropped and replaced by an ellipsis.
pub fn full_view(groups: &[Vec<&KeyBinding>], width: u16) -> String {
    let max = usize::from(width);
    let mut columns: Vec<(Vec<String>, usize)> = Vec::new();
    let mut total = 0;
    let mut truncated = false;

    for group in groups.iter().filter(|g| !g.is_empty()) {
        let (column, column_width) = render_column(group);
        let separator_width = if columns.is_empty() {
            0
        } else {
            COLUMN_SEPARATOR.width()
        };

        if max > 0 && total + separator_width + column_width > max {
            truncated = true;
            break;
        }

        total += separator_width + column_width;
        columns.push((column, column_width));
    }

    let rows = columns.iter().map(|(c, _)| c.len()).max().unwrap_or(0);

    let mut lines = (0..rows)
        .map(|row| {
            columns
                .iter()
                .map(|(column, column_width)| {
                    column
                        .get(row)
                        .cloned()
                        .unwrap_or_else(|| " ".repeat(*column_width))
                })
                .join(COLUMN_SEPARATOR)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<String>>();

    if truncated {
        match lines.first_mut() {
            Some(first) if first.width() + ELLIPSIS.width() <= max => {
                first.push_str(ELLIPSIS)
            }
            None if ELLIPSIS.width() <= max => {
                lines.push(ELLIPSIS.to_string())
            }
            _ => {}
        }
    }

    lines.join("\n")
}

fn render_column(group: &[&KeyBinding]) -> (Vec<String>, usize) {
    let key_width = group.iter().map(|b| b.help_key().width()).max().unwrap_or(0);
    let desc_width = group
        .iter()
        .map(|b| b.help_desc().width())
        .max()
        .unwrap_or(0);
    let column_width = key_width + 1 + desc_width;

    let rows = group
        .iter()
        .map(|b| {
            let row = format!("{} {}", pad_right(b.help_key(), key_width), b.help_desc());
            pad_right(&row, column_width)
        })
        .collect();

    (rows, column_width)
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

#[cfg(test)]
#[path = "./help_tests.rs"]
mod tests;
