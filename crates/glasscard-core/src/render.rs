//! Rendering Capability
//!
//! A shell hands a [`ShellFrame`] to a [`CardRenderer`]; what a "node" is
//! depends on the backend. The UI crate renders Dioxus elements, and
//! [`TextRenderer`] draws a box for terminals.

use crate::a11y::AriaAttributes;
use crate::style::paint::{CssDeclaration, CssPaint, ThemeMode};
use crate::style::{Length, StyleSpec};

/// Paint and accessibility state for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct ShellFrame {
    /// Current style, hover already applied
    pub style: StyleSpec,
    pub aria: AriaAttributes,
    pub theme: ThemeMode,
}

impl ShellFrame {
    pub fn declarations(&self) -> Vec<CssDeclaration> {
        CssPaint::new(self.theme).declarations(&self.style)
    }

    pub fn style_attribute(&self) -> String {
        CssPaint::new(self.theme).style_attribute(&self.style)
    }
}

/// A rendering backend
pub trait CardRenderer {
    type Node;

    /// Wrap `children` in a container painted from `frame`
    fn render(&self, frame: &ShellFrame, children: Self::Node) -> Self::Node;
}

/// Draws cards as Unicode boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    /// Columns used for full-width cards
    pub full_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { full_width: 72 }
    }
}

const MIN_COLUMNS: usize = 24;
const PX_PER_COLUMN: u32 = 8;
const BAR_CELLS: usize = 20;

impl TextRenderer {
    fn columns(&self, width: Length) -> usize {
        match width {
            Length::Px(px) => ((px / PX_PER_COLUMN) as usize).max(MIN_COLUMNS),
            Length::Fill => self.full_width.max(MIN_COLUMNS),
            Length::Auto => 40,
        }
    }

    /// Denser glass draws heavier lines
    fn rule(style: &StyleSpec) -> char {
        match style.background_alpha {
            a if a < 0.15 => '┄',
            a if a < 0.30 => '─',
            a if a < 0.45 => '━',
            _ => '═',
        }
    }

    fn progress_bar(now: u8) -> String {
        let filled = ((usize::from(now) * BAR_CELLS + 50) / 100).min(BAR_CELLS);
        format!(
            "[{}{}] {}%",
            "█".repeat(filled),
            "░".repeat(BAR_CELLS - filled),
            now
        )
    }
}

fn fit(text: &str, width: usize) -> String {
    let mut line: String = text.chars().take(width).collect();
    let len = line.chars().count();
    line.extend(std::iter::repeat(' ').take(width - len));
    line
}

impl CardRenderer for TextRenderer {
    type Node = String;

    fn render(&self, frame: &ShellFrame, children: String) -> String {
        let columns = self.columns(frame.style.dimensions.width);
        let inner = columns - 4;
        let rule = Self::rule(&frame.style);

        let mut title = frame.aria.label.clone();
        if let Some(pressed) = frame.aria.pressed {
            title.push_str(if pressed { " [on]" } else { " [off]" });
        }
        let title: String = title.chars().take(inner.saturating_sub(2)).collect();
        let used = title.chars().count() + 3;
        let top = format!(
            "╭{rule} {title} {}╮",
            rule.to_string().repeat((columns - 2).saturating_sub(used))
        );

        let mut lines = vec![top];
        for text in children.lines() {
            lines.push(format!("│ {} │", fit(text, inner)));
        }
        if let Some(range) = frame.aria.range {
            lines.push(format!("│ {} │", fit(&Self::progress_bar(range.now), inner)));
        }
        if let Some(live) = &frame.aria.live_text {
            lines.push(format!("│ {} │", fit(&format!("» {live}"), inner)));
        }
        lines.push(format!("╰{}╯", rule.to_string().repeat(columns - 2)));
        lines.join("\n")
    }
}
