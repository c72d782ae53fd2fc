//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: ` j next  Enter expand  …              [14:32:05] message `

use crate::view_models::text::{truncate, width};
use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 {
            return;
        }

        buf.set_style(area, vm.bar_style);

        let right_edge = area.x + area.width;

        // Message on the right, takes priority over hints
        let mut message_x = right_edge;
        if !vm.message.is_empty() {
            let text = if vm.timestamp.is_empty() {
                vm.message.clone()
            } else {
                format!("[{}] {}", vm.timestamp, vm.message)
            };
            let text = truncate(&text, area.width.saturating_sub(2) as usize);
            message_x = right_edge.saturating_sub(width(&text) as u16 + 1);
            buf.set_string(message_x, area.y, &text, vm.message_style);
        }

        // Hints on the left, as many as fit
        let mut x = area.x + 1;
        for (key, label) in &vm.hints {
            let hint_width = (width(key) + 1 + width(label) + 2) as u16;
            if x + hint_width > message_x {
                break;
            }
            buf.set_string(x, area.y, key, vm.key_style);
            buf.set_string(x + width(key) as u16 + 1, area.y, label, vm.label_style);
            x += hint_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol())
            .collect()
    }

    #[test]
    fn test_renders_hints() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget(&vm).render(area, &mut buf);
        assert!(row(&buf).starts_with(" j next  Enter expand  m more"));
    }

    #[test]
    fn test_message_is_right_aligned() {
        let mut vm = StatusBarViewModel::from_state(&AppState::default());
        vm.message = "Opening https://example.com".to_string();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget(&vm).render(area, &mut buf);
        let text = row(&buf);
        assert!(text.ends_with("Opening https://example.com "));
        assert!(text.starts_with(" j next"));
    }
}
