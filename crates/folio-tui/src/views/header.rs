//! Header Widget
//!
//! Format: ` Name (@handle)                              preset · mode `

use crate::view_models::text::width;
use crate::view_models::HeaderViewModel;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

pub struct HeaderWidget<'a>(pub &'a HeaderViewModel);

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 {
            return;
        }

        buf.set_style(area, vm.bar_style);

        let label_width = width(&vm.theme_label) as u16;
        let title_room = area.width.saturating_sub(label_width + 3);
        buf.set_stringn(
            area.x + 1,
            area.y,
            &vm.title,
            title_room as usize,
            vm.title_style,
        );

        if label_width + 2 <= area.width {
            let x = area.x + area.width - label_width - 1;
            buf.set_string(x, area.y, &vm.theme_label, Style::default().fg(vm.label_color));
        }
    }
}
