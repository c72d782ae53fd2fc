//! Contributions section widget
//!
//! Draws the section frame, each on-screen card and the show-more control.
//! All geometry comes from the view model.

use crate::view_models::pull_requests_view_model::{CardArea, Clip, SectionViewModel};
use crate::view_models::text::width;
use crate::view_models::{CardLayout, CardViewModel, PullRequestsViewModel, ToggleViewModel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// Widget for the contributions section
pub struct PullRequestsWidget<'a>(pub &'a PullRequestsViewModel);

impl Widget for PullRequestsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        render_section(&vm.section, area, buf);

        for card in &vm.cards {
            if let Some(card_area) = card.area {
                render_card(card, &card_area, vm.layout, buf);
            }
        }

        if let Some(toggle) = &vm.toggle {
            if let Some(clip) = toggle.area {
                render_toggle(toggle, clip, buf);
            }
        }
    }
}

fn render_section(section: &SectionViewModel, area: Rect, buf: &mut Buffer) {
    let title = Line::from(vec![
        Span::styled("▌", Style::default().fg(section.accent).bg(section.glow)),
        Span::styled(
            format!(" {} ", section.title),
            Style::default()
                .fg(section.title_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(section.border))
        .title(title)
        .style(Style::default().bg(section.background))
        .render(area, buf);
}

/// Draws in item coordinates, dropping rows scrolled out of view
struct ClippedCanvas<'a> {
    buf: &'a mut Buffer,
    clip: Clip,
}

impl ClippedCanvas<'_> {
    fn screen_y(&self, y: u16) -> Option<u16> {
        self.clip
            .rows()
            .contains(&y)
            .then(|| self.clip.visible.y + (y - self.clip.skip))
    }

    /// Print up to `max_width` columns, never past the right edge of the item
    fn print(&mut self, x: u16, y: u16, text: &str, max_width: usize, style: Style) {
        let Some(screen_y) = self.screen_y(y) else {
            return;
        };
        let room = self.clip.full.width.saturating_sub(x) as usize;
        if room == 0 {
            return;
        }
        self.buf.set_stringn(
            self.clip.visible.x + x,
            screen_y,
            text,
            room.min(max_width),
            style,
        );
    }

    fn fill(&mut self, local: Rect, style: Style) {
        if let Some(area) = self.clip.to_screen(local) {
            self.buf.set_style(area, style);
        }
    }

    /// Rounded border around the whole item; only the visible edges are drawn
    fn frame(&mut self, border: Style) {
        let full = self.clip.full;
        if full.width < 2 || full.height < 2 {
            return;
        }
        let set = border::ROUNDED;
        let inner = full.width as usize - 2;
        let last = full.height - 1;
        for y in self.clip.rows() {
            if y == 0 || y == last {
                let (left, right) = if y == 0 {
                    (set.top_left, set.top_right)
                } else {
                    (set.bottom_left, set.bottom_right)
                };
                let line = format!("{left}{}{right}", set.horizontal_top.repeat(inner));
                self.print(0, y, &line, usize::MAX, border);
            } else {
                self.print(0, y, set.vertical_left, 1, border);
                self.print(full.width - 1, y, set.vertical_right, 1, border);
            }
        }
    }
}

fn render_card(card: &CardViewModel, area: &CardArea, layout: CardLayout, buf: &mut Buffer) {
    let mut canvas = ClippedCanvas {
        buf,
        clip: area.clip,
    };
    let full = area.clip.full;

    canvas.fill(full, Style::default().bg(card.background));
    canvas.frame(Style::default().fg(card.border));

    let content = CardViewModel::content_rect(full);
    if content.width == 0 {
        return;
    }
    let right = content.x + content.width;
    let header_rows = layout.header_rows();

    // Header band, including the padding columns
    let band = Rect {
        x: 1,
        y: content.y,
        width: full.width.saturating_sub(2),
        height: header_rows,
    };
    canvas.fill(band, Style::default().bg(card.header_background));

    let icon = format!(" {} ", card.status.glyph);
    let icon_style = Style::default().fg(card.status.color).bg(card.status_tint);
    let badge = card.status.badge();
    let badge_style = Style::default()
        .fg(card.status.color)
        .bg(card.status_tint)
        .add_modifier(Modifier::BOLD);
    let title_style = Style::default()
        .fg(card.title_color)
        .add_modifier(Modifier::BOLD);
    let text_x = content.x + 4;
    let text_room = right.saturating_sub(text_x) as usize;

    canvas.print(content.x, content.y, &icon, usize::MAX, icon_style);
    canvas.print(text_x, content.y, &card.title, text_room, title_style);
    canvas.print(
        right.saturating_sub(1),
        content.y,
        card.chevron,
        1,
        Style::default().fg(card.chevron_color),
    );
    canvas.print(
        text_x,
        content.y + 1,
        &card.repo,
        text_room,
        Style::default().fg(card.repo_color),
    );

    match layout {
        CardLayout::Wide => {
            let badge_x = right.saturating_sub(2 + width(&badge) as u16);
            canvas.print(badge_x, content.y, &badge, usize::MAX, badge_style);
            let date_x = right.saturating_sub(2 + width(&card.date) as u16);
            canvas.print(
                date_x,
                content.y + 1,
                &card.date,
                usize::MAX,
                Style::default().fg(card.date_color),
            );
        }
        CardLayout::Compact => {
            canvas.print(text_x, content.y + 2, &badge, text_room, badge_style);
            let date_x = text_x + width(&badge) as u16 + 1;
            canvas.print(
                date_x,
                content.y + 2,
                &card.date,
                right.saturating_sub(date_x) as usize,
                Style::default().fg(card.date_color),
            );
        }
    }

    if !card.expanded {
        return;
    }

    let divider_y = content.y + header_rows;
    canvas.print(
        content.x,
        divider_y,
        &"─".repeat(content.width as usize),
        content.width as usize,
        Style::default().fg(card.divider_color),
    );

    let description_style = Style::default().fg(card.description_color);
    let mut y = divider_y;
    for line in &card.description_lines {
        y = y.saturating_add(1);
        canvas.print(content.x, y, line, content.width as usize, description_style);
    }

    if let Some((view_pr, view_repo)) = card.button_rects(layout, full) {
        canvas.print(
            view_pr.x,
            view_pr.y,
            card.view_pr_label(),
            right.saturating_sub(view_pr.x) as usize,
            Style::default()
                .fg(card.status.color)
                .bg(card.status_tint)
                .add_modifier(Modifier::BOLD),
        );
        canvas.print(
            view_repo.x,
            view_repo.y,
            card.view_repo_label(),
            right.saturating_sub(view_repo.x) as usize,
            Style::default()
                .fg(card.repo_button_foreground)
                .bg(card.repo_button_background),
        );
    }
}

fn render_toggle(toggle: &ToggleViewModel, clip: Clip, buf: &mut Buffer) {
    let mut style = Style::default()
        .fg(toggle.foreground)
        .bg(toggle.background);
    if toggle.focused {
        style = style.add_modifier(Modifier::BOLD);
    }

    let mut canvas = ClippedCanvas { buf, clip };
    let full = clip.full;
    canvas.fill(full, Style::default().bg(toggle.background));
    canvas.frame(Style::default().fg(toggle.border));

    let text = toggle.text();
    let text_width = width(&text) as u16;
    let x = full.width.saturating_sub(text_width) / 2;
    canvas.print(x, 1, &text, full.width.saturating_sub(2) as usize, style);
}
