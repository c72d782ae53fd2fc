//! View model for the contributions section
//!
//! Separates presentation logic from the domain model and from rendering.
//! Pre-computes display text, colors and the on-screen geometry of every card,
//! so the widget and mouse hit testing agree on where things are.

use folio_model::{PrStatus, PullRequest};
use folio_theme::{hex_alpha, Theme};
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use std::ops::Range;

use crate::state::{AppState, FocusTarget, PullRequestsState};
use crate::view_models::text::{truncate, width, wrap};

pub const SECTION_TITLE: &str = "Open Source Contributions";

/// Blank rows between cards, and between the last card and the toggle
const GAP: u16 = 1;
/// Bordered single-line button
const TOGGLE_HEIGHT: u16 = 3;
/// Left border plus one column of padding, on each side
const CARD_INSET: u16 = 2;
/// Status icon cell plus a space before the title
const ICON_WIDTH: usize = 4;

const VIEW_PR_LABEL: &str = " ↗ View PR ";
const VIEW_REPO_LABEL: &str = " ⌂ View Repo ";

/// Fixed visual identity of a pull request status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusVisual {
    pub glyph: &'static str,
    pub color: Color,
    pub label: &'static str,
}

impl StatusVisual {
    /// Opacity of the status color behind icons and badges
    pub const TINT_ALPHA: f32 = 0.15;

    pub fn for_status(status: PrStatus) -> Self {
        match status {
            PrStatus::Merged => Self {
                glyph: "⎇",
                color: Color::Rgb(0x8b, 0x5c, 0xf6),
                label: status.label(),
            },
            PrStatus::Open => Self {
                glyph: "↱",
                color: Color::Rgb(0x22, 0xc5, 0x5e),
                label: status.label(),
            },
            PrStatus::Closed => Self {
                glyph: "⊘",
                color: Color::Rgb(0xef, 0x44, 0x44),
                label: status.label(),
            },
        }
    }

    /// Badge text, e.g. " ⎇ Merged "
    pub fn badge(&self) -> String {
        format!(" {} {} ", self.glyph, self.label)
    }
}

/// Card arrangement, chosen by viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    /// Status badge and date on their own row under the repository
    Compact,
    /// Status badge and date right-aligned beside title and repository
    Wide,
}

impl CardLayout {
    /// Compact below the breakpoint, wide at or above it
    pub fn for_width(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Rows taken by the card header (without borders)
    pub fn header_rows(self) -> u16 {
        match self {
            Self::Compact => 3,
            Self::Wide => 2,
        }
    }
}

/// Something a mouse click can land on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The clickable header of a card
    CardHeader { focus: usize, id: String },
    /// A "View PR" or "View Repo" button
    Link { url: String },
    /// The show-more / show-less control
    Toggle { focus: usize },
}

/// View model for the whole section
#[derive(Debug, Clone)]
pub struct PullRequestsViewModel {
    pub section: SectionViewModel,
    pub layout: CardLayout,
    /// Displayed cards in input order
    pub cards: Vec<CardViewModel>,
    /// Present only when there are more items than the initial cap
    pub toggle: Option<ToggleViewModel>,
}

/// Section frame and title
#[derive(Debug, Clone)]
pub struct SectionViewModel {
    pub area: Rect,
    pub title: &'static str,
    pub background: Color,
    pub border: Color,
    pub accent: Color,
    pub glow: Color,
    pub title_color: Color,
}

/// The on-screen part of an item that scrolling may cut at the top or bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    /// The whole item in its own coordinates, origin at (0, 0)
    pub full: Rect,
    /// Rows of the item scrolled out above the list
    pub skip: u16,
    /// Where the remaining rows land on screen
    pub visible: Rect,
}

impl Clip {
    /// Place an item spanning list rows `top..bottom`, or None when no row is on screen
    fn place(top: u16, bottom: u16, x: u16, width: u16, scroll: u16, viewport: Rect) -> Option<Self> {
        let first = top.max(scroll);
        let last = bottom.min(scroll.saturating_add(viewport.height));
        if first >= last || width == 0 {
            return None;
        }
        Some(Self {
            full: Rect::new(0, 0, width, bottom - top),
            skip: first - top,
            visible: Rect::new(x, viewport.y + (first - scroll), width, last - first),
        })
    }

    /// Rows of the item that are on screen, in item coordinates
    pub fn rows(&self) -> Range<u16> {
        self.skip..self.skip + self.visible.height
    }

    /// Whether every row of the item is on screen
    pub fn is_complete(&self) -> bool {
        self.skip == 0 && self.visible.height == self.full.height
    }

    /// Map a rect in item coordinates to the screen, cut to the visible part
    pub fn to_screen(&self, local: Rect) -> Option<Rect> {
        let rows = self.rows();
        let first = local.top().max(rows.start);
        let last = local.bottom().min(rows.end);
        let width = local.width.min(self.visible.width.saturating_sub(local.x));
        if first >= last || width == 0 {
            return None;
        }
        Some(Rect::new(
            self.visible.x + local.x,
            self.visible.y + (first - self.skip),
            width,
            last - first,
        ))
    }
}

/// Where a card landed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardArea {
    pub clip: Clip,
    /// Clickable header including the top border, if any of it is on screen
    pub header: Option<Rect>,
    pub view_pr: Option<Rect>,
    pub view_repo: Option<Rect>,
}

/// URLs behind the buttons of an expanded card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLinks {
    pub pr_url: String,
    pub repo_url: String,
}

/// View model for a single card
#[derive(Debug, Clone)]
pub struct CardViewModel {
    pub id: String,
    /// Focus index of this card
    pub focus: usize,
    /// None when scrolled entirely out of view
    pub area: Option<CardArea>,
    pub focused: bool,
    pub expanded: bool,

    // Pre-formatted text
    pub title: String,
    pub repo: String,
    pub date: String,
    pub chevron: &'static str,
    pub description_lines: Vec<String>,
    pub links: Option<CardLinks>,

    // Pre-computed colors
    pub status: StatusVisual,
    pub status_tint: Color,
    pub background: Color,
    pub header_background: Color,
    pub border: Color,
    pub title_color: Color,
    pub repo_color: Color,
    pub date_color: Color,
    pub chevron_color: Color,
    pub description_color: Color,
    pub divider_color: Color,
    pub repo_button_background: Color,
    pub repo_button_foreground: Color,
}

/// View model for the show-more control
#[derive(Debug, Clone)]
pub struct ToggleViewModel {
    pub focus: usize,
    pub label: String,
    pub chevron: &'static str,
    pub area: Option<Clip>,
    pub focused: bool,
    pub foreground: Color,
    pub background: Color,
    pub border: Color,
}

impl ToggleViewModel {
    /// Text inside the button, e.g. "Show 2 more ▾"
    pub fn text(&self) -> String {
        format!("{} {}", self.label, self.chevron)
    }
}

impl PullRequestsViewModel {
    /// Build the view model for the current state, or None when there is nothing to show
    pub fn from_state(state: &AppState, area: Rect) -> Option<Self> {
        Self::build(
            state.pull_request_list(),
            &state.pull_requests,
            &state.theme,
            area,
            CardLayout::for_width(state.viewport.width, state.app_config.compact_breakpoint),
        )
    }

    /// Transform list state into a display-ready view model
    pub fn build(
        prs: &[PullRequest],
        state: &PullRequestsState,
        theme: &Theme,
        area: Rect,
        layout: CardLayout,
    ) -> Option<Self> {
        if prs.is_empty() {
            return None;
        }

        let total = prs.len();
        let section = Self::build_section(area, theme);

        // Section interior: inside the border, one column of padding each side
        let inner = Rect {
            x: area.x.saturating_add(2),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        let content_width = inner.width.saturating_sub(2 * CARD_INSET) as usize;

        let focused = state.focused(total);
        let mut cards: Vec<CardViewModel> = state
            .visible(prs)
            .iter()
            .enumerate()
            .map(|(index, pr)| {
                let is_focused = focused == Some(FocusTarget::Card(index));
                Self::build_card(pr, index, state.is_expanded(&pr.id), is_focused, layout, content_width, theme)
            })
            .collect();

        let mut toggle = state.toggle_label(total).map(|label| ToggleViewModel {
            focus: state.visible_count(total),
            label,
            chevron: if state.show_all { "▴" } else { "▾" },
            area: None,
            focused: focused == Some(FocusTarget::Toggle),
            foreground: theme.toggle_foreground(),
            background: theme.toggle_background(),
            border: if focused == Some(FocusTarget::Toggle) {
                theme.toggle_foreground()
            } else {
                theme.toggle_border()
            },
        });

        // Vertical extents relative to the top of the list
        let mut extents = Vec::with_capacity(cards.len() + 1);
        let mut top = 0u16;
        for card in &cards {
            let bottom = top.saturating_add(card.height(layout));
            extents.push((top, bottom));
            top = bottom.saturating_add(GAP);
        }
        if toggle.is_some() {
            extents.push((top, top.saturating_add(TOGGLE_HEIGHT)));
        }

        // Bring the focused item fully into view; one taller than the list is pinned at its top
        let scroll = focused
            .map(|target| match target {
                FocusTarget::Card(index) => index,
                FocusTarget::Toggle => cards.len(),
            })
            .and_then(|index| extents.get(index))
            .map(|&(top, bottom)| top.min(bottom.saturating_sub(inner.height)))
            .unwrap_or(0);

        for (card, &(top, bottom)) in cards.iter_mut().zip(&extents) {
            card.area = Clip::place(top, bottom, inner.x, inner.width, scroll, inner)
                .map(|clip| card.card_area(clip, layout));
        }

        if let Some(toggle) = toggle.as_mut() {
            let text_width = width(&toggle.text()) as u16;
            let button_width = text_width.saturating_add(4).min(inner.width);
            let x = inner.x + (inner.width - button_width) / 2;
            toggle.area = extents
                .last()
                .and_then(|&(top, bottom)| Clip::place(top, bottom, x, button_width, scroll, inner));
        }

        Some(Self {
            section,
            layout,
            cards,
            toggle,
        })
    }

    fn build_section(area: Rect, theme: &Theme) -> SectionViewModel {
        SectionViewModel {
            area,
            title: SECTION_TITLE,
            background: theme.section_background(),
            border: theme.section_border(),
            accent: theme.colors.highlight,
            glow: theme.glow(),
            title_color: theme.colors.foreground,
        }
    }

    fn build_card(
        pr: &PullRequest,
        index: usize,
        expanded: bool,
        focused: bool,
        layout: CardLayout,
        content_width: usize,
        theme: &Theme,
    ) -> CardViewModel {
        let status = StatusVisual::for_status(pr.status);

        // Room left for the title after the icon cell, and the badge + chevron
        let title_width = match layout {
            CardLayout::Wide => {
                let right = width(&status.badge()).max(width(&pr.date)) + 3;
                content_width.saturating_sub(ICON_WIDTH + right)
            }
            CardLayout::Compact => content_width.saturating_sub(ICON_WIDTH + 2),
        };
        let repo_width = match layout {
            CardLayout::Wide => title_width,
            CardLayout::Compact => content_width.saturating_sub(ICON_WIDTH),
        };

        let (description_lines, links) = if expanded {
            (
                wrap(&pr.description, content_width),
                Some(CardLinks {
                    pr_url: pr.pr_url.clone(),
                    repo_url: pr.repo_url.clone(),
                }),
            )
        } else {
            (Vec::new(), None)
        };

        let background = theme.card_background();

        CardViewModel {
            id: pr.id.clone(),
            focus: index,
            area: None,
            focused,
            expanded,
            title: truncate(&pr.title, title_width),
            repo: truncate(&pr.repo, repo_width),
            date: pr.date.clone(),
            chevron: if expanded { "▴" } else { "▾" },
            description_lines,
            links,
            status,
            status_tint: theme.tint(status.color, StatusVisual::TINT_ALPHA),
            background,
            header_background: if focused {
                theme.card_header_focused()
            } else {
                background
            },
            border: if focused {
                theme.card_border_focused()
            } else {
                theme.card_border()
            },
            title_color: theme.colors.foreground,
            repo_color: theme.colors.primary,
            date_color: theme.muted_text(hex_alpha(0x80)),
            chevron_color: theme.muted_text(hex_alpha(0x66)),
            description_color: theme.muted_text(hex_alpha(0xb3)),
            divider_color: theme.divider(),
            repo_button_background: theme.neutral_button(),
            repo_button_foreground: theme.colors.foreground,
        }
    }

    /// Find what sits under a terminal cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);

        for card in &self.cards {
            let Some(area) = card.area else { continue };
            if let Some(links) = &card.links {
                if area.view_pr.is_some_and(|r| r.contains(position)) {
                    return Some(HitTarget::Link {
                        url: links.pr_url.clone(),
                    });
                }
                if area.view_repo.is_some_and(|r| r.contains(position)) {
                    return Some(HitTarget::Link {
                        url: links.repo_url.clone(),
                    });
                }
            }
            if area.header.is_some_and(|r| r.contains(position)) {
                return Some(HitTarget::CardHeader {
                    focus: card.focus,
                    id: card.id.clone(),
                });
            }
        }

        self.toggle
            .as_ref()
            .filter(|toggle| toggle.area.is_some_and(|clip| clip.visible.contains(position)))
            .map(|toggle| HitTarget::Toggle {
                focus: toggle.focus,
            })
    }
}

impl CardViewModel {
    /// Total rows including borders
    pub fn height(&self, layout: CardLayout) -> u16 {
        let body = if self.expanded {
            // divider, description, blank row, buttons
            self.description_rows().saturating_add(3)
        } else {
            0
        };
        layout.header_rows().saturating_add(2).saturating_add(body)
    }

    fn description_rows(&self) -> u16 {
        u16::try_from(self.description_lines.len()).unwrap_or(u16::MAX)
    }

    /// Inside borders and padding, in card coordinates
    pub fn content_rect(full: Rect) -> Rect {
        Rect {
            x: full.x + CARD_INSET,
            y: full.y + 1,
            width: full.width.saturating_sub(2 * CARD_INSET),
            height: full.height.saturating_sub(2),
        }
    }

    /// "View PR" and "View Repo" buttons in card coordinates
    pub fn button_rects(&self, layout: CardLayout, full: Rect) -> Option<(Rect, Rect)> {
        if !self.expanded {
            return None;
        }
        let content = Self::content_rect(full);
        let row = content
            .y
            .saturating_add(layout.header_rows())
            .saturating_add(self.description_rows())
            .saturating_add(2);
        let pr_width = width(VIEW_PR_LABEL) as u16;
        let repo_width = width(VIEW_REPO_LABEL) as u16;
        Some((
            Rect::new(content.x, row, pr_width, 1),
            Rect::new(content.x + pr_width + 2, row, repo_width, 1),
        ))
    }

    fn card_area(&self, clip: Clip, layout: CardLayout) -> CardArea {
        let header = Rect {
            height: 1 + layout.header_rows(),
            ..clip.full
        };
        let buttons = self.button_rects(layout, clip.full);

        CardArea {
            clip,
            header: clip.to_screen(header),
            view_pr: buttons.and_then(|(pr, _)| clip.to_screen(pr)),
            view_repo: buttons.and_then(|(_, repo)| clip.to_screen(repo)),
        }
    }

    pub fn view_pr_label(&self) -> &'static str {
        VIEW_PR_LABEL
    }

    pub fn view_repo_label(&self) -> &'static str {
        VIEW_REPO_LABEL
    }
}
