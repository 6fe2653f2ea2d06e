//! Layout helpers: split the terminal area into dashboard regions.
//!
//! Responsive like a grid: cards sit four across on wide terminals and two
//! by two on narrow ones; the charts sit side by side from
//! [`SIDE_BY_SIDE_MIN_WIDTH`] columns and stack below that.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum width for putting the two charts next to each other.
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 120;
/// Minimum width for a single row of four cards.
pub const CARDS_ONE_ROW_MIN_WIDTH: u16 = 80;

const HEADER_HEIGHT: u16 = 3;
const CARD_HEIGHT: u16 = 3;
const SELECTOR_HEIGHT: u16 = 3;
/// Five regions plus the block border.
const STACKED_REGION_HEIGHT: u16 = 7;

pub struct DashboardLayout {
    pub header_area: Rect,
    pub card_areas: [Rect; 4],
    pub selector_area: Rect,
    pub region_chart_area: Rect,
    pub state_chart_area: Rect,
    pub status_area: Rect,
}

impl DashboardLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let one_row_cards = area.width >= CARDS_ONE_ROW_MIN_WIDTH;
        let cards_height = if one_row_cards { CARD_HEIGHT } else { CARD_HEIGHT * 2 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(cards_height),
                Constraint::Length(SELECTOR_HEIGHT),
                Constraint::Min(3), // charts take the rest
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let card_areas = split_cards(chunks[1], one_row_cards);

        let wide = area.width >= SIDE_BY_SIDE_MIN_WIDTH;
        let charts = if wide {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[3])
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(STACKED_REGION_HEIGHT), Constraint::Min(3)])
                .split(chunks[3])
        };

        Self {
            header_area: chunks[0],
            card_areas,
            selector_area: chunks[2],
            region_chart_area: charts[0],
            state_chart_area: charts[1],
            status_area: chunks[4],
        }
    }
}

fn split_cards(area: Rect, one_row: bool) -> [Rect; 4] {
    let quarter = [Constraint::Ratio(1, 4); 4];
    let half = [Constraint::Ratio(1, 2); 2];

    if one_row {
        let c = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(quarter)
            .split(area);
        [c[0], c[1], c[2], c[3]]
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(half)
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(half)
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(half)
            .split(rows[1]);
        [top[0], top[1], bottom[0], bottom[1]]
    }
}
