use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the browser window
pub struct AppLayout {
    pub browser_bar: Rect,
    pub content_area: Rect,
    pub reviews_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Browser bar: 3 rows on top
    /// - Content: remaining space, 60% width when the reviews panel is open
    /// - Reviews panel: 40% width on the right (optional)
    /// - Status bar: bottom row
    pub fn new(area: Rect, show_reviews: bool) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Browser bar
                Constraint::Min(3),    // Page area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let (content_area, reviews_area) = if show_reviews {
            let horizontal_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(vertical_chunks[1]);
            (horizontal_chunks[0], Some(horizontal_chunks[1]))
        } else {
            (vertical_chunks[1], None)
        };

        Self {
            browser_bar: vertical_chunks[0],
            content_area,
            reviews_area,
            status_area: vertical_chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_reviews() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), false);

        assert_eq!(layout.browser_bar.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);
        assert_eq!(layout.content_area.height, 26);
        assert_eq!(layout.content_area.width, 100);
        assert!(layout.reviews_area.is_none());
    }

    #[test]
    fn test_layout_with_reviews() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), true);

        let reviews = layout.reviews_area.unwrap();
        assert_eq!(layout.content_area.width, 60);
        assert_eq!(reviews.width, 40);
        assert_eq!(reviews.height, 26);
        assert_eq!(reviews.x, 60);
    }
}
