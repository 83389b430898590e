use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::format_timestamp;
use crate::models::review::rounded_stars;
use crate::models::{Location, QuickLink, ReviewRecord, SearchResult, render_stars, site_domain};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const STAR: Color = Color::Rgb(250, 204, 21);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs from the app for one frame
pub struct RenderState<'a> {
    pub location: &'a Location,
    pub address_input: &'a str,
    pub focus: Focus,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub show_reviews: bool,
    pub quick_links: &'a [QuickLink],
    pub results: &'a [&'a SearchResult],
    pub selected_idx: usize,
    pub review: Option<&'a ReviewRecord>,
    pub author_input: &'a str,
    pub comment_draft: &'a str,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area(), state.show_reviews);

    render_browser_bar(frame, layout.browser_bar, state);
    match state.location {
        Location::Home => render_home(frame, layout.content_area, state),
        Location::Search { query } => render_search(frame, layout.content_area, query, state),
        Location::Site { url } => render_site(frame, layout.content_area, url),
    }
    if let Some(area) = layout.reviews_area {
        render_reviews_panel(frame, area, state);
    }
    render_status_bar(frame, layout.status_area, state);
}

fn border_style(focused: bool) -> Style {
    if focused { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
}

fn nav_button(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled { Style::default().fg(BRIGHT) } else { Style::default().fg(MUTED) };
    Span::styled(format!(" {} ", label), style)
}

fn render_browser_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.focus == Focus::AddressBar;
    let mut spans = vec![
        nav_button("←", state.can_go_back),
        nav_button("→", state.can_go_forward),
        nav_button("⟳", true),
        nav_button("⌂", true),
        Span::raw(" "),
    ];

    if state.address_input.is_empty() && !focused {
        spans.push(Span::styled(
            "Search or enter website URL...",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::raw(state.address_input.to_string()));
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
    }

    let reviews_label = if state.show_reviews { "★ Reviews" } else { "☆ Reviews" };
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(" WebExplorer ")
            .title_bottom(Line::from(format!(" {} ", reviews_label)).right_aligned()),
    );

    frame.render_widget(paragraph, area);
}

fn selectable_item(content: Text<'static>, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    ListItem::new(content).style(style)
}

fn render_home(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut items = vec![
        ListItem::new(Text::from(vec![
            Line::from(Span::styled(
                "Welcome to WebExplorer",
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )),
            Line::from("Browse the web, rate websites, and share your thoughts"),
            Line::from(""),
            Line::from(Span::styled("Quick Links", Style::default().fg(ACCENT))),
        ])),
    ];

    for (idx, link) in state.quick_links.iter().enumerate() {
        let initial = link.name.chars().next().unwrap_or('?');
        let content = Text::from(format!(" [{}] {}  {}", initial, link.name, link.url));
        items.push(selectable_item(content, idx == state.selected_idx));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(state.focus == Focus::Content))
            .title(" Home "),
    );

    // Row 0 is the welcome header; the offset keeps the selection on screen
    let selected = (!state.quick_links.is_empty()).then_some(state.selected_idx + 1);
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_search(frame: &mut Frame, area: Rect, query: &str, state: &RenderState) {
    let items: Vec<ListItem> = if state.results.is_empty() {
        vec![ListItem::new(format!("No results found for \"{}\"", query))]
    } else {
        state
            .results
            .iter()
            .enumerate()
            .map(|(idx, result)| {
                let content = Text::from(vec![
                    Line::from(result.title.clone()),
                    Line::from(format!("  {}", result.url)),
                    Line::from(format!("  {}", result.description)),
                ]);
                selectable_item(content, idx == state.selected_idx)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(state.focus == Focus::Content))
            .title(format!(" Search results for {} ", query)),
    );

    let selected = (!state.results.is_empty()).then_some(state.selected_idx);
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_site(frame: &mut Frame, area: Rect, url: &str) {
    let domain = site_domain(url);
    let initial = domain.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('?');

    let lines = vec![
        Line::from(Span::styled(
            "This is a simulated browser. In a real implementation, websites would load here.",
            Style::default().fg(MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("( {} )", initial),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            domain.clone(),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(url.to_string(), Style::default().fg(MUTED))),
        Line::from(""),
        Line::from("This is a placeholder for the actual website content."),
        Line::from("Press Ctrl+Y to copy the URL and open it in a real browser."),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(format!(" {} ", domain)),
        )
        .centered()
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn input_line<'a>(label: &'a str, value: &'a str, placeholder: &'a str, focused: bool) -> Line<'a> {
    let label_style = border_style(focused);
    let mut spans = vec![Span::styled(label, label_style)];
    if value.is_empty() && !focused {
        spans.push(Span::styled(placeholder, Style::default().fg(MUTED)));
    } else {
        spans.push(Span::raw(value));
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
    }
    Line::from(spans)
}

fn render_reviews_panel(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(matches!(state.focus, Focus::Author | Focus::Comment)))
        .title(" Ratings & Comments ");

    let Some(review) = state.review else {
        let paragraph = Paragraph::new("Navigate to a website to see ratings and comments")
            .style(Style::default().fg(MUTED))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let viewer_stars = review.viewer_rating.unwrap_or(0);
    let mut lines = vec![
        Line::from(Span::styled("Rate this website", Style::default().fg(BRIGHT))),
        Line::from(vec![
            Span::styled(render_stars(viewer_stars), Style::default().fg(STAR)),
            Span::raw("  "),
            Span::styled(
                match review.viewer_rating {
                    Some(stars) => {
                        format!("You rated {} star{}", stars, if stars == 1 { "" } else { "s" })
                    }
                    None => "Press 1-5 to rate".to_string(),
                },
                Style::default().fg(MUTED),
            ),
        ]),
    ];

    if review.has_ratings() {
        lines.push(Line::from(vec![
            Span::styled(
                render_stars(rounded_stars(review.aggregate.mean_stars)),
                Style::default().fg(STAR),
            ),
            Span::raw("  "),
            Span::styled(review.rating_summary(), Style::default().fg(MUTED)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Leave a comment", Style::default().fg(BRIGHT))));
    lines.push(input_line(
        "Name: ",
        state.author_input,
        "Your name (optional)",
        state.focus == Focus::Author,
    ));
    lines.push(input_line(
        "Comment: ",
        state.comment_draft,
        "Share your thoughts about this website...",
        state.focus == Focus::Comment,
    ));

    if !review.comments.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Comments ({})", review.comments.len()),
            Style::default().fg(BRIGHT),
        )));
        for comment in &review.comments {
            let mut header = vec![
                Span::styled(comment.author.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!(" · {}", format_timestamp(&comment.submitted_at)),
                    Style::default().fg(MUTED),
                ),
            ];
            if comment.rating_at_submission > 0 {
                header.push(Span::raw(" "));
                header.push(Span::styled(
                    render_stars(comment.rating_at_submission),
                    Style::default().fg(STAR),
                ));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(header));
            for text_line in comment.text.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
        }
    }

    let paragraph = Paragraph::new(Text::from(lines)).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        let paragraph = Paragraph::new(format!(" {} ", message.text))
            .style(Style::default().fg(fg).bg(BAR_BG));
        frame.render_widget(paragraph, area);
        return;
    }

    let mode = match state.focus {
        Focus::AddressBar => "[ADDRESS]",
        Focus::Content => "[PAGE]",
        Focus::Author => "[NAME]",
        Focus::Comment => "[COMMENT]",
    };
    let mut parts = vec![mode.to_string()];

    match state.focus {
        Focus::AddressBar => parts.push("Enter: go".to_string()),
        Focus::Content => {
            if !matches!(state.location, Location::Site { .. }) {
                parts.push("↑↓: select | Enter: open".to_string());
            }
            if state.show_reviews && state.review.is_some() {
                parts.push("1-5: rate".to_string());
            }
        }
        Focus::Author => parts.push("Enter: next".to_string()),
        Focus::Comment => parts.push("Enter: post".to_string()),
    }
    parts.push("Alt+←/→: back/forward".to_string());
    parts.push("Ctrl+R: refresh".to_string());
    parts.push("Ctrl+T: reviews".to_string());
    parts.push("Tab: focus".to_string());
    parts.push("Ctrl+C: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(BRIGHT).bg(BAR_BG));
    frame.render_widget(paragraph, area);
}
