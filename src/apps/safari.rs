//! Safari: an address bar and a mock results page.

use super::{AppAction, AppContext, PhoneApp};
use crate::keymap::Action;
use crate::styles::theme;
use crate::utils::text_input::TextInput;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

/// Turn address bar text into a URL.
///
/// Returns `None` for blank input. Text that already has a scheme is kept,
/// text that looks like a host becomes `https://<text>`, anything else is a
/// search.
pub fn resolve_url(input: &str) -> Option<String> {
    let query = input.trim();
    if query.is_empty() {
        return None;
    }
    if query.starts_with("http://") || query.starts_with("https://") {
        return Some(query.to_string());
    }
    if query.contains('.') && !query.contains(' ') {
        return Some(format!("https://{query}"));
    }
    Some(format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(query)
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// A loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub query: String,
    pub url: String,
    pub shows_weather: bool,
    pub results: Vec<SearchResult>,
}

impl Page {
    pub fn for_query(query: &str, url: String) -> Self {
        let results = (1..=4)
            .map(|n| SearchResult {
                title: if n == 1 {
                    format!("Results for: {query}")
                } else {
                    format!("Related result {n}")
                },
                url: format!("www.example.com/result-{n}"),
                snippet: format!("This is a simulated search result for \"{query}\"."),
            })
            .collect();
        Self {
            query: query.to_string(),
            url,
            shows_weather: query.to_lowercase().contains("weather"),
            results,
        }
    }
}

pub struct SafariApp {
    address: TextInput,
    page: Option<Page>,
    editing: bool,
}

impl Default for SafariApp {
    fn default() -> Self {
        Self::new()
    }
}

impl SafariApp {
    pub fn new() -> Self {
        Self {
            address: TextInput::new(),
            page: None,
            editing: true,
        }
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Load the address bar contents. Blank input is ignored.
    pub fn submit(&mut self) -> bool {
        let Some(url) = resolve_url(self.address.text()) else {
            return false;
        };
        let query = self.address.text().trim().to_string();
        debug!("Loading {}", url);
        self.page = Some(Page::for_query(&query, url));
        self.editing = false;
        true
    }
}

impl PhoneApp for SafariApp {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &AppContext) {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let bar_style = if self.editing { t.border_focused_style() } else { t.border_style() };
        let bar_text = match (&self.page, self.editing) {
            (Some(page), false) => Span::styled(page.url.clone(), t.text_style()),
            _ if self.address.text().is_empty() => {
                Span::styled("Search or enter website", t.muted_style())
            }
            _ => Span::styled(self.address.text().to_string(), t.text_style()),
        };
        frame.render_widget(
            Paragraph::new(Line::from(bar_text))
                .block(Block::default().borders(Borders::ALL).border_style(bar_style)),
            chunks[0],
        );

        let mut lines = Vec::new();
        match &self.page {
            None => {
                lines.push(Line::from(Span::styled("Favorites", t.title_style())));
                lines.push(Line::from(Span::styled(
                    "Type an address or a search and press Enter.",
                    t.muted_style(),
                )));
            }
            Some(page) => {
                if page.shows_weather {
                    lines.push(Line::from(Span::styled("Weather", t.title_style())));
                    lines.push(Line::from(Span::styled(
                        "\u{26C5} 22°  Partly Cloudy  H:25° L:18°",
                        t.emphasis_style(),
                    )));
                    lines.push(Line::from(""));
                }
                for result in &page.results {
                    lines.push(Line::from(Span::styled(result.title.clone(), t.title_style())));
                    lines.push(Line::from(Span::styled(result.url.clone(), t.muted_style())));
                    lines.push(Line::from(Span::styled(result.snippet.clone(), t.text_style())));
                    lines.push(Line::from(""));
                }
            }
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent, action: Option<Action>) -> AppAction {
        if self.editing {
            match key.code {
                KeyCode::Enter => {
                    self.submit();
                }
                KeyCode::Esc => self.editing = false,
                code => {
                    self.address.handle_key(code);
                }
            }
            return AppAction::None;
        }
        match action {
            Some(Action::Confirm) => self.editing = true,
            Some(Action::Cancel) => return AppAction::Close,
            _ => {}
        }
        AppAction::None
    }

    fn handle_click(&mut self, _column: u16, _row: u16) -> AppAction {
        self.editing = true;
        AppAction::None
    }

    fn is_input_focused(&self) -> bool {
        self.editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_resolve_url() {
        assert_eq!(resolve_url("   "), None);
        assert_eq!(
            resolve_url("http://example.org").as_deref(),
            Some("http://example.org")
        );
        assert_eq!(
            resolve_url("rust-lang.org").as_deref(),
            Some("https://rust-lang.org")
        );
        assert_eq!(
            resolve_url("weather in paris").as_deref(),
            Some("https://www.google.com/search?q=weather%20in%20paris")
        );
        assert_eq!(
            resolve_url("a.b c").as_deref(),
            Some("https://www.google.com/search?q=a.b%20c")
        );
    }

    #[test]
    fn test_page_results() {
        let page = Page::for_query("Weather today", "u".to_string());
        assert!(page.shows_weather);
        assert_eq!(page.results.len(), 4);
        assert_eq!(page.results[0].title, "Results for: Weather today");
        assert_eq!(page.results[3].title, "Related result 4");
        assert_eq!(page.results[1].url, "www.example.com/result-2");

        let page = Page::for_query("rust", "u".to_string());
        assert!(!page.shows_weather);
    }

    #[test]
    fn test_submit_via_keys() {
        let mut app = SafariApp::new();
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), None);
        assert!(app.page().is_none());

        for c in "docs.rs".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), None);
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), None);
        assert_eq!(app.page().map(|p| p.url.as_str()), Some("https://docs.rs"));
        assert!(!app.is_input_focused());
    }
}
