//! Weather with mock data generated per city.

use super::{AppAction, AppContext, PhoneApp};
use crate::keymap::Action;
use crate::styles::theme;
use crate::utils::layout::HitAreas;
use crossterm::event::KeyEvent;
use rand::Rng;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::debug;

pub const CITIES: [&str; 5] = ["New York", "London", "Tokyo", "Sydney", "Paris"];

const CONDITIONS: [(&str, &str); 5] = [
    ("Sunny", "\u{2600}"),
    ("Partly Cloudy", "\u{26C5}"),
    ("Cloudy", "\u{2601}"),
    ("Rainy", "\u{1F327}"),
    ("Thunderstorm", "\u{26C8}"),
];

const FORECAST_DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayForecast {
    pub day: &'static str,
    pub high: i32,
    pub low: i32,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: i32,
    pub condition: &'static str,
    pub icon: &'static str,
    pub high: i32,
    pub low: i32,
    pub humidity: u8,
    pub wind_kmh: u8,
    pub forecast: Vec<DayForecast>,
}

/// Make up weather for a city.
pub fn generate_weather<R: Rng>(city: &str, rng: &mut R) -> WeatherReport {
    let temperature = rng.random_range(10..=34);
    let (condition, icon) = CONDITIONS[rng.random_range(0..CONDITIONS.len())];
    let forecast = FORECAST_DAYS
        .iter()
        .map(|&day| DayForecast {
            day,
            high: temperature + rng.random_range(0..10),
            low: temperature - rng.random_range(1..=10),
            icon: CONDITIONS[rng.random_range(0..CONDITIONS.len())].1,
        })
        .collect();

    WeatherReport {
        city: city.to_string(),
        temperature,
        condition,
        icon,
        high: temperature + 3,
        low: temperature - 4,
        humidity: rng.random_range(20..80),
        wind_kmh: rng.random_range(5..25),
        forecast,
    }
}

pub struct WeatherApp<R: Rng> {
    rng: R,
    city_index: usize,
    report: WeatherReport,
    hits: HitAreas<usize>,
}

impl<R: Rng> WeatherApp<R> {
    /// Create the app showing a random city.
    pub fn new(mut rng: R) -> Self {
        let city_index = rng.random_range(0..CITIES.len());
        let report = generate_weather(CITIES[city_index], &mut rng);
        Self {
            rng,
            city_index,
            report,
            hits: HitAreas::new(),
        }
    }

    pub fn report(&self) -> &WeatherReport {
        &self.report
    }

    pub fn city(&self) -> &'static str {
        CITIES[self.city_index]
    }

    /// Switch to a city and regenerate its weather.
    pub fn select_city(&mut self, index: usize) {
        let index = index.min(CITIES.len() - 1);
        self.city_index = index;
        self.report = generate_weather(CITIES[index], &mut self.rng);
        debug!("Weather for {}: {}°", self.report.city, self.report.temperature);
    }
}

impl<R: Rng> PhoneApp for WeatherApp<R> {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &AppContext) {
        let t = theme();
        self.hits.clear();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // City tabs
                Constraint::Length(5), // Current
                Constraint::Min(0),    // Forecast
            ])
            .split(area);

        let mut tabs = Vec::new();
        let mut x = chunks[0].x;
        for (index, city) in CITIES.iter().enumerate() {
            let style = if index == self.city_index { t.highlight_style() } else { t.muted_style() };
            let label = format!(" {city} ");
            let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
            if x < chunks[0].right() {
                let w = width.min(chunks[0].right() - x);
                self.hits.push(Rect::new(x, chunks[0].y, w, 1), index);
            }
            x = x.saturating_add(width);
            tabs.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

        let r = &self.report;
        let current = vec![
            Line::from(Span::styled(r.city.clone(), t.title_style())),
            Line::from(Span::styled(format!("{} {}°", r.icon, r.temperature), t.emphasis_style())),
            Line::from(Span::styled(r.condition, t.text_style())),
            Line::from(Span::styled(format!("H:{}°  L:{}°", r.high, r.low), t.muted_style())),
            Line::from(Span::styled(
                format!("Humidity {}%  Wind {} km/h", r.humidity, r.wind_kmh),
                t.muted_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(current), chunks[1]);

        let mut forecast = vec![Line::from(Span::styled("5-Day Forecast", t.title_style()))];
        forecast.extend(r.forecast.iter().map(|d| {
            Line::from(vec![
                Span::styled(format!("{:<5}", d.day), t.text_style()),
                Span::raw(format!("{}  ", d.icon)),
                Span::styled(format!("{:>3}°", d.high), t.text_style()),
                Span::styled(format!(" {:>3}°", d.low), t.muted_style()),
            ])
        }));
        frame.render_widget(Paragraph::new(forecast), chunks[2]);
    }

    fn handle_key(&mut self, _key: KeyEvent, action: Option<Action>) -> AppAction {
        match action {
            Some(Action::MoveLeft) => {
                self.select_city((self.city_index + CITIES.len() - 1) % CITIES.len());
            }
            Some(Action::MoveRight) => self.select_city((self.city_index + 1) % CITIES.len()),
            Some(Action::Cancel) => return AppAction::Close,
            _ => {}
        }
        AppAction::None
    }

    fn handle_click(&mut self, column: u16, row: u16) -> AppAction {
        if let Some(index) = self.hits.hit(column, row) {
            self.select_city(index);
        }
        AppAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_weather_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let r = generate_weather("Tokyo", &mut rng);
            assert!((10..=34).contains(&r.temperature));
            assert_eq!(r.high, r.temperature + 3);
            assert_eq!(r.low, r.temperature - 4);
            assert!((20..=79).contains(&r.humidity));
            assert!((5..=24).contains(&r.wind_kmh));
            assert_eq!(r.forecast.len(), 5);
            for d in &r.forecast {
                assert!((r.temperature..=r.temperature + 9).contains(&d.high));
                assert!((r.temperature - 10..=r.temperature - 1).contains(&d.low));
            }
            assert!(CONDITIONS.iter().any(|(c, i)| *c == r.condition && *i == r.icon));
        }
    }

    #[test]
    fn test_forecast_days() {
        let r = generate_weather("Paris", &mut StdRng::seed_from_u64(1));
        let days: Vec<&str> = r.forecast.iter().map(|d| d.day).collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri"]);
    }

    #[test]
    fn test_select_city_regenerates() {
        let mut app = WeatherApp::new(StdRng::seed_from_u64(42));
        assert!(CITIES.contains(&app.city()));
        app.select_city(1);
        assert_eq!(app.city(), "London");
        assert_eq!(app.report().city, "London");
    }

    #[test]
    fn test_left_wraps_around() {
        let mut app = WeatherApp::new(StdRng::seed_from_u64(3));
        app.select_city(0);
        app.handle_key(
            KeyEvent::new(crossterm::event::KeyCode::Left, crossterm::event::KeyModifiers::NONE),
            Some(Action::MoveLeft),
        );
        assert_eq!(app.city(), "Paris");
    }
}
