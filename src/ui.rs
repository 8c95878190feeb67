use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use furniture_catalog::{Bitmap, FurnitureRecord, Kind, Pattern, Showroom};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

const HELP_TEXT: &str = "This application demonstrates:\n\
    - Abstract Factory Pattern (furniture factories)\n\
    - Singleton Pattern (one directory and prototype store per showroom)\n\
    - Prototype Pattern (clone action)\n\n\
    Select different styles and furniture types to see them in action.";

pub struct App {
    pub showroom: Showroom,
    pub styles: Vec<String>,
    pub style_state: ListState,
    pub kind: Kind,
    pub current: Option<FurnitureRecord>,
    pub pattern: Pattern,
    pub status: String,
    pub show_help: bool,
}

impl App {
    pub fn new(showroom: Showroom) -> Self {
        let styles = showroom.directory().style_names();
        let default_style = showroom.config().default_style.to_lowercase();
        let kind = showroom.config().default_kind;

        let mut style_state = ListState::default();
        if !styles.is_empty() {
            let index = styles
                .iter()
                .position(|s| s.to_lowercase() == default_style)
                .unwrap_or(0);
            style_state.select(Some(index));
        }

        let mut app = Self {
            showroom,
            styles,
            style_state,
            kind,
            current: None,
            pattern: Pattern::AbstractFactory,
            status: String::new(),
            show_help: true,
        };
        app.refresh();
        app
    }

    pub fn selected_style(&self) -> Option<&str> {
        self.style_state
            .selected()
            .and_then(|i| self.styles.get(i))
            .map(String::as_str)
    }

    /// Rebuild the current record through the style's factory
    pub fn refresh(&mut self) {
        let Some(style) = self.selected_style().map(str::to_owned) else {
            self.current = None;
            return;
        };

        match self.showroom.build(&style, self.kind) {
            Ok(record) => {
                self.current = Some(record);
                self.status.clear();
            }
            Err(e) => {
                self.current = None;
                self.status = e.to_string();
            }
        }
        self.pattern = Pattern::AbstractFactory;
    }

    /// Replace the current record with a copy of the stored prototype
    pub fn clone_current(&mut self) {
        let Some(style) = self.selected_style().map(str::to_owned) else {
            return;
        };

        match self.showroom.clone_prototype(&style, self.kind) {
            Ok(record) => {
                self.status = format!("Cloned {} using the Prototype pattern!", record.name);
                self.current = Some(record);
                self.pattern = Pattern::Prototype;
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    pub fn next_style(&mut self) {
        let len = self.styles.len();
        if len == 0 {
            return;
        }
        let i = match self.style_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.style_state.select(Some(i));
        self.refresh();
    }

    pub fn previous_style(&mut self) {
        let len = self.styles.len();
        if len == 0 {
            return;
        }
        let i = match self.style_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.style_state.select(Some(i));
        self.refresh();
    }

    pub fn select_kind(&mut self, kind: Kind) {
        self.kind = kind;
        self.refresh();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// "Furniture Designer - Modern Chair (Abstract Factory Pattern)"
    pub fn title(&self) -> String {
        match self.selected_style() {
            Some(style) => format!(
                "Furniture Designer - {} {} ({})",
                style,
                self.kind,
                self.pattern.label()
            ),
            None => "Furniture Designer".to_string(),
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                // Any key dismisses the overlay; q still quits
                app.show_help = false;
                if !matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    continue;
                }
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('?') => app.toggle_help(),
                KeyCode::Down | KeyCode::Char('j') => app.next_style(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_style(),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.select_kind(app.kind.next()),
                KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                    app.select_kind(app.kind.previous())
                }
                KeyCode::Char('1') => app.select_kind(Kind::Chair),
                KeyCode::Char('2') => app.select_kind(Kind::Sofa),
                KeyCode::Char('3') => app.select_kind(Kind::Table),
                KeyCode::Char('c') => app.clone_current(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // Controls
            Constraint::Min(0),     // Furniture panel
        ])
        .split(chunks[1]);

    render_controls(f, content_chunks[0], app);
    render_furniture(f, content_chunks[1], app);
    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help(f, f.size());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let color = match app.pattern {
        Pattern::AbstractFactory => Color::Cyan,
        Pattern::Prototype => Color::Magenta,
    };

    let header = Paragraph::new(Line::from(Span::styled(
        app.title(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_controls(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.styles.len() as u16 + 2),
            Constraint::Length(Kind::ALL.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let style_items: Vec<ListItem> = app
        .styles
        .iter()
        .map(|name| ListItem::new(name.clone()))
        .collect();

    let style_list = List::new(style_items)
        .block(Block::default().borders(Borders::ALL).title(" Style "))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(style_list, chunks[0], &mut app.style_state);

    let kind_lines: Vec<Line> = Kind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let selected = *kind == app.kind;
            let marker = if selected { "(•)" } else { "( )" };
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{} {} {}", i + 1, marker, kind), style))
        })
        .collect();

    let kinds = Paragraph::new(kind_lines)
        .block(Block::default().borders(Borders::ALL).title(" Furniture Type "));
    f.render_widget(kinds, chunks[1]);

    let clone_button = Paragraph::new(Line::from(vec![
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(" Clone Current Furniture"),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Prototype "));
    f.render_widget(clone_button, chunks[2]);
}

fn render_furniture(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Furniture ");

    let Some(record) = &app.current else {
        f.render_widget(Paragraph::new("Nothing selected").block(block), area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let image = if record.image.is_placeholder() {
        Paragraph::new("(no image)").alignment(Alignment::Center)
    } else {
        Paragraph::new(image_lines(&record.image, chunks[0].width, chunks[0].height))
            .alignment(Alignment::Center)
    };
    f.render_widget(image, chunks[0]);

    let mut lines = vec![
        Line::from(Span::styled(
            record.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(record.description.clone()),
        Line::from(Span::styled(
            record.price_label(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(record.attributes.detail_lines().into_iter().map(Line::from));

    let details = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(details, chunks[1]);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if !app.status.is_empty() {
        status_spans.push(Span::styled(
            format!(" {} ", app.status),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" | "));
    }

    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Style | "));
    status_spans.push(Span::styled("←/→ 1-3", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Type | "));
    status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Clone | "));
    status_spans.push(Span::styled("?", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Help | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);

    let help = Paragraph::new(HELP_TEXT)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Design Patterns Demonstration "),
        );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Downsample a bitmap into rows of "▀" cells: foreground is the upper
/// pixel, background the lower one.
pub fn image_lines(bitmap: &Bitmap, cols: u16, rows: u16) -> Vec<Line<'static>> {
    if bitmap.width == 0 || bitmap.height == 0 || cols == 0 || rows == 0 {
        return Vec::new();
    }

    // Scale to fit, keeping aspect; each cell is one pixel wide, two tall
    let scale = f64::max(
        bitmap.width as f64 / cols as f64,
        bitmap.height as f64 / (rows as f64 * 2.0),
    );
    let out_w = ((bitmap.width as f64 / scale).floor() as u32).max(1);
    let out_h = ((bitmap.height as f64 / scale).floor() as u32).max(1);

    let sample = |x: u32, y: u32| -> Color {
        let sx = ((x as f64 * scale) as u32).min(bitmap.width - 1);
        let sy = ((y as f64 * scale) as u32).min(bitmap.height - 1);
        match bitmap.rgb_at(sx, sy) {
            Some((r, g, b)) => Color::Rgb(r, g, b),
            None => Color::Reset,
        }
    };

    (0..out_h)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..out_w)
                .map(|x| {
                    let bottom = if y + 1 < out_h { sample(x, y + 1) } else { Color::Reset };
                    Span::styled("▀", Style::default().fg(sample(x, y)).bg(bottom))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use furniture_catalog::CatalogConfig;

    fn app() -> App {
        let config = CatalogConfig::default().with_asset_root("/nonexistent/furniture-assets");
        App::new(Showroom::new(config).unwrap())
    }

    #[test]
    fn test_app_starts_on_default_selection() {
        let app = app();
        assert_eq!(app.selected_style(), Some("Modern"));
        assert_eq!(app.kind, Kind::Chair);
        assert!(app.show_help);
        assert_eq!(app.current.as_ref().unwrap().name, "Modern Chair");
        assert_eq!(app.title(), "Furniture Designer - Modern Chair (Abstract Factory Pattern)");
    }

    #[test]
    fn test_style_navigation_wraps() {
        let mut app = app();
        app.previous_style();
        assert_eq!(app.selected_style(), Some("Art Deco"));
        app.next_style();
        app.next_style();
        assert_eq!(app.selected_style(), Some("Victorian"));
        assert_eq!(app.current.as_ref().unwrap().name, "Victorian Chair");
    }

    #[test]
    fn test_clone_switches_pattern() {
        let mut app = app();
        app.select_kind(Kind::Sofa);
        app.clone_current();

        assert_eq!(app.pattern, Pattern::Prototype);
        assert_eq!(app.current.as_ref().unwrap().name, "Modern Sofa");
        assert_eq!(app.status, "Cloned Modern Sofa using the Prototype pattern!");
        assert_eq!(app.title(), "Furniture Designer - Modern Sofa (Prototype Pattern)");

        // Any new selection goes back through the factory
        app.select_kind(Kind::Table);
        assert_eq!(app.pattern, Pattern::AbstractFactory);
        assert!(app.status.is_empty());
    }

    #[test]
    fn test_image_lines_fit_area() {
        let bitmap = Bitmap::from_rgba(4, 4, [255u8, 0, 0, 255].repeat(16));
        let lines = image_lines(&bitmap, 10, 1);

        // 4x4 into 10 cols x 2 pixel rows → 2x2 pixels → one line of two cells
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::Rgb(255, 0, 0)));

        assert!(image_lines(&Bitmap::placeholder(), 10, 10).is_empty());
    }
}
