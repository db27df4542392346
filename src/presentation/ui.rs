use crate::application::{App, AppMode, FormField, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Calculator => render_calculator(f, app, chunks[1]),
        Screen::Products => render_products(f, app, chunks[1]),
        Screen::Planets => render_planets(f, app, chunks[1]),
    }

    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::ProductForm) {
        render_product_form(f, app);
    }

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let selected = match app.screen {
        Screen::Calculator => 0,
        Screen::Products => 1,
        Screen::Planets => 2,
    };

    let tabs = Tabs::new(vec!["Calculator", "Products", "Planets"])
        .select(selected)
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_calculator(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let input = Paragraph::new(app.calc_input.as_str())
        .block(Block::default().borders(Borders::ALL).title("Expression"));
    f.render_widget(input, chunks[0]);

    // Cursor inside the input box, clamped to its width.
    let cursor_x = chunks[0].x + 1 + app.calc_input[..app.calc_cursor].chars().count() as u16;
    let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
    f.set_cursor_position((cursor_x.min(max_x), chunks[0].y + 1));

    let result_style = if app.calc_result == crate::domain::ERROR_MARKER {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };
    let result = Paragraph::new(app.calc_result.as_str())
        .style(result_style)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(result, chunks[1]);

    let reference = Paragraph::new(function_reference_text())
        .block(Block::default().borders(Borders::ALL).title("Functions"))
        .wrap(Wrap { trim: true });
    f.render_widget(reference, chunks[2]);
}

fn function_reference_text() -> String {
    [
        "Operators: + - * / % and parentheses. Unary minus supported.",
        "",
        "SIN COS TAN          degrees in        ASIN ACOS ATAN  degrees out",
        "LOG (natural) LOG10  EXP  SQRT  ABS",
        "POW(a,b)  MOD(a,b)  FACT(n)",
        "MEAN(...)  VAR(...)  STD(...)   population statistics",
        "",
        "Enter: use result as next input    Esc: clear    Ctrl+Y: copy result",
    ]
    .join("\n")
}

fn render_products(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("ID").style(Style::default().fg(Color::Yellow)),
        Cell::from("Name").style(Style::default().fg(Color::Yellow)),
        Cell::from("Price").style(Style::default().fg(Color::Yellow)),
    ])
    .height(1);

    let mut rows = vec![header];
    for (index, product) in app.products.iter().enumerate() {
        let style = if index == app.product_selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };

        rows.push(
            Row::new(vec![
                Cell::from(product.id.to_string()),
                Cell::from(product.name.clone()),
                Cell::from(product.price.to_string()),
            ])
            .style(style)
            .height(1),
        );
    }

    let widths = [
        Constraint::Length(6),
        Constraint::Min(20),
        Constraint::Length(10),
    ];
    let title = format!("Products ({})", app.products.len());
    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_product_form(f: &mut Frame, app: &App) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 4,
        y: area.height / 3,
        width: area.width / 2,
        height: 6,
    };

    f.render_widget(Clear, popup_area);

    let active = Style::default().fg(Color::Black).bg(Color::Cyan);
    let inactive = Style::default();

    let name_style = if app.form_field == FormField::Name {
        active
    } else {
        inactive
    };
    let price_style = if app.form_field == FormField::Price {
        active
    } else {
        inactive
    };

    let title = if app.editing_product_id.is_some() {
        "Edit Product"
    } else {
        "New Product"
    };

    let lines = vec![
        Line::styled(format!("Name:  {}", app.form_name), name_style),
        Line::styled(format!("Price: {}", app.form_price), price_style),
        Line::raw(""),
        Line::raw("Tab: switch field | Enter: save | Esc: cancel"),
    ];

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(form, popup_area);
}

fn render_planets(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = app
        .planets
        .iter()
        .enumerate()
        .map(|(index, planet)| {
            let style = if index == app.planet_selected {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(planet.name.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Planets"));
    f.render_widget(list, chunks[0]);

    render_planet_detail(f, app, chunks[1]);
}

fn render_planet_detail(f: &mut Frame, app: &App, area: Rect) {
    let featured = app
        .featured
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        Line::raw(format!("Featured today: {}", featured)),
        Line::raw(""),
    ];

    if let Some(planet) = app.selected_planet() {
        let accent = parse_hex_color(&planet.accent_end).unwrap_or(Color::Cyan);
        lines.push(Line::styled(
            planet.name.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            planet.subtitle.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::raw(""));
        lines.push(Line::raw(planet.description.clone()));
        lines.push(Line::raw(""));
        for url in &planet.images {
            lines.push(Line::styled(
                url.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}

/// Parses a "#rrggbb" accent string into a terminal color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        match (app.mode, app.screen) {
            (AppMode::ProductForm, _) => {
                "Tab: switch field | Enter: save | Esc: cancel".to_string()
            }
            (AppMode::Help, _) => {
                "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string()
            }
            (_, Screen::Calculator) => {
                "Type an expression | Enter: = | Esc: clear | Ctrl+Y: copy | Tab: next screen | F1: help | Ctrl+Q: quit"
                    .to_string()
            }
            (_, Screen::Products) => {
                "a: add | e: edit | d: delete | r: reload | Ctrl+E: export CSV | Tab: next screen | q: quit"
                    .to_string()
            }
            (_, Screen::Planets) => {
                "↑↓/jk: browse | f: reshuffle featured | Tab: next screen | q: quit".to_string()
            }
        }
    };

    let style = match app.mode {
        AppMode::Normal => Style::default(),
        AppMode::ProductForm => Style::default().fg(Color::Yellow),
        AppMode::Help => Style::default().fg(Color::Cyan),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "scitui Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"SCITUI REFERENCE

=== SCREENS ===
Tab             Cycle Calculator -> Products -> Planets
F1              Show this help
Ctrl+Q          Quit from anywhere
q               Quit (Products and Planets screens)

=== CALCULATOR ===
Type any infix expression; the result updates on every keystroke.
Enter           Compute and use the result as the next input
Esc             Clear input and result
Backspace       Delete before the cursor
Left/Right      Move the cursor
Ctrl+Y          Copy the result to the clipboard

Operators: + - * / % with standard precedence, unary minus,
parentheses, and the display glyphs × ÷.

Functions (case insensitive):
SIN(x) COS(x) TAN(x)      Trigonometry, x in degrees
ASIN(x) ACOS(x) ATAN(x)   Inverse trigonometry, result in degrees
LOG(x)                    Natural logarithm
LOG10(x)                  Base-10 logarithm
EXP(x)                    e raised to x
SQRT(x)  ABS(x)           Square root, absolute value
POW(a,b)                  a raised to b
MOD(a,b)                  Remainder of a / b
FACT(n)                   Factorial; truncates n, negative gives 0
MEAN(...)                 Average of the arguments
VAR(...)                  Population variance
STD(...)                  Population standard deviation

Anything that cannot be evaluated shows as "Error".

=== PRODUCTS ===
Up/Down or j/k  Move selection
a               Add a product (name + price form)
e or Enter      Edit the selected product
d               Delete the selected product
r               Reload the list from disk
Ctrl+E          Export the list to products.csv
                The store lives in products.json and is created
                automatically on first save.

=== PLANETS ===
Up/Down or j/k  Browse the catalog
f or r          Pick two new featured planets

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll one line
Page Up/Down    Scroll five lines
Home            Jump to top
Esc/F1/?/q      Close this help window"#
        .to_string()
}
