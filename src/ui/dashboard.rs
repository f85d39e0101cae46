use crate::model::{CalculationResult, Category, BENCHMARKS, DONATION_URL};
use crate::ui::app::{App, Field};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table, Wrap,
    },
    Frame,
};

const LEAF_DARK: Color = Color::Rgb(0x1E, 0x3A, 0x2B);
const LEAF_GREEN: Color = Color::Rgb(0x4C, 0xAF, 0x50);
const SELECT_BG: Color = Color::Rgb(0xC8, 0xE6, 0xC9);
const WARN_ORANGE: Color = Color::Rgb(0xE0, 0x8A, 0x3C);
const ERROR_RED: Color = Color::Rgb(0xC6, 0x28, 0x28);
const MUTED: Color = Color::Rgb(0x71, 0x71, 0x71);

const HEADER_STYLE: Style = Style::new().fg(LEAF_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(SELECT_BG)
    .fg(LEAF_DARK)
    .add_modifier(Modifier::BOLD);

const SLIDER_WIDTH: usize = 20;

pub fn draw_calculator(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(14),   // Inputs | Results
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_inputs(frame, columns[0], app);
    draw_results(frame, columns[1], app);

    draw_footer(
        frame,
        chunks[2],
        " ↑↓ Field | ←→ Adjust | PgUp/PgDn ×10 | Enter Calculate | Tab History | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Personal Carbon Emission Calculator | {} | {} calculations this session ",
        app.country,
        app.session.history().len()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected();

    let rows: Vec<Row> = Field::ALL
        .iter()
        .map(|&field| {
            let style = if field == selected {
                SELECTED_STYLE
            } else {
                Style::default()
            };

            let control = match (field.limits(), app.slider_value(field)) {
                (Some(limits), Some(value)) => slider_bar(limits.ratio(value), SLIDER_WIDTH),
                _ => "◄ ►".to_string(),
            };

            Row::new(vec![
                field.label().to_string(),
                app.field_value(field),
                control,
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(15),
        Constraint::Percentage(35),
    ];
    let header = Row::new(vec!["Input", "Value", ""]).style(HEADER_STYLE);

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Lifestyle ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(LEAF_GREEN)),
    );

    frame.render_widget(table, area);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = &app.last_error {
        let message = Paragraph::new(format!("Calculation failed: {error}"))
            .style(Style::default().fg(ERROR_RED))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Results ").borders(Borders::ALL));
        frame.render_widget(message, area);
        return;
    }

    let result = match &app.last_result {
        Some(r) => r,
        None => {
            let hint = Paragraph::new("Set your inputs, then press Enter to calculate.")
                .style(Style::default().fg(MUTED))
                .block(Block::default().title(" Results ").borders(Borders::ALL));
            frame.render_widget(hint, area);
            return;
        }
    };

    let chunks = Layout::vertical([
        Constraint::Length(9), // Breakdown table
        Constraint::Length(4), // Total + trees
        Constraint::Min(6),    // Comparison chart
    ])
    .split(area);

    draw_breakdown(frame, chunks[0], result);
    draw_summary(frame, chunks[1], result);
    draw_comparison(frame, chunks[2], result);
}

fn draw_breakdown(frame: &mut Frame, area: Rect, result: &CalculationResult) {
    let rows: Vec<Row> = result
        .breakdown()
        .shares()
        .into_iter()
        .map(|(category, share)| {
            Row::new(vec![
                category.to_string(),
                format!("{:.2} t", result.breakdown().get(category)),
                format!("{:.1}%", share * 100.0),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(30),
        Constraint::Percentage(25),
    ];
    let header = Row::new(vec!["Category", "CO2/year", "Share"]).style(HEADER_STYLE);

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Emission Breakdown ")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn draw_summary(frame: &mut Frame, area: Rect, result: &CalculationResult) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Total Emissions: "),
            Span::styled(
                format!("{:.2} tonnes CO2/year", result.total_emission_tonnes()),
                Style::default().fg(LEAF_DARK).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Plant "),
            Span::styled(
                format!("{} trees", result.trees_needed()),
                Style::default().fg(LEAF_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to offset it. Donate: "),
            Span::styled(DONATION_URL, Style::default().fg(MUTED)),
        ]),
    ];

    let summary = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(summary, area);
}

fn draw_comparison(frame: &mut Frame, area: Rect, result: &CalculationResult) {
    let mut bars = vec![bar(
        "You",
        result.total_emission_tonnes(),
        LEAF_GREEN,
    )];
    bars.extend(
        BENCHMARKS
            .iter()
            .map(|b| bar(b.label, b.tonnes, WARN_ORANGE)),
    );

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Your Emissions vs Averages (t/year) ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(2);

    frame.render_widget(chart, area);
}

/// Bar heights are hundredths of a tonne so two-decimal values keep their order.
fn bar(label: &'static str, tonnes: f64, color: Color) -> Bar<'static> {
    Bar::default()
        .label(Line::from(label))
        .value((tonnes * 100.0).round().max(0.0) as u64)
        .text_value(format!("{tonnes:.2}"))
        .style(Style::default().fg(color))
}

pub fn draw_history(frame: &mut Frame, app: &App) {
    let history = app.session.history();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(6),    // Entries
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(format!(" Calculation History ({} entries) ", history.len()))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    if history.is_empty() {
        let empty = Paragraph::new("No calculations yet.")
            .style(Style::default().fg(MUTED))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, chunks[1]);
    } else {
        let visible_rows = (chunks[1].height as usize).saturating_sub(3);

        let mut header_cells = vec!["#", "Total", "Trees"];
        header_cells.extend(Category::ALL.iter().map(|c| c.as_str()));
        let table_header = Row::new(header_cells).style(HEADER_STYLE);

        let rows: Vec<Row> = history
            .all()
            .enumerate()
            .skip(app.history_scroll_offset)
            .take(visible_rows)
            .map(|(i, result)| {
                let mut cells = vec![
                    format!("{}", i + 1),
                    format!("{:.2} t", result.total_emission_tonnes()),
                    result.trees_needed().to_string(),
                ];
                cells.extend(result.breakdown().iter().map(|(_, v)| format!("{v:.2}t")));
                Row::new(cells)
            })
            .collect();

        let mut widths = vec![
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Length(7),
        ];
        widths.extend(Category::ALL.iter().map(|_| Constraint::Min(8)));

        let table = Table::new(rows, widths)
            .header(table_header)
            .block(Block::default().title(" Most recent first ").borders(Borders::ALL));
        frame.render_widget(table, chunks[1]);

        if history.len() > visible_rows {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            let mut scrollbar_state =
                ScrollbarState::new(history.len()).position(app.history_scroll_offset);

            let scrollbar_area = Rect {
                x: chunks[1].x + chunks[1].width - 1,
                y: chunks[1].y + 2,
                width: 1,
                height: chunks[1].height - 3,
            };
            frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
        }
    }

    draw_footer(frame, chunks[2], " Esc Back | ↑↓ Scroll | q Quit ");
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Text slider: filled cells for `ratio` of `width`, the rest empty.
fn slider_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
