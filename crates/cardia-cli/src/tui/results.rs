//! Results screen: gauge, breakdown, comparison and importance charts.
//!
//! Bars carry two decimal places by scaling values into the u64 domain by
//! 100; the text value printed on each bar shows the original float.

use cardia_core::charts::{self, ComparisonRow, RiskSlice};
use cardia_core::wire::{FeatureWeight, HealthyBaseline, Prediction};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph};

use super::app::App;

const RISK_RED: Color = Color::Rgb(239, 68, 68);
const HEALTHY_GREEN: Color = Color::Rgb(16, 185, 129);
const IMPORTANCE_AMBER: Color = Color::Rgb(245, 158, 11);

/// Chart sections, top to bottom. Scrolling skips sections from the top,
/// which keeps every chart reachable on short terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Score,
    Breakdown,
    Comparison,
    Importance,
}

impl Section {
    const fn constraint(self) -> Constraint {
        match self {
            Self::Score => Constraint::Length(5),
            Self::Breakdown => Constraint::Length(4),
            Self::Comparison => Constraint::Min(10),
            Self::Importance => Constraint::Length(8),
        }
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let Some(prediction) = &app.prediction else {
        f.render_widget(Paragraph::new("No prediction yet"), f.area());
        return;
    };

    let sections = visible_sections(app);
    let skip = usize::from(app.results_scroll).min(sections.len() - 1);
    let visible = &sections[skip..];

    let mut constraints: Vec<Constraint> =
        visible.iter().map(|section| section.constraint()).collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    for (chunk, section) in chunks.iter().zip(visible) {
        match section {
            Section::Score => draw_score(f, *chunk, prediction),
            Section::Breakdown => draw_breakdown(f, *chunk, prediction),
            Section::Comparison => {
                if let Some(baseline) = &app.baseline {
                    draw_comparison(f, *chunk, app, baseline);
                }
            }
            Section::Importance => {
                if let Some(weights) = &app.importance {
                    draw_importance(f, *chunk, weights);
                }
            }
        }
    }

    let footer = Paragraph::new("Up/Down sections   b back   q quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[chunks.len() - 1]);
}

/// Sections that have data to show, in display order.
fn visible_sections(app: &App) -> Vec<Section> {
    let mut sections = vec![Section::Score, Section::Breakdown];
    if app.baseline.is_some() {
        sections.push(Section::Comparison);
    }
    if app.importance.is_some() {
        sections.push(Section::Importance);
    }
    sections
}

fn draw_score(f: &mut Frame, area: Rect, prediction: &Prediction) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2)])
        .split(area);

    let level = prediction.risk_level;
    let (r, g, b) = level.color();
    let band = Color::Rgb(r, g, b);

    let ratio = (prediction.risk_score / 100.0).clamp(0.0, 1.0);
    let ratio = if ratio.is_finite() { ratio } else { 0.0 };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Risk Score "))
        .gauge_style(Style::default().fg(band))
        .ratio(ratio)
        .label(format!("{:.2}% ({level})", prediction.risk_score));
    f.render_widget(gauge, rows[0]);

    f.render_widget(
        Paragraph::new(Span::styled(
            level.summary(),
            Style::default().fg(band).add_modifier(Modifier::BOLD),
        )),
        rows[1],
    );
}

fn draw_breakdown(f: &mut Frame, area: Rect, prediction: &Prediction) {
    let [risk, no_risk] = charts::risk_breakdown(prediction.risk_score);
    let lines = vec![
        breakdown_line(&risk, RISK_RED),
        breakdown_line(&no_risk, HEALTHY_GREEN),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Risk Breakdown ")),
        area,
    );
}

fn breakdown_line(slice: &RiskSlice, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("\u{2588}\u{2588} ", Style::default().fg(color)),
        Span::raw(format!("{:<8} {:>6.2}%", slice.name, slice.value)),
    ])
}

fn draw_comparison(f: &mut Frame, area: Rect, app: &App, baseline: &HealthyBaseline) {
    let rows = charts::comparison_rows(&app.form, baseline);
    let max = rows
        .iter()
        .flat_map(|row| [scaled(row.yours), scaled(row.baseline)])
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" You vs. Healthy Baseline "),
        )
        .bar_width(7)
        .bar_gap(1)
        .group_gap(3)
        .max(max);
    for row in &rows {
        chart = chart.data(comparison_group(row));
    }
    f.render_widget(chart, area);
}

fn comparison_group(row: &ComparisonRow) -> BarGroup<'static> {
    BarGroup::default().label(Line::from(row.name)).bars(&[
        Bar::default()
            .value(scaled(row.yours))
            .text_value(format!("{:.2}", row.yours))
            .style(Style::default().fg(RISK_RED)),
        Bar::default()
            .value(scaled(row.baseline))
            .text_value(format!("{:.2}", row.baseline))
            .style(Style::default().fg(HEALTHY_GREEN)),
    ])
}

fn draw_importance(f: &mut Frame, area: Rect, weights: &[FeatureWeight]) {
    let max = weights
        .iter()
        .map(|weight| scaled(weight.importance))
        .max()
        .unwrap_or(0)
        .max(1);
    let bars: Vec<Bar<'_>> = weights
        .iter()
        .map(|weight| {
            Bar::default()
                .value(scaled(weight.importance))
                .label(Line::from(weight.name.as_str()))
                .text_value(format!("{:.2}%", weight.importance))
                .style(Style::default().fg(IMPORTANCE_AMBER))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Feature Importance "),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

/// Negative and non-finite values draw as empty bars; the text value still
/// reports them.
fn scaled(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = (value * 100.0).round() as u64;
        scaled
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use cardia_core::risk::RiskLevel;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scaling_keeps_two_decimals_and_floors_bad_values() {
        assert_eq!(scaled(41.69), 4169);
        assert_eq!(scaled(1.5), 150);
        assert_eq!(scaled(0.0), 0);
        assert_eq!(scaled(-0.5), 0);
        assert_eq!(scaled(f64::NAN), 0);
    }

    #[test]
    fn sections_appear_as_their_data_arrives() {
        let mut app = App::new();
        app.prediction = Some(Prediction {
            risk_score: 73.42,
            risk_level: RiskLevel::High,
            outcome: Some(1),
            probability: Some(0.734),
            healthy_probability: Some(0.266),
        });
        assert_eq!(visible_sections(&app), vec![Section::Score, Section::Breakdown]);

        app.baseline = Some(HealthyBaseline {
            age: 50.55,
            sex: 0.72,
            chest_pain_type: 1.38,
            exercise_angina: 0.13,
            oldpeak: 0.42,
            st_slope: 0.35,
        });
        app.importance = Some(vec![FeatureWeight {
            name: "ST slope".to_string(),
            importance: 41.69,
        }]);
        assert_eq!(
            visible_sections(&app),
            vec![
                Section::Score,
                Section::Breakdown,
                Section::Comparison,
                Section::Importance
            ]
        );
    }
}
