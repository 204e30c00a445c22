//! Dashboard rendering

pub mod panels;
pub mod theme;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use sysview_core::config::ThresholdConfig;
use sysview_core::constants::{app, HEADER_BANNER};
use sysview_core::Snapshot;

const HEADER_HEIGHT: u16 = 10;
const FOOTER_HEIGHT: u16 = 3;

/// Everything the renderer needs for one frame
pub struct View<'a> {
    pub snapshot: Option<&'a Snapshot>,
    pub thresholds: &'a ThresholdConfig,
    pub show_header: bool,
    /// Last refresh failure, shown in the footer
    pub status: Option<&'a str>,
}

pub fn draw(frame: &mut Frame, view: &View) {
    let header_height = if view.show_header { HEADER_HEIGHT } else { 0 };
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(frame.area());

    if view.show_header {
        draw_header(frame, header);
    }

    match view.snapshot {
        Some(snapshot) => draw_panels(frame, main, snapshot, view.thresholds),
        None => frame.render_widget(
            Paragraph::new("Collecting system information...")
                .alignment(Alignment::Center)
                .style(Style::new().fg(theme::VALUE)),
            main,
        ),
    }

    draw_footer(frame, footer, view.status);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let banner_width = HEADER_BANNER
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    // 终端太窄时退化为单行标题
    let text = if (area.width as usize) < banner_width {
        Text::from("SYSTEM OVERVIEW")
    } else {
        Text::from(HEADER_BANNER)
    };

    let top_padding = area.height.saturating_sub(text.height() as u16) / 2;
    let [_, banner] =
        Layout::vertical([Constraint::Length(top_padding), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme::BANNER).add_modifier(Modifier::BOLD)),
        banner,
    );
}

fn draw_panels(frame: &mut Frame, area: Rect, snapshot: &Snapshot, thresholds: &ThresholdConfig) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let [system_area, cpu_area, gpu_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .areas(left);

    let [network_area, process_area, disk_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ])
    .areas(right);

    frame.render_widget(panels::system_info(&snapshot.system), system_area);
    frame.render_widget(panels::cpu_memory(&snapshot.cpu_memory, thresholds), cpu_area);
    frame.render_widget(panels::gpu(&snapshot.gpu, thresholds), gpu_area);
    frame.render_widget(panels::network(&snapshot.network), network_area);
    frame.render_widget(panels::processes(&snapshot.processes, thresholds), process_area);
    frame.render_widget(panels::disks(&snapshot.disks, thresholds), disk_area);
}

fn draw_footer(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(
        app::FOOTER,
        Style::new().fg(theme::FOOTER).add_modifier(Modifier::BOLD),
    ))];
    if let Some(status) = status {
        lines.push(Line::from(Span::styled(
            format!("Error: {}", status),
            Style::new().fg(theme::ERROR),
        )));
    } else {
        lines.insert(0, Line::default());
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
