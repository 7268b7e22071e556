//! Text views. Every function returns the whole view so that it can be
//! printed at once.

use std::fmt::Write;

use chrono::NaiveDate;
use colored::{Color, ColoredString, Colorize};
use domain_maintenance::{
    analytics::{Analytics, CategoryCount},
    model::{
        entity::{Equipment, MaintenanceRequest, Stage},
        vo::{Board, CalendarEvent, ColumnTone, DashboardStats, EquipmentOverview, Priority},
    },
    workflow::StageIndex,
};
use serde::Serialize;

const BAR_WIDTH: usize = 30;

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn board(board: &Board) -> String {
    let mut out = String::new();
    for column in &board.columns {
        let header = format!("{} ({})", column.stage.name, column.requests.len());
        let _ = writeln!(out, "{}", tone(column.tone, &header));
        if column.requests.is_empty() {
            let _ = writeln!(out, "  {}", "empty".dimmed());
        }
        for request in &column.requests {
            let _ = writeln!(out, "  {}", card(request));
        }
    }
    if board.orphaned > 0 {
        let _ = writeln!(
            out,
            "{}",
            format!("{} request(s) sit in stages that are not loaded", board.orphaned).yellow()
        );
    }
    out
}

fn tone(tone: ColumnTone, text: &str) -> ColoredString {
    match tone {
        ColumnTone::Intake => text.blue().bold(),
        ColumnTone::Active => text.yellow().bold(),
        ColumnTone::Done => text.green().bold(),
        ColumnTone::Scrap => text.red().bold(),
    }
}

fn card(request: &MaintenanceRequest) -> String {
    let mut line = format!(
        "#{:<4} {}  {}  {}",
        request.id,
        request.name,
        priority(request.priority),
        request.request_type.label().dimmed()
    );
    if request.is_overdue() {
        let _ = write!(line, "  {}", "overdue".red());
    }
    line
}

fn priority(priority: Priority) -> ColoredString {
    priority.label().color(hex(priority.color()))
}

/// `#rrggbb` as a terminal color.
fn hex(code: &str) -> Color {
    let channel = |range: std::ops::Range<usize>| {
        code.trim_start_matches('#')
            .get(range)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::TrueColor { r, g, b },
        _ => Color::White,
    }
}

pub fn moved(request: &MaintenanceRequest, stages: &[Stage]) -> String {
    format!(
        "#{} {} is now in {}\n",
        request.id,
        request.name,
        StageIndex::new(stages).name_of(request.stage_id).bold()
    )
}

pub fn analytics(analytics: &Analytics) -> String {
    let kpis = &analytics.kpis;
    let mut out = format!(
        "{}  total {}  open {}  completed {}  overdue {}\n",
        "Requests".bold(),
        kpis.total_requests,
        kpis.open_requests.to_string().blue(),
        kpis.completed_requests.to_string().green(),
        kpis.overdue_requests.to_string().red()
    );
    for (title, counts) in [
        ("By stage", &analytics.by_stage),
        ("By priority", &analytics.by_priority),
        ("By type", &analytics.by_type),
        ("By team", &analytics.by_team),
    ] {
        out.push_str(&histogram(title, counts));
    }

    let _ = writeln!(out, "\n{}", "Monthly trend".bold());
    for month in &analytics.monthly_trend {
        let _ = writeln!(
            out,
            "  {:<9} {:>4}  preventive {:>3}  corrective {:>3}",
            month.month, month.total, month.preventive, month.corrective
        );
    }

    let _ = writeln!(out, "\n{}", "Average duration by priority (hours)".bold());
    for duration in &analytics.avg_duration_by_priority {
        let _ = writeln!(out, "  {:<8} {:>6.1}", duration.name, duration.avg_duration);
    }
    out
}

fn histogram(title: &str, counts: &[CategoryCount]) -> String {
    let mut out = format!("\n{}\n", title.bold());
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    let width = counts.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    for count in counts {
        let bar = if max == 0 { 0 } else { count.count * BAR_WIDTH / max };
        let _ = writeln!(
            out,
            "  {:<width$} {:>4} {}",
            count.name,
            count.count,
            "█".repeat(bar).cyan()
        );
    }
    out
}

pub fn calendar(events: &[CalendarEvent]) -> String {
    if events.is_empty() {
        return format!("{}\n", "No scheduled preventive maintenance.".dimmed());
    }
    let mut out = String::new();
    let mut day: Option<NaiveDate> = None;
    for event in events {
        if day != Some(event.start.date()) {
            day = Some(event.start.date());
            let _ = writeln!(out, "{}", event.start.format("%a %Y-%m-%d").to_string().bold());
        }
        let _ = writeln!(
            out,
            "  {}  #{:<4} {}  {}  {}",
            event.start.format("%H:%M"),
            event.id,
            event.title,
            priority(event.priority),
            event.team_name.as_deref().unwrap_or("no team").dimmed()
        );
    }
    out
}

pub fn stats(stats: &DashboardStats) -> String {
    let rows = [
        ("Equipment", stats.total_equipment.to_string().normal()),
        ("  active", stats.active_equipment.to_string().green()),
        ("  scrapped", stats.scrapped_equipment.to_string().red()),
        ("Requests", stats.total_requests.to_string().normal()),
        ("  open", stats.open_requests.to_string().blue()),
        ("  completed", stats.completed_requests.to_string().green()),
        ("  urgent", stats.urgent_requests.to_string().red()),
    ];
    rows.iter().fold(String::new(), |mut out, (label, value)| {
        let _ = writeln!(out, "{label:<12} {value}");
        out
    })
}

pub fn equipment(overview: &[EquipmentOverview]) -> String {
    if overview.is_empty() {
        return format!("{}\n", "No equipment.".dimmed());
    }
    overview.iter().fold(String::new(), |mut out, row| {
        let open = match row.open_requests {
            0 => "no open requests".dimmed(),
            n => format!("{n} open").yellow(),
        };
        let _ = write!(
            out,
            "#{:<4} {}  {}  {}",
            row.equipment.id,
            row.equipment.name,
            row.equipment.location.as_deref().unwrap_or("-").dimmed(),
            open
        );
        if row.equipment.is_scrap {
            let _ = write!(out, "  {}", "scrapped".red());
        }
        out.push('\n');
        out
    })
}

pub fn scrapped(equipment: &Equipment) -> String {
    format!("#{} {} is scrapped\n", equipment.id, equipment.name)
}
