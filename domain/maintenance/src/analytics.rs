//! Read-only statistics over a fetched request collection.
//!
//! Every function is pure: the same inputs give the same output and nothing
//! is mutated. Requests that reference unloaded stages or teams are skipped.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{
    model::{
        entity::{MaintenanceRequest, Stage, Team},
        vo::{Priority, RequestType},
    },
    workflow::{classify_status, RequestStatus, StageIndex},
};

pub const DEFAULT_MONTHS_BACK: u32 = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub total: usize,
    pub preventive: usize,
    pub corrective: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityDuration {
    pub name: String,
    pub avg_duration: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_requests: usize,
    pub open_requests: usize,
    pub completed_requests: usize,
    pub overdue_requests: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub by_stage: Vec<CategoryCount>,
    pub by_priority: Vec<CategoryCount>,
    pub by_type: Vec<CategoryCount>,
    pub by_team: Vec<CategoryCount>,
    pub monthly_trend: Vec<MonthlyTrend>,
    pub avg_duration_by_priority: Vec<PriorityDuration>,
    pub kpis: Kpis,
}

impl Analytics {
    pub fn compute(
        requests: &[MaintenanceRequest],
        stages: &[Stage],
        teams: &[Team],
        now: NaiveDateTime,
    ) -> Self {
        Self {
            by_stage: count_by_stage(requests, stages),
            by_priority: count_by_priority(requests),
            by_type: count_by_type(requests),
            by_team: count_by_team(requests, teams),
            monthly_trend: monthly_trend(requests, DEFAULT_MONTHS_BACK, now.date()),
            avg_duration_by_priority: avg_duration_by_priority(requests),
            kpis: kpis(requests, stages, now),
        }
    }
}

pub fn count_by_stage(requests: &[MaintenanceRequest], stages: &[Stage]) -> Vec<CategoryCount> {
    let index = StageIndex::new(stages);
    stages
        .iter()
        .filter(|stage| index.is_first(stage))
        .map(|stage| CategoryCount {
            name: stage.name.clone(),
            count: requests.iter().filter(|r| r.stage_id == Some(stage.id)).count(),
        })
        .collect()
}

pub fn count_by_priority(requests: &[MaintenanceRequest]) -> Vec<CategoryCount> {
    Priority::ALL
        .iter()
        .map(|p| CategoryCount {
            name: p.label().to_string(),
            count: requests.iter().filter(|r| r.priority == *p).count(),
        })
        .collect()
}

pub fn count_by_type(requests: &[MaintenanceRequest]) -> Vec<CategoryCount> {
    RequestType::ALL
        .iter()
        .map(|t| CategoryCount {
            name: t.label().to_string(),
            count: requests.iter().filter(|r| r.request_type == *t).count(),
        })
        .collect()
}

pub fn count_by_team(requests: &[MaintenanceRequest], teams: &[Team]) -> Vec<CategoryCount> {
    teams
        .iter()
        .map(|team| CategoryCount {
            name: team.name.clone(),
            count: requests.iter().filter(|r| r.maintenance_team_id == Some(team.id)).count(),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    fn of(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn months_before(self, back: u32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 - back as i32;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    fn label(self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{:02}/{}", self.month, self.year))
    }
}

/// Requests created in each of the last `months_back` calendar months,
/// oldest first, ending with the month of `today`.
pub fn monthly_trend(
    requests: &[MaintenanceRequest],
    months_back: u32,
    today: NaiveDate,
) -> Vec<MonthlyTrend> {
    let current = MonthKey::of(today);
    (0..months_back)
        .rev()
        .map(|back| {
            let key = current.months_before(back);
            let in_month: Vec<&MaintenanceRequest> = requests
                .iter()
                .filter(|r| r.created().is_some_and(|c| MonthKey::of(c) == key))
                .collect();
            let of_type = |t: RequestType| in_month.iter().filter(|r| r.request_type == t).count();
            MonthlyTrend {
                month: key.label(),
                total: in_month.len(),
                preventive: of_type(RequestType::Preventive),
                corrective: of_type(RequestType::Corrective),
            }
        })
        .collect()
}

/// Mean recorded duration per priority, one decimal. Priorities without
/// recorded durations report zero.
pub fn avg_duration_by_priority(requests: &[MaintenanceRequest]) -> Vec<PriorityDuration> {
    Priority::ALL
        .iter()
        .map(|p| {
            let durations: Vec<f64> = requests
                .iter()
                .filter(|r| r.priority == *p)
                .filter_map(MaintenanceRequest::recorded_duration)
                .collect();
            let avg = if durations.is_empty() {
                0.0
            } else {
                durations.iter().sum::<f64>() / durations.len() as f64
            };
            PriorityDuration {
                name: p.label().to_string(),
                avg_duration: round_one_decimal(avg),
            }
        })
        .collect()
}

pub fn kpis(requests: &[MaintenanceRequest], stages: &[Stage], now: NaiveDateTime) -> Kpis {
    let index = StageIndex::new(stages);
    let mut kpis = Kpis {
        total_requests: requests.len(),
        ..Default::default()
    };
    for request in requests {
        match classify_status(request, &index) {
            RequestStatus::Open => kpis.open_requests += 1,
            RequestStatus::Completed => kpis.completed_requests += 1,
            RequestStatus::Unknown => {}
        }
        if request.is_overdue_at(now) {
            kpis.overdue_requests += 1;
        }
    }
    kpis
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
