use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::{Priority, RequestType};
use crate::model::entity::{MaintenanceRequest, RequestId, Team, TeamId};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub id: RequestId,
    pub title: String,
    pub start: NaiveDateTime,
    pub priority: Priority,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
    pub team_color: i32,
}

impl CalendarEvent {
    pub fn color(&self) -> &'static str {
        self.priority.color()
    }
}

/// Scheduled preventive requests as calendar events, ordered by start.
pub fn calendar_events(requests: &[MaintenanceRequest], teams: &[Team]) -> Vec<CalendarEvent> {
    let mut by_id: HashMap<TeamId, &Team> = HashMap::with_capacity(teams.len());
    for team in teams {
        by_id.entry(team.id).or_insert(team);
    }
    let mut events: Vec<CalendarEvent> = requests
        .iter()
        .filter(|r| r.request_type == RequestType::Preventive)
        .filter_map(|r| {
            let start = r.scheduled_at()?;
            let team = r.maintenance_team_id.and_then(|id| by_id.get(&id).copied());
            Some(CalendarEvent {
                id: r.id,
                title: r.name.clone(),
                start,
                priority: r.priority,
                team_id: r.maintenance_team_id,
                team_name: team.map(|t| t.name.clone()),
                team_color: team.map_or(0, |t| t.color),
            })
        })
        .collect();
    events.sort_by_key(|e| (e.start, e.id));
    events
}
