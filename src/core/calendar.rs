use crate::core::crud::{self, Change, Operation, required};
use crate::core::state::{AppState, Collection};
use crate::errors::AppResult;
use crate::models::CalendarEvent;

fn check_event(e: &mut CalendarEvent) -> AppResult<()> {
    e.title = e.title.trim().to_string();
    required("title", &e.title)
}

pub fn add_event(state: &mut AppState, mut event: CalendarEvent) -> AppResult<Change> {
    check_event(&mut event)?;
    let id = crud::insert(&mut state.calendar_events, event);
    Ok(Change::new(Collection::CalendarEvents, Operation::Add, id))
}

pub fn update_event(state: &mut AppState, mut event: CalendarEvent) -> AppResult<Change> {
    check_event(&mut event)?;
    let id = event.id;
    crud::replace(&mut state.calendar_events, event)?;
    Ok(Change::new(Collection::CalendarEvents, Operation::Edit, id))
}

pub fn delete_event(state: &mut AppState, id: i64) -> AppResult<Change> {
    crud::remove(&mut state.calendar_events, id)?;
    Ok(Change::new(Collection::CalendarEvents, Operation::Delete, id))
}

/// Events in chronological order.
pub fn agenda(state: &AppState) -> Vec<&CalendarEvent> {
    let mut events: Vec<&CalendarEvent> = state.calendar_events.iter().collect();
    events.sort_by_key(|e| (e.date, e.id));
    events
}
