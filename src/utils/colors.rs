/// ANSI color helper utilities for terminal output.
use crate::core::sync::SyncStatus;
use crate::models::enums::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_attendance(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => GREEN,
        AttendanceStatus::Sick => YELLOW,
        AttendanceStatus::Excused => BLUE,
        AttendanceStatus::Absent => RED,
    }
}

pub fn color_for_sync(status: SyncStatus) -> &'static str {
    match status {
        SyncStatus::Idle => GREEN,
        SyncStatus::Pending => YELLOW,
        SyncStatus::Syncing => CYAN,
        SyncStatus::Failed => RED,
    }
}

/// Percentage colour: green from 90, yellow from 75, red below.
pub fn color_for_percentage(value: f64) -> &'static str {
    if value >= 90.0 {
        GREEN
    } else if value >= 75.0 {
        YELLOW
    } else {
        RED
    }
}

