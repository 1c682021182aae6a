use crate::cli::commands::{confirm_delete, date_or_today, print_page};
use crate::cli::parser::AttendanceAction;
use crate::core::attendance;
use crate::core::context::AppContext;
use crate::core::crud;
use crate::errors::{AppError, AppResult};
use crate::models::TeacherAttendance;
use crate::models::enums::AttendanceStatus;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, color_for_attendance};

/// Parse `STUDENT_ID=STATUS` overrides.
fn parse_overrides(raw: &[String]) -> AppResult<Vec<(i64, AttendanceStatus)>> {
    raw.iter()
        .map(|item| {
            let (id, status) = item.split_once('=').ok_or_else(|| {
                AppError::Validation(format!("'{item}' is not STUDENT_ID=STATUS"))
            })?;
            let id: i64 = id.trim().parse().map_err(|_| {
                AppError::Validation(format!("'{}' is not a student id", id.trim()))
            })?;
            Ok((id, AttendanceStatus::parse(status)?))
        })
        .collect()
}

pub fn handle(action: &AttendanceAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        AttendanceAction::Submit {
            class,
            date,
            meeting,
            set,
        } => {
            let date = date_or_today(date)?;
            let overrides = parse_overrides(set)?;
            let changes =
                attendance::submit_class_attendance(&mut ctx.state, *class, date, *meeting, &overrides)?;
            ctx.commit(&changes);
            success(format!(
                "Attendance saved for {} students of {} on {} (meeting {}).",
                changes.len(),
                ctx.state.class_name(*class),
                date,
                meeting
            ));
        }

        AttendanceAction::List { date, class } => {
            let date = date_or_today(date)?;
            let state = &ctx.state;
            let mut records = attendance::records_for_day(state, date, *class);
            records.sort_by_key(|r| (r.meeting, r.student_id));

            header(format!("Attendance on {date}"));
            if records.is_empty() {
                info("No attendance recorded.");
                return Ok(());
            }

            for r in records {
                let class_name = state
                    .students
                    .iter()
                    .find(|s| s.id == r.student_id)
                    .map(|s| state.class_name(s.class_id))
                    .unwrap_or("N/A");
                println!(
                    "#{:<5} meeting {}  {:<28} {:<28} {}{}{}",
                    r.id,
                    r.meeting,
                    state.student_name(r.student_id),
                    class_name,
                    color_for_attendance(r.status),
                    r.status,
                    RESET
                );
            }
        }

        AttendanceAction::TeacherLog {
            teacher,
            subject,
            class,
            date,
            meetings,
        } => {
            let record = TeacherAttendance {
                id: 0,
                teacher_id: *teacher,
                subject_id: *subject,
                class_id: *class,
                date: date_or_today(date)?,
                meetings: *meetings,
            };
            let change = attendance::log_teacher_attendance(&mut ctx.state, record)?;
            ctx.commit(&[change]);
            success(format!("Teacher meetings logged (id {}).", change.record_id));
        }

        AttendanceAction::TeacherList { page, teacher } => {
            let state = &ctx.state;
            let mut items: Vec<TeacherAttendance> = state
                .teacher_attendance
                .iter()
                .filter(|r| teacher.is_none_or(|t| r.teacher_id == t))
                .cloned()
                .collect();
            items.sort_by_key(|r| (r.date, r.id));

            print_page(
                "Teacher attendance",
                &items,
                page.page,
                ctx.items_per_page,
                &["ID", "Date", "Teacher", "Subject", "Class", "Meetings"],
                |r: &TeacherAttendance| {
                    vec![
                        r.id.to_string(),
                        r.date.to_string(),
                        state.teacher_name(r.teacher_id).to_string(),
                        state.subject_name(r.subject_id).to_string(),
                        state.class_name(r.class_id).to_string(),
                        r.meetings.to_string(),
                    ]
                },
            );
        }

        AttendanceAction::TeacherDel(d) => {
            crud::require(&ctx.state.teacher_attendance, d.id)?;
            if confirm_delete(&format!("teacher attendance {}", d.id), d.yes)? {
                let change = attendance::delete_teacher_attendance(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Teacher attendance {} deleted.", d.id));
            }
        }
    }
    Ok(())
}
