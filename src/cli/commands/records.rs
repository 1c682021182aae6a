//! achievement / violation subcommands.

use crate::cli::commands::{confirm_delete, print_page, set_if};
use crate::cli::parser::{AchievementAction, ViolationAction};
use crate::core::context::AppContext;
use crate::core::crud;
use crate::core::records;
use crate::errors::AppResult;
use crate::models::enums::{AchievementLevel, Sanction, ViolationLevel};
use crate::models::{StudentAchievement, StudentViolation};
use crate::ui::messages::success;
use crate::utils::date::require_date;

pub fn achievement(action: &AchievementAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        AchievementAction::List { page, student } => {
            let state = &ctx.state;
            let items: Vec<StudentAchievement> = state
                .student_achievements
                .iter()
                .filter(|a| student.is_none_or(|s| a.student_id == s))
                .cloned()
                .collect();

            print_page(
                "Student achievements",
                &items,
                page.page,
                ctx.items_per_page,
                &["ID", "Student", "Achievement", "Level", "Date"],
                |a: &StudentAchievement| {
                    vec![
                        a.id.to_string(),
                        state.student_name(a.student_id).to_string(),
                        a.achievement_name.clone(),
                        a.level.to_string(),
                        a.date.to_string(),
                    ]
                },
            );
        }

        AchievementAction::Add {
            student,
            name,
            level,
            date,
        } => {
            let a = StudentAchievement {
                id: 0,
                student_id: *student,
                achievement_name: name.clone(),
                level: AchievementLevel::parse(level)?,
                date: require_date(date)?,
            };
            let change = records::add_achievement(&mut ctx.state, a)?;
            ctx.commit(&[change]);
            success(format!("Achievement added (id {}).", change.record_id));
        }

        AchievementAction::Edit {
            id,
            student,
            name,
            level,
            date,
        } => {
            let mut a = crud::find(&ctx.state.student_achievements, *id)?.clone();
            set_if(&mut a.student_id, student);
            set_if(&mut a.achievement_name, name);
            if let Some(l) = level {
                a.level = AchievementLevel::parse(l)?;
            }
            if let Some(d) = date {
                a.date = require_date(d)?;
            }
            let change = records::update_achievement(&mut ctx.state, a)?;
            ctx.commit(&[change]);
            success(format!("Achievement {id} updated."));
        }

        AchievementAction::Del(d) => {
            let name = crud::find(&ctx.state.student_achievements, d.id)?
                .achievement_name
                .clone();
            if confirm_delete(&format!("achievement '{name}'"), d.yes)? {
                let change = records::delete_achievement(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Achievement {} deleted.", d.id));
            }
        }
    }
    Ok(())
}

pub fn violation(action: &ViolationAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        ViolationAction::List { page, student } => {
            let state = &ctx.state;
            let items: Vec<StudentViolation> = state
                .student_violations
                .iter()
                .filter(|v| student.is_none_or(|s| v.student_id == s))
                .cloned()
                .collect();

            print_page(
                "Student violations",
                &items,
                page.page,
                ctx.items_per_page,
                &["ID", "Student", "Violation", "Level", "Date", "Sanction"],
                |v: &StudentViolation| {
                    vec![
                        v.id.to_string(),
                        state.student_name(v.student_id).to_string(),
                        v.violation_name.clone(),
                        v.level.to_string(),
                        v.date.to_string(),
                        v.sanction.to_string(),
                    ]
                },
            );
        }

        ViolationAction::Add {
            student,
            name,
            level,
            date,
            sanction,
        } => {
            let v = StudentViolation {
                id: 0,
                student_id: *student,
                violation_name: name.clone(),
                level: ViolationLevel::parse(level)?,
                date: require_date(date)?,
                sanction: Sanction::parse(sanction)?,
            };
            let change = records::add_violation(&mut ctx.state, v)?;
            ctx.commit(&[change]);
            success(format!("Violation added (id {}).", change.record_id));
        }

        ViolationAction::Edit {
            id,
            student,
            name,
            level,
            date,
            sanction,
        } => {
            let mut v = crud::find(&ctx.state.student_violations, *id)?.clone();
            set_if(&mut v.student_id, student);
            set_if(&mut v.violation_name, name);
            if let Some(l) = level {
                v.level = ViolationLevel::parse(l)?;
            }
            if let Some(d) = date {
                v.date = require_date(d)?;
            }
            if let Some(s) = sanction {
                v.sanction = Sanction::parse(s)?;
            }
            let change = records::update_violation(&mut ctx.state, v)?;
            ctx.commit(&[change]);
            success(format!("Violation {id} updated."));
        }

        ViolationAction::Del(d) => {
            let name = crud::find(&ctx.state.student_violations, d.id)?
                .violation_name
                .clone();
            if confirm_delete(&format!("violation '{name}'"), d.yes)? {
                let change = records::delete_violation(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Violation {} deleted.", d.id));
            }
        }
    }
    Ok(())
}
