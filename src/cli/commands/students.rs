//! student / transfer subcommands, including spreadsheet import.

use crate::cli::commands::{confirm_delete, print_page, set_if};
use crate::cli::parser::{StudentAction, TransferAction};
use crate::core::context::AppContext;
use crate::core::crud;
use crate::core::import;
use crate::core::students;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::template::{TEMPLATE_FILE_NAME, write_student_template};
use crate::models::enums::{Gender, StudentStatus, TransferReason};
use crate::models::{Student, StudentTransfer};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::require_date;
use crate::utils::formatting::{date_or_dash, or_dash};
use std::path::{Path, PathBuf};

pub fn student(action: &StudentAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        StudentAction::List {
            page,
            class,
            search,
        } => {
            let state = &ctx.state;
            let items: Vec<Student> = students::search(state, *class, search.as_deref())
                .into_iter()
                .cloned()
                .collect();

            print_page(
                "Students",
                &items,
                page.page,
                ctx.items_per_page,
                &["ID", "NISN", "Name", "Gender", "Class", "Status", "Entry", "Exit", "WhatsApp"],
                |s: &Student| {
                    vec![
                        s.id.to_string(),
                        s.nisn.clone(),
                        s.name.clone(),
                        s.gender.to_string(),
                        state.class_name(s.class_id).to_string(),
                        s.status.to_string(),
                        s.entry_date.to_string(),
                        date_or_dash(s.exit_date),
                        or_dash(s.whatsapp.as_deref()),
                    ]
                },
            );
        }

        StudentAction::Add {
            nisn,
            name,
            gender,
            status,
            entry_date,
            class,
            whatsapp,
            photo,
        } => {
            let status = match status {
                Some(s) => StudentStatus::parse(s)?,
                None => StudentStatus::New,
            };
            let s = Student {
                id: 0,
                nisn: nisn.clone(),
                name: name.clone(),
                gender: Gender::parse(gender)?,
                status,
                entry_date: require_date(entry_date)?,
                exit_date: None,
                photo: photo.clone(),
                whatsapp: whatsapp.clone(),
                class_id: *class,
            };
            let change = students::add_student(&mut ctx.state, s)?;
            ctx.commit(&[change]);
            success(format!("Student added (id {}).", change.record_id));
        }

        StudentAction::Edit {
            id,
            nisn,
            name,
            gender,
            status,
            entry_date,
            class,
            whatsapp,
            photo,
        } => {
            let mut s = crud::find(&ctx.state.students, *id)?.clone();
            set_if(&mut s.nisn, nisn);
            set_if(&mut s.name, name);
            set_if(&mut s.class_id, class);
            if let Some(g) = gender {
                s.gender = Gender::parse(g)?;
            }
            if let Some(st) = status {
                s.status = StudentStatus::parse(st)?;
            }
            if let Some(d) = entry_date {
                s.entry_date = require_date(d)?;
            }
            if whatsapp.is_some() {
                s.whatsapp = whatsapp.clone();
            }
            if photo.is_some() {
                s.photo = photo.clone();
            }
            let change = students::update_student(&mut ctx.state, s)?;
            ctx.commit(&[change]);
            success(format!("Student {id} updated."));
        }

        StudentAction::Del(d) => {
            let name = crud::find(&ctx.state.students, d.id)?.name.clone();
            if confirm_delete(&format!("student '{name}'"), d.yes)? {
                let change = students::delete_student(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Student {} deleted.", d.id));
            }
        }

        StudentAction::Import { file } => {
            let path = Path::new(file);
            info(format!("Importing students from {}", path.display()));

            let sheet = import::read_sheet(path)?;
            let changes = import::import_students(&mut ctx.state, &sheet)?;

            if changes.is_empty() {
                warning("The file contains no student rows.");
                return Ok(());
            }

            ctx.commit(&changes);
            ttlog_or_warn(
                &ctx.pool.conn,
                "import",
                &path.to_string_lossy(),
                &format!("{} students imported", changes.len()),
            );
            success(format!("{} students imported successfully.", changes.len()));
        }

        StudentAction::Template { file, force } => {
            let path = file
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(TEMPLATE_FILE_NAME));
            ensure_writable(&path, *force)?;
            write_student_template(&ctx.state, &path)?;
        }
    }
    Ok(())
}

pub fn transfer(action: &TransferAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        TransferAction::List(p) => {
            let state = &ctx.state;
            print_page(
                "Student transfers",
                &state.student_transfers,
                p.page,
                ctx.items_per_page,
                &["ID", "Student", "Exit date", "Reason", "Notes"],
                |t: &StudentTransfer| {
                    vec![
                        t.id.to_string(),
                        state.student_name(t.student_id).to_string(),
                        t.exit_date.to_string(),
                        t.reason.to_string(),
                        or_dash(t.notes.as_deref()),
                    ]
                },
            );
        }

        TransferAction::Add {
            student,
            exit_date,
            reason,
            notes,
        } => {
            let t = StudentTransfer {
                id: 0,
                student_id: *student,
                exit_date: require_date(exit_date)?,
                reason: TransferReason::parse(reason)?,
                notes: notes.clone(),
            };
            let changes = students::add_transfer(&mut ctx.state, t)?;
            ctx.commit(&changes);
            success(format!(
                "Transfer recorded; {} is now {}.",
                ctx.state.student_name(*student),
                StudentStatus::Inactive
            ));
        }

        TransferAction::Edit {
            id,
            exit_date,
            reason,
            notes,
        } => {
            let mut t = crud::find(&ctx.state.student_transfers, *id)?.clone();
            if let Some(d) = exit_date {
                t.exit_date = require_date(d)?;
            }
            if let Some(r) = reason {
                t.reason = TransferReason::parse(r)?;
            }
            if notes.is_some() {
                t.notes = notes.clone();
            }
            let changes = students::update_transfer(&mut ctx.state, t)?;
            ctx.commit(&changes);
            success(format!("Transfer {id} updated."));
        }

        TransferAction::Del(d) => {
            let t = crud::find(&ctx.state.student_transfers, d.id)?;
            let label = format!("transfer of '{}'", ctx.state.student_name(t.student_id));
            if confirm_delete(&label, d.yes)? {
                let changes = students::delete_transfer(&mut ctx.state, d.id)?;
                ctx.commit(&changes);
                success(format!("Transfer {} deleted.", d.id));
            }
        }
    }
    Ok(())
}
