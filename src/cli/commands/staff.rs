//! teacher / subject / class / assignment subcommands.

use crate::cli::commands::{confirm_delete, print_page, set_if};
use crate::cli::parser::{AssignmentAction, ClassAction, SubjectAction, TeacherAction};
use crate::core::context::AppContext;
use crate::core::crud;
use crate::core::staff;
use crate::errors::AppResult;
use crate::models::enums::{Gender, TeacherStatus};
use crate::models::{Class, Subject, SubjectTeacher, Teacher};
use crate::ui::messages::success;
use crate::utils::formatting::or_dash;

// ---------------------------
// Teachers
// ---------------------------

pub fn teacher(action: &TeacherAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        TeacherAction::List(p) => {
            print_page(
                "Teachers",
                &ctx.state.teachers,
                p.page,
                ctx.items_per_page,
                &["ID", "Name", "Gender", "Status", "NIP"],
                |t: &Teacher| {
                    vec![
                        t.id.to_string(),
                        t.name.clone(),
                        t.gender.to_string(),
                        t.status.to_string(),
                        or_dash(t.nip.as_deref()),
                    ]
                },
            );
        }

        TeacherAction::Add {
            name,
            gender,
            status,
            nip,
        } => {
            let t = Teacher {
                id: 0,
                name: name.clone(),
                gender: Gender::parse(gender)?,
                status: TeacherStatus::parse(status)?,
                nip: nip.clone(),
            };
            let change = staff::add_teacher(&mut ctx.state, t)?;
            ctx.commit(&[change]);
            success(format!("Teacher added (id {}).", change.record_id));
        }

        TeacherAction::Edit {
            id,
            name,
            gender,
            status,
            nip,
        } => {
            let mut t = crud::find(&ctx.state.teachers, *id)?.clone();
            set_if(&mut t.name, name);
            if let Some(g) = gender {
                t.gender = Gender::parse(g)?;
            }
            if let Some(s) = status {
                t.status = TeacherStatus::parse(s)?;
            }
            if nip.is_some() {
                t.nip = nip.clone();
            }
            let change = staff::update_teacher(&mut ctx.state, t)?;
            ctx.commit(&[change]);
            success(format!("Teacher {id} updated."));
        }

        TeacherAction::Del(d) => {
            let name = crud::find(&ctx.state.teachers, d.id)?.name.clone();
            if confirm_delete(&format!("teacher '{name}'"), d.yes)? {
                let change = staff::delete_teacher(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Teacher {} deleted.", d.id));
            }
        }
    }
    Ok(())
}

// ---------------------------
// Subjects
// ---------------------------

pub fn subject(action: &SubjectAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        SubjectAction::List(p) => {
            print_page(
                "Subjects",
                &ctx.state.subjects,
                p.page,
                ctx.items_per_page,
                &["ID", "Code", "Name"],
                |s: &Subject| vec![s.id.to_string(), s.code.clone(), s.name.clone()],
            );
        }

        SubjectAction::Add { code, name } => {
            let s = Subject {
                id: 0,
                code: code.clone(),
                name: name.clone(),
            };
            let change = staff::add_subject(&mut ctx.state, s)?;
            ctx.commit(&[change]);
            success(format!("Subject added (id {}).", change.record_id));
        }

        SubjectAction::Edit { id, code, name } => {
            let mut s = crud::find(&ctx.state.subjects, *id)?.clone();
            set_if(&mut s.code, code);
            set_if(&mut s.name, name);
            let change = staff::update_subject(&mut ctx.state, s)?;
            ctx.commit(&[change]);
            success(format!("Subject {id} updated."));
        }

        SubjectAction::Del(d) => {
            let name = crud::find(&ctx.state.subjects, d.id)?.name.clone();
            if confirm_delete(&format!("subject '{name}'"), d.yes)? {
                let change = staff::delete_subject(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Subject {} deleted.", d.id));
            }
        }
    }
    Ok(())
}

// ---------------------------
// Classes
// ---------------------------

pub fn class(action: &ClassAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        ClassAction::List(p) => {
            let state = &ctx.state;
            print_page(
                "Classes",
                &state.classes,
                p.page,
                ctx.items_per_page,
                &["ID", "Code", "Name", "Homeroom teacher", "Students"],
                |c: &Class| {
                    let students = state
                        .students
                        .iter()
                        .filter(|s| s.class_id == c.id && s.is_active())
                        .count();
                    vec![
                        c.id.to_string(),
                        c.code.clone(),
                        c.name.clone(),
                        state.teacher_name(c.homeroom_teacher_id).to_string(),
                        students.to_string(),
                    ]
                },
            );
        }

        ClassAction::Add {
            code,
            name,
            homeroom,
        } => {
            let c = Class {
                id: 0,
                code: code.clone(),
                name: name.clone(),
                homeroom_teacher_id: *homeroom,
            };
            let change = staff::add_class(&mut ctx.state, c)?;
            ctx.commit(&[change]);
            success(format!("Class added (id {}).", change.record_id));
        }

        ClassAction::Edit {
            id,
            code,
            name,
            homeroom,
        } => {
            let mut c = crud::find(&ctx.state.classes, *id)?.clone();
            set_if(&mut c.code, code);
            set_if(&mut c.name, name);
            set_if(&mut c.homeroom_teacher_id, homeroom);
            let change = staff::update_class(&mut ctx.state, c)?;
            ctx.commit(&[change]);
            success(format!("Class {id} updated."));
        }

        ClassAction::Del(d) => {
            let name = crud::find(&ctx.state.classes, d.id)?.name.clone();
            if confirm_delete(&format!("class '{name}'"), d.yes)? {
                let change = staff::delete_class(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Class {} deleted.", d.id));
            }
        }
    }
    Ok(())
}

// ---------------------------
// Assignments
// ---------------------------

pub fn assignment(action: &AssignmentAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        AssignmentAction::List {
            page,
            teacher,
            class,
        } => {
            let state = &ctx.state;
            let items: Vec<SubjectTeacher> = state
                .subject_teachers
                .iter()
                .filter(|a| teacher.is_none_or(|t| a.teacher_id == t))
                .filter(|a| class.is_none_or(|c| a.class_id == c))
                .cloned()
                .collect();

            print_page(
                "Teaching assignments",
                &items,
                page.page,
                ctx.items_per_page,
                &["ID", "Teacher", "Subject", "Class", "Meetings/week"],
                |a: &SubjectTeacher| {
                    vec![
                        a.id.to_string(),
                        state.teacher_name(a.teacher_id).to_string(),
                        state.subject_name(a.subject_id).to_string(),
                        state.class_name(a.class_id).to_string(),
                        a.meetings.to_string(),
                    ]
                },
            );
        }

        AssignmentAction::Add {
            teacher,
            subject,
            class,
            meetings,
        } => {
            let a = SubjectTeacher {
                id: 0,
                teacher_id: *teacher,
                subject_id: *subject,
                class_id: *class,
                meetings: *meetings,
            };
            let change = staff::add_assignment(&mut ctx.state, a)?;
            ctx.commit(&[change]);
            success(format!("Assignment added (id {}).", change.record_id));
        }

        AssignmentAction::Edit {
            id,
            teacher,
            subject,
            class,
            meetings,
        } => {
            let mut a = crud::find(&ctx.state.subject_teachers, *id)?.clone();
            set_if(&mut a.teacher_id, teacher);
            set_if(&mut a.subject_id, subject);
            set_if(&mut a.class_id, class);
            set_if(&mut a.meetings, meetings);
            let change = staff::update_assignment(&mut ctx.state, a)?;
            ctx.commit(&[change]);
            success(format!("Assignment {id} updated."));
        }

        AssignmentAction::Del(d) => {
            crud::require(&ctx.state.subject_teachers, d.id)?;
            if confirm_delete(&format!("assignment {}", d.id), d.yes)? {
                let change = staff::delete_assignment(&mut ctx.state, d.id)?;
                ctx.commit(&[change]);
                success(format!("Assignment {} deleted.", d.id));
            }
        }
    }
    Ok(())
}
