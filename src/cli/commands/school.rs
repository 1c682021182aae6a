use crate::cli::commands::set_if;
use crate::cli::parser::SchoolAction;
use crate::core::context::AppContext;
use crate::core::school;
use crate::errors::AppResult;
use crate::models::enums::{SchoolDays, SchoolLevel};
use crate::ui::messages::{header, success};
use crate::utils::formatting::or_dash;

pub fn handle(action: &SchoolAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        SchoolAction::Show => {
            let s = &ctx.state.school;
            header("School identity");
            println!("{:<18}{}", "NPSN", or_dash(Some(s.npsn.as_str())));
            println!("{:<18}{}", "Name", or_dash(Some(s.name.as_str())));
            println!("{:<18}{}", "Level", s.level);
            println!("{:<18}{}", "Headmaster", or_dash(Some(s.headmaster.as_str())));
            println!("{:<18}{}", "Vice headmaster", or_dash(Some(s.vice_headmaster.as_str())));
            println!("{:<18}{}", "Address", or_dash(Some(s.address.as_str())));
            println!("{:<18}{}", "Logo", or_dash(Some(s.logo.as_str())));
            println!("{:<18}{}", "School days", s.format);
        }

        SchoolAction::Set {
            npsn,
            name,
            level,
            headmaster,
            vice_headmaster,
            address,
            logo,
            format,
        } => {
            let mut s = ctx.state.school.clone();
            set_if(&mut s.npsn, npsn);
            set_if(&mut s.name, name);
            set_if(&mut s.headmaster, headmaster);
            set_if(&mut s.vice_headmaster, vice_headmaster);
            set_if(&mut s.address, address);
            set_if(&mut s.logo, logo);
            if let Some(l) = level {
                s.level = SchoolLevel::parse(l)?;
            }
            if let Some(f) = format {
                s.format = SchoolDays::parse(f)?;
            }

            let change = school::update_school(&mut ctx.state, s)?;
            ctx.commit(&[change]);
            success("School identity saved.");
        }
    }
    Ok(())
}
