use crate::core::crud::{Change, Operation, required};
use crate::core::state::{AppState, Collection};
use crate::errors::AppResult;
use crate::models::School;

/// Replace the school identity.
pub fn update_school(state: &mut AppState, mut school: School) -> AppResult<Change> {
    school.npsn = school.npsn.trim().to_string();
    school.name = school.name.trim().to_string();
    required("npsn", &school.npsn)?;
    required("name", &school.name)?;

    school.id = state.school.id;
    let id = school.id;
    state.school = school;
    Ok(Change::new(Collection::School, Operation::Edit, id))
}
