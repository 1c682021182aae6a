use crate::core::context::AppContext;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(print: bool, ctx: &mut AppContext) -> AppResult<()> {
    if print {
        LogLogic::print_log(&ctx.pool)?;
    }

    Ok(())
}
