use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::context::AppContext;
use crate::errors::AppResult;

pub fn handle(file: &str, compress: bool, force: bool, cfg: &Config, ctx: &mut AppContext) -> AppResult<()> {
    BackupLogic::backup(&ctx.pool, &cfg.database, file, compress, force)?;
    Ok(())
}
