use crate::app::AppContext;
use crate::cli::NameArgs;

use super::{open_session, report};

pub fn handle_delete(ctx: &AppContext, args: &NameArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher();
    let mut session = open_session(ctx, &cipher)?;
    session.delete(&args.name)?;
    session.commit()?;

    report(
        ctx,
        &ctx.ui_context(false),
        &format!("Deleted crumb \"{}\"", args.name),
    );
    Ok(())
}
