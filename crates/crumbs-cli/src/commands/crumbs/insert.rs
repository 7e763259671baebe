use crate::app::AppContext;
use crate::cli::InsertArgs;
use crate::helpers::join_cmdline;

use super::{open_session, report};

pub fn handle_insert(ctx: &AppContext, args: &InsertArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher();
    let mut session = open_session(ctx, &cipher)?;
    session.insert(&args.name, &join_cmdline(&args.cmdline), args.encrypt)?;
    session.commit()?;

    let what = if args.encrypt { "encrypted crumb" } else { "crumb" };
    report(
        ctx,
        &ctx.ui_context(false),
        &format!("Inserted {} \"{}\"", what, args.name),
    );
    Ok(())
}
