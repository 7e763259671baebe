use crate::app::AppContext;
use crate::cli::NameArgs;

use super::open_session;

pub fn handle_show(ctx: &AppContext, args: &NameArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher();
    let session = open_session(ctx, &cipher)?;
    println!("{}", session.show(&args.name)?);
    Ok(())
}
