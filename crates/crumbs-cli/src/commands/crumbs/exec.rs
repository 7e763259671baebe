use crumbs_core::ShellRunner;

use crate::app::AppContext;
use crate::cli::ExecArgs;
use crate::constants::exit_codes;

use super::open_session;

/// Returns the exit code crumbs should terminate with.
pub fn handle_exec(ctx: &AppContext, args: &ExecArgs) -> anyhow::Result<i32> {
    let cipher = ctx.cipher();
    let session = open_session(ctx, &cipher)?;

    if args.dry_run {
        println!("{}", session.render(&args.name, &args.args)?);
        return Ok(exit_codes::SUCCESS);
    }
    Ok(session.exec(&args.name, &args.args, &ShellRunner::default())?)
}
