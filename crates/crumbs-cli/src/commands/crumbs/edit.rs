use crumbs_core::EditOutcome;

use crate::app::AppContext;
use crate::cli::NameArgs;
use crate::ui::print_warning;

use super::{open_session, report};

pub fn handle_edit(ctx: &AppContext, args: &NameArgs) -> anyhow::Result<()> {
    // Resolve the editor first so a missing one fails before any prompt.
    let editor = ctx.editor()?;
    let cipher = ctx.cipher();
    let mut session = open_session(ctx, &cipher)?;
    let ui = ctx.ui_context(false);

    if !session.store().has(&args.name) {
        print_warning(
            &ui,
            &format!("Crumb \"{}\" does not exist; creating it", args.name),
        );
    }

    let edit = session.edit(&args.name, &editor)?;
    session.commit()?;

    match edit.outcome {
        EditOutcome::Cancelled => print_warning(
            &ui,
            &format!("{} exited unsuccessfully; nothing saved", editor.program()),
        ),
        _ if edit.created => report(ctx, &ui, &format!("Created crumb \"{}\"", args.name)),
        EditOutcome::Changed => report(ctx, &ui, &format!("Updated crumb \"{}\"", args.name)),
        EditOutcome::Unchanged => report(ctx, &ui, "No changes"),
    }
    Ok(())
}
