use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{listing_json, print_listing};

use super::open_session;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher();
    let session = open_session(ctx, &cipher)?;
    let listing = session.list(args.prefix.as_deref(), args.detailed);

    let ui = ctx.ui_context(args.json);
    if ui.mode.is_json() {
        println!("{}", listing_json(&listing)?);
        return Ok(());
    }
    print_listing(&ui, &listing, args.detailed);
    Ok(())
}
