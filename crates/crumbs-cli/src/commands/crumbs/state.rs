//! Moving crumbs between plaintext and encrypted.

use crate::app::AppContext;
use crate::cli::NameArgs;

use super::{open_session, report};

pub fn handle_encrypt(ctx: &AppContext, args: &NameArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher();
    let mut session = open_session(ctx, &cipher)?;
    session.encrypt(&args.name)?;
    session.commit()?;

    report(
        ctx,
        &ctx.ui_context(false),
        &format!("Encrypted crumb \"{}\"", args.name),
    );
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &NameArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher();
    let mut session = open_session(ctx, &cipher)?;
    session.decrypt(&args.name)?;
    session.commit()?;

    report(
        ctx,
        &ctx.ui_context(false),
        &format!("Decrypted crumb \"{}\"", args.name),
    );
    Ok(())
}
