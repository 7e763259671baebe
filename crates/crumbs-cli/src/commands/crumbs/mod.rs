//! Handlers for the crumb commands.
//!
//! Each handler opens one [`Session`], runs one operation and commits.

mod delete;
mod edit;
mod exec;
mod insert;
mod list;
mod show;
mod state;

pub use delete::handle_delete;
pub use edit::handle_edit;
pub use exec::handle_exec;
pub use insert::handle_insert;
pub use list::handle_list;
pub use show::handle_show;
pub use state::{handle_decrypt, handle_encrypt};

use crumbs_core::{Cipher, Session};

use crate::app::AppContext;
use crate::ui::{badge, print, Badge, UiContext};

fn open_session<'c>(ctx: &AppContext, cipher: &'c dyn Cipher) -> anyhow::Result<Session<'c>> {
    let session = Session::open(ctx.store_path()?, cipher)?;
    tracing::debug!(
        store = %session.path().display(),
        crumbs = session.store().len(),
        "store opened"
    );
    Ok(session)
}

/// Confirm a completed change on stdout unless `--quiet`.
fn report(ctx: &AppContext, ui: &UiContext, message: &str) {
    if ctx.quiet() {
        return;
    }
    if ui.mode.is_pretty() {
        print(ui, &badge(ui, Badge::Ok, message));
    } else {
        print(ui, message);
    }
}
