//! Commands Layer
//!
//! Handlers the UI calls into. Core errors are logged in full and turned
//! into the short message shown to the user.

mod bulk_cmd;
mod export_cmd;
mod import_cmd;

pub use bulk_cmd::*;
pub use export_cmd::*;
pub use import_cmd::*;

use crate::interchange::InterchangeError;

fn user_error(e: InterchangeError) -> String {
    log::warn!("{}", e);
    e.user_message().to_string()
}
