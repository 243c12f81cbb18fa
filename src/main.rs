//! An always-on-top overlay showing where the mouse cursor is.
//!
//! Shows global desktop coordinates alongside the coordinates relative to
//! the monitor under the cursor.

use bevy::app::AppExit;
use showcoords::core;

fn main() -> AppExit {
    let cli_args = core::platform::get_cli_args();
    match core::run_app(cli_args) {
        Ok(exit) => exit,
        Err(error) => core::platform::handle_error(error),
    }
}
