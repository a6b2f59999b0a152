//! Interactive command-line session
//!
//! This module contains the console wrapper, the login gate and the main
//! menu, bridging terminal input with the service layer.

pub mod console;
pub mod login;
pub mod menu;
pub mod session;

pub use console::Console;
pub use login::login_gate;
pub use menu::{run_menu, MenuChoice};
pub use session::{run_session, SessionOutcome};
