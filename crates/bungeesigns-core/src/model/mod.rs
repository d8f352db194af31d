//! Value types built from the configuration documents
//!
//! - [`Location`]: A block position inside a named world
//! - [`ServerPing`]: A remote server whose status is shown on signs
//! - [`SignLayout`]: Named text template for a sign
//! - [`BungeeSign`]: A sign block bound to a server and a layout
//! - [`CustomVariable`]: A `%token%` placeholder expanded at render time

pub mod bungee_sign;
pub mod location;
pub mod server_ping;
pub mod sign_layout;
pub mod variable;

pub use bungee_sign::BungeeSign;
pub use location::Location;
pub use server_ping::{ServerPing, ServerStatus};
pub use sign_layout::SignLayout;
pub use variable::CustomVariable;
