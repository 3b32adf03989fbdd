pub mod context;
pub mod state;

pub use context::{MenuContext, provide_menu_context, use_menu_context};
pub use state::MenuState;
