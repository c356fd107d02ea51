//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod home;
pub mod input;
pub mod layout;
pub mod quit_dialog;
pub mod quote;
pub mod result;
pub mod splash;

pub use help_dialog::HelpDialog;
pub use home::draw_home_screen;
pub use input::InputComponent;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use quote::QuoteComponent;
pub use result::ResultPanel;
pub use splash::SplashComponent;
