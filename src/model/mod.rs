//! Model layer - centralized state management
//!
//! This module contains the presentation-side state types:
//! - `ModalStack` - Modal overlay management
//! - `Fade` - Result panel fade-in animation
//! - `QuoteRotator` - Timed quote rotation

pub mod fade;
pub mod modal;
pub mod quotes;
pub mod ui;

pub use fade::Fade;
pub use quotes::QuoteRotator;
