//! Display language handling
//!
//! Every request gets a [`LocaleContext`] resolved from the session slot, the
//! user's stored preference, or the default. Language changes are persisted
//! through [`LocaleResolver::change_locale`].

mod resolver;
pub mod translations;
mod types;


pub use resolver::{ChangeResult, LocaleResolver};
pub use translations::{t, t_fmt};
pub use types::{Direction, Locale, LocaleContext, LocaleSource};
