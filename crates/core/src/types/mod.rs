//! Value types shared across EduDex models
//!
//! | Type | API shape |
//! |------|-----------|
//! | [`LocalizedString`] | `{"nl": "...", "en": "..."}` localized text set |
//! | [`ValidationMessage`] | one entry of a `messages` array |

pub mod localized_string;
pub mod validation_message;

pub use localized_string::LocalizedString;
pub use validation_message::{Severity, ValidationMessage};
