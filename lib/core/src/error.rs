//! Error handling foundation for the readingroom platform.
//!
//! Only the `Result` type alias lives here. Crates define their own
//! domain error enums in their own error modules and propagate them as
//! `rootcause` reports. Inputs that fold into logged-out defaults
//! (absent tokens, unrecognized roles, malformed stored state) are not
//! errors at all and never reach this alias.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
