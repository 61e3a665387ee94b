//! Generic MAC-address, inclusive-interval, and input-classification
//! primitives used by higher-level device resolution tools.

pub mod classify;
pub mod format;
pub mod mac;
pub mod range;

pub use classify::{classify, normalize, InputKind};
pub use format::{group_id_digits, id_span_display, mac_span_display};
pub use mac::{MacAddr, ParseMacError};
pub use range::{all_matching, most_specific, Span};
