//! Function composition utilities.
//!
//! - [`pipe!`](crate::pipe): Apply functions left-to-right (data flow style)
//!
//! ```
//! use contact_lifecycle::pipe;
//!
//! let present = |raw: &str| (!raw.is_empty()).then(|| raw.to_string());
//! assert_eq!(pipe!("Chuo", present), Some("Chuo".to_string()));
//! ```

mod pipe_macro;
