//! Output post-processing.
//!
//! ```
//! use shell_bridge::output::OutputSanitizer;
//!
//! let raw = b"\x1b[01;34msrc\x1b[0m";
//! assert_eq!(OutputSanitizer::strip_ansi(raw), "src");
//! ```

mod sanitizer;

pub use sanitizer::OutputSanitizer;
