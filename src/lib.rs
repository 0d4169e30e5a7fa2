//! Rule evaluation core for file-system context menus
//!
//! This library decides, for a given file-system selection, whether a
//! configured menu rule applies and what text its command templates resolve
//! to. It is the synchronous, I/O-free decision core that a shell-integration
//! layer drives: configuration loading, icon rendering and command execution
//! all live outside this crate.
//!
//! # Example
//!
//! ```
//! use shellrules::{PropertyStore, SelectionContext, Validator};
//!
//! // One store per evaluation pass, seeded with env.* properties.
//! let mut store = PropertyStore::new();
//!
//! // Snapshot of what the user selected; counts come from the caller.
//! let context = SelectionContext::new(
//!     vec!["/home/user/report.pdf".to_string()],
//!     1,
//!     0,
//! );
//! context.register_properties(&mut store);
//!
//! // Constraints attached to one menu rule.
//! let validator = Validator::new()
//!     .with_max_files(1)
//!     .with_max_directories(0)
//!     .with_file_extensions("pdf");
//!
//! if validator.validate(&context, &store) {
//!     let command = store.expand("open ${selection.path}");
//!     assert_eq!(command, "open /home/user/report.pdf");
//! }
//! ```
//!
//! # Wildcard matching
//!
//! ```
//! use shellrules::wildcard;
//!
//! let captures = wildcard::solve("abc*fg", "abcdefabcfg").expect("must match");
//! assert_eq!(captures[0].value, "defabc");
//! assert_eq!(wildcard::rebuild("abc*fg", &captures), "abcdefabcfg");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use error::{Error, Result};
pub use properties::PropertyStore;
pub use selection::SelectionContext;
pub use validator::Validator;
pub use wildcard::{Capture, WildcardKind};

/// Error types
pub mod error;

/// Property store and `${name}` template expansion
pub mod properties;

/// Selection snapshot and path string helpers
pub mod selection;

/// Rule constraint validation
pub mod validator;

/// Capturing wildcard pattern matching
pub mod wildcard;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber with default settings
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
