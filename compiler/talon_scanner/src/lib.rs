//! External scanner for the Talon grammar.
//!
//! The host parser consults this scanner for the tokens its ordinary rules
//! cannot express:
//!
//! - layout: NEWLINE, INDENT and DEDENT from line-start indentation,
//!   skipping comments and escaped line breaks;
//! - quoted strings (`'`, `"`, `` ` ``) whose bodies stop at `{`/`}` so the
//!   host can parse interpolated expressions, which may open nested strings;
//! - slash-delimited regex literals.
//!
//! Each call receives the set of token kinds the host would accept and
//! returns at most one token. Everything the scanner remembers between
//! calls is a [`ScannerState`] that the host snapshots per parse branch.
//!
//! Enable diagnostics with `RUST_LOG=talon_scanner=trace` after calling
//! [`init_tracing`].

mod content;
mod delimiter;
mod layout;
mod scanner;
mod state;
mod token_kind;

use std::sync::Once;

pub use delimiter::{Delimiter, DelimiterError};
pub use layout::TAB_WIDTH;
pub use scanner::Scanner;
pub use state::{
    ScannerState, StateError, MAX_DELIMITER_DEPTH, MAX_SERIALIZED_LEN, SERIALIZATION_BUFFER_SIZE,
};
pub use token_kind::{TokenKind, TokenSet};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host may already have installed a global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
