pub mod catalog;
pub mod config;
pub mod filter;
pub mod magnet;
pub mod presenter;
pub mod release;
pub mod session;
pub mod testing;

pub use catalog::{CatalogError, RawRecord, ReleaseCatalog, SqliteCatalog};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError,
};
pub use filter::{Exclusion, FilterSettings};
pub use magnet::{build_link, LinkDescriptor};
pub use presenter::{Presentation, Presenter, TableRow, TABLE_HEADERS};
pub use release::{normalize, NormalizedRecord, Rejection, ResultSet};
pub use session::{
    Clipboard, ClipboardError, Console, ResultSink, Session, SessionError, SessionOutcome,
    SessionState,
};
