// error module
mod error;
// finder module
mod finder;
// neighbors module
mod neighbors;
// persistent ladder nodes and finished paths
mod path;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::LadderError;
pub use finder::{validate_query, LadderFinder, SearchReport};
pub use neighbors::{NeighborGenerator, ALPHABET};
pub use path::LadderPath;
