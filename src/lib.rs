pub mod canonical;
pub mod context;
pub mod irregular;
pub mod lookup;
pub mod matching;
pub mod resolve;
pub mod subtag;
pub mod taggy;

pub use canonical::{MAX_TAG_LEN, TagError, canonic_tag};
pub use context::Context;
pub use matching::extended_match;
pub use resolve::Pool;
pub use subtag::{SubtagClass, classify, subtags};
pub use taggy::{Taggy, TaggyBuilder};
