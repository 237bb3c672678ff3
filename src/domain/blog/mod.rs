//! Blog module - post records and the aggregation engine.

mod errors;
mod post;
pub mod stats;

pub use errors::StatsError;
pub use post::Post;
pub use stats::{AuthorLikeTotal, AuthorPostCount};
