// Chatsieve: keyword, sentiment, and denylist filtering for chat messages.
//
// This is the library root. Each module corresponds to one layer of the
// classification pipeline, from text analysis up to the MessageFilter façade.

pub mod analysis;
pub mod collection;
pub mod config;
pub mod error;
pub mod filter;
pub mod message;
pub mod output;
pub mod policy;
pub mod transform;

pub use error::{Result, SieveError};
pub use filter::censor::{censor_filter, with_censor};
pub use filter::options::FilterOptions;
pub use filter::{MessageFilter, Verdict};
pub use message::Message;
