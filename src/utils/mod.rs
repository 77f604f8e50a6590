pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{has_scheme, resolve_url, strip_query_and_fragment};
