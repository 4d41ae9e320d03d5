pub mod cache;
pub mod minify;
pub mod visitor;

pub use cache::cache_control_middleware;
pub use minify::minify_html_middleware;
pub use visitor::{VISITOR_COOKIE_NAME, Visitor, visitor_middleware};
