pub mod date;
pub mod markdown_json;
pub mod text;
pub mod trend;

pub use date::*;
pub use markdown_json::*;
pub use text::*;
pub use trend::*;
