pub mod extract;
pub mod parse;
pub mod template;

pub use extract::{Extract, ParsedDefinitions};
pub use parse::{ParseError, parse_definitions, parse_related};
pub use template::render;
