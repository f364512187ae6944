pub mod lexer;
pub mod terms;
pub mod url;

pub use lexer::TermLexer;
pub use terms::{Terms, tokenize};
pub use url::{category_from_url, query_from_url};
