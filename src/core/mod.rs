pub mod front_matter;
pub mod slug;
pub mod title;

pub use front_matter::{FrontMatterRewriter, LineEnding, Rewrite};
pub use slug::{SlugGenerator, TokenRule, LANGUAGE_TOKENS};
pub use title::TitleExtractor;
