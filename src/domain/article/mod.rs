pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::ArticleRepository;
pub use validation::{ValidationErrors, Violation, validate_article_fields};
pub use value_objects::{ArticleAuthor, ArticleContent, ArticleId, ArticleTitle};
