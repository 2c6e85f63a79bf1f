use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) store: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    pub fn new(store: Arc<dyn ArticleRepository>) -> Self {
        Self { store }
    }
}
