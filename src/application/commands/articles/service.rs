// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleCommandService {
    pub(super) store: Arc<dyn ArticleRepository>,
}

impl ArticleCommandService {
    pub fn new(store: Arc<dyn ArticleRepository>) -> Self {
        Self { store }
    }
}
