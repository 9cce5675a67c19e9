//! Category service - lifecycle and deletion safety for categories.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Category, CategoryRequest, PageQuery, PageWindow, Paginated, MSG_CATEGORY_IN_USE,
    MSG_CATEGORY_NAME_TAKEN, MSG_CATEGORY_NOT_FOUND,
};

use crate::repository::CategoryRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// List one page of categories
    async fn list(&self, query: PageQuery) -> AppResult<Paginated<Category>>;

    /// Get category by ID
    async fn get(&self, id: i32) -> AppResult<Category>;

    /// Look up a category by name; absence is not an error
    async fn get_by_name(&self, name: &str) -> AppResult<Option<Category>>;

    /// Create a new category
    async fn create(&self, request: CategoryRequest) -> AppResult<Category>;

    /// Rename an existing category
    async fn update(&self, id: i32, request: CategoryRequest) -> AppResult<Category>;

    /// Delete a category no contact refers to
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CategoryService using repository.
pub struct CategoryManager {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryManager {
    /// Create new category service instance with repository
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Fail when `name` belongs to a category other than `current`.
    async fn ensure_unique_name(&self, name: &str, current: Option<i32>) -> AppResult<()> {
        match self.repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != current => {
                Err(AppError::validation(MSG_CATEGORY_NAME_TAKEN))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn list(&self, query: PageQuery) -> AppResult<Paginated<Category>> {
        let window = PageWindow::new(self.repo.count().await?, query);

        let items = match window.fetch_range() {
            Some((offset, limit)) => self.repo.page(offset, limit).await?,
            None => Vec::new(),
        };

        Ok(window.into_page(items))
    }

    async fn get(&self, id: i32) -> AppResult<Category> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_CATEGORY_NOT_FOUND)
    }

    async fn get_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        self.repo.find_by_name(name).await
    }

    async fn create(&self, request: CategoryRequest) -> AppResult<Category> {
        request.validate()?;
        self.ensure_unique_name(&request.name, None).await?;

        let category = self.repo.create(request.name).await?;
        tracing::info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    async fn update(&self, id: i32, request: CategoryRequest) -> AppResult<Category> {
        request.validate()?;
        self.get(id).await?;
        self.ensure_unique_name(&request.name, Some(id)).await?;

        self.repo.update(id, request.name).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.get(id).await?;

        let dependents = self.repo.count_contacts(id).await?;
        if dependents > 0 {
            tracing::warn!(category_id = id, dependents, "Category delete blocked");
            return Err(AppError::conflict(MSG_CATEGORY_IN_USE));
        }

        self.repo.delete(id).await?;
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }
}
