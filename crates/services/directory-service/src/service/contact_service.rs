//! Contact service - category policy, uniqueness and contact writes.
//!
//! Every create and update resolves the subcategory from the category name:
//! `work` requires an existing work subcategory, `other` reuses a subcategory
//! by name or creates one under `other`, and any other category carries none.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Category, CategoryPolicy, ContactDetails, ContactDraft, ContactRequest, NewSubcategory,
    PageQuery, PageWindow, Paginated, SubcategoryLink, CATEGORY_OTHER, CATEGORY_WORK,
    MSG_CONTACT_NOT_FOUND, MSG_EMAIL_TAKEN, MSG_PHONE_TAKEN, MSG_WORK_SUBCATEGORY_MISMATCH,
};

use super::{CategoryService, SubcategoryService};
use crate::repository::ContactRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Contact service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContactService: Send + Sync {
    /// List one page of contacts with their category and subcategory
    async fn list(&self, query: PageQuery) -> AppResult<Paginated<ContactDetails>>;

    /// Get contact by ID with its category and subcategory
    async fn get(&self, id: i32) -> AppResult<ContactDetails>;

    /// Create a contact
    async fn create(&self, request: ContactRequest) -> AppResult<ContactDetails>;

    /// Overwrite an existing contact
    async fn update(&self, id: i32, request: ContactRequest) -> AppResult<ContactDetails>;

    /// Delete a contact
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ContactService.
pub struct ContactManager {
    repo: Arc<dyn ContactRepository>,
    categories: Arc<dyn CategoryService>,
    subcategories: Arc<dyn SubcategoryService>,
}

impl ContactManager {
    pub fn new(
        repo: Arc<dyn ContactRepository>,
        categories: Arc<dyn CategoryService>,
        subcategories: Arc<dyn SubcategoryService>,
    ) -> Self {
        Self {
            repo,
            categories,
            subcategories,
        }
    }

    async fn category_named(&self, name: &str) -> AppResult<Category> {
        self.categories
            .get_by_name(name)
            .await?
            .ok_or_else(|| AppError::validation(format!("Category '{}' not found.", name)))
    }

    /// Decide which subcategory the contact links to.
    async fn resolve_subcategory(&self, request: &ContactRequest) -> AppResult<SubcategoryLink> {
        let policy = CategoryPolicy::for_category(&request.category_name);
        let name = policy.required_subcategory(request.subcategory_name.as_deref())?;

        match (policy, name) {
            (CategoryPolicy::Work, Some(name)) => {
                let work = self.category_named(CATEGORY_WORK).await?;
                match self.subcategories.get_by_name(name).await? {
                    Some(subcategory) if subcategory.category_id == work.id => {
                        Ok(SubcategoryLink::Existing(subcategory))
                    }
                    _ => Err(AppError::validation(MSG_WORK_SUBCATEGORY_MISMATCH)),
                }
            }
            (CategoryPolicy::Other, Some(name)) => {
                // Reused as-is, wherever it lives
                if let Some(subcategory) = self.subcategories.get_by_name(name).await? {
                    return Ok(SubcategoryLink::Existing(subcategory));
                }

                let other = self.category_named(CATEGORY_OTHER).await?;
                let record = NewSubcategory::new(name, other.id);
                self.subcategories.check_record(&record).await?;
                Ok(SubcategoryLink::Create(record))
            }
            _ => Ok(SubcategoryLink::Unset),
        }
    }

    async fn load(&self, id: i32) -> AppResult<ContactDetails> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_CONTACT_NOT_FOUND)
    }

    async fn reload(&self, id: i32) -> AppResult<ContactDetails> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Contact {} vanished after write", id)))
    }
}

#[async_trait]
impl ContactService for ContactManager {
    async fn list(&self, query: PageQuery) -> AppResult<Paginated<ContactDetails>> {
        let window = PageWindow::new(self.repo.count().await?, query);

        let items = match window.fetch_range() {
            Some((offset, limit)) => self.repo.page(offset, limit).await?,
            None => Vec::new(),
        };

        Ok(window.into_page(items))
    }

    async fn get(&self, id: i32) -> AppResult<ContactDetails> {
        self.load(id).await
    }

    async fn create(&self, request: ContactRequest) -> AppResult<ContactDetails> {
        request.validate()?;

        let subcategory = self.resolve_subcategory(&request).await?;

        if self.repo.email_exists(&request.email).await? {
            return Err(AppError::validation(MSG_EMAIL_TAKEN));
        }
        if self.repo.phone_exists(&request.phone_number).await? {
            return Err(AppError::validation(MSG_PHONE_TAKEN));
        }

        let category = self.category_named(&request.category_name).await?;

        let contact = self
            .repo
            .create(ContactDraft::from_request(request, category.id, subcategory))
            .await?;
        tracing::info!(
            contact_id = contact.id,
            category_id = contact.category_id,
            subcategory_id = ?contact.subcategory_id,
            "Contact created"
        );

        self.reload(contact.id).await
    }

    async fn update(&self, id: i32, request: ContactRequest) -> AppResult<ContactDetails> {
        self.load(id).await?;
        request.validate()?;

        let subcategory = self.resolve_subcategory(&request).await?;
        let category = self.category_named(&request.category_name).await?;

        let contact = self
            .repo
            .update(id, ContactDraft::from_request(request, category.id, subcategory))
            .await?;
        tracing::info!(contact_id = contact.id, "Contact updated");

        self.reload(contact.id).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.load(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(contact_id = id, "Contact deleted");
        Ok(())
    }
}
