//! Contact repository implementation.
//!
//! Writes run inside a single transaction so that a subcategory created for
//! the "other" policy is only kept when the contact referencing it is stored.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
    TransactionTrait,
};

use super::entities::category::{Entity as CategoryEntity, Model as CategoryModel};
use super::entities::contact::{self, ActiveModel, Entity as ContactEntity, Model as ContactModel};
use super::entities::subcategory::{self, Entity as SubcategoryEntity};
use super::subcategory_repository::new_subcategory_model;
use common::{AppError, AppResult, OptionExt};
use domain::{
    Category, Contact, ContactDetails, ContactDraft, Subcategory, SubcategoryLink,
    MSG_CONTACT_NOT_FOUND, MSG_EMAIL_TAKEN, MSG_PHONE_TAKEN,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Contact repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Count all contacts
    async fn count(&self) -> AppResult<u64>;

    /// Fetch a window of contacts in id order, with their category and subcategory
    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<ContactDetails>>;

    /// Find contact by ID, with its category and subcategory
    async fn find_by_id(&self, id: i32) -> AppResult<Option<ContactDetails>>;

    /// Check whether any contact uses the email
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Check whether any contact uses the phone number
    async fn phone_exists(&self, phone_number: &str) -> AppResult<bool>;

    /// Store a new contact, creating its subcategory first when the draft asks for it
    async fn create(&self, draft: ContactDraft) -> AppResult<Contact>;

    /// Overwrite every mutable field of an existing contact
    async fn update(&self, id: i32, draft: ContactDraft) -> AppResult<Contact>;

    /// Delete contact by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ContactRepository
pub struct ContactStore {
    db: DatabaseConnection,
}

impl ContactStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach category and subcategory records to each contact.
    async fn enrich(
        &self,
        rows: Vec<(ContactModel, Option<CategoryModel>)>,
    ) -> AppResult<Vec<ContactDetails>> {
        let mut subcategory_ids: Vec<i32> =
            rows.iter().filter_map(|(c, _)| c.subcategory_id).collect();
        subcategory_ids.sort_unstable();
        subcategory_ids.dedup();

        let subcategories: HashMap<i32, Subcategory> = if subcategory_ids.is_empty() {
            HashMap::new()
        } else {
            SubcategoryEntity::find()
                .filter(subcategory::Column::Id.is_in(subcategory_ids))
                .all(&self.db)
                .await
                .map_err(AppError::from)?
                .into_iter()
                .map(|m| (m.id, Subcategory::from(m)))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|(model, category)| {
                let subcategory = model
                    .subcategory_id
                    .and_then(|id| subcategories.get(&id).cloned());
                ContactDetails {
                    contact: Contact::from(model),
                    category: category.map(Category::from),
                    subcategory,
                }
            })
            .collect())
    }

    async fn write<F>(&self, op: F) -> AppResult<Contact>
    where
        F: for<'a> FnOnce(
                &'a DatabaseTransaction,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<Contact>> + Send + 'a>,
            > + Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        match op(&txn).await {
            Ok(contact) => {
                txn.commit().await.map_err(map_write_error)?;
                Ok(contact)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ContactRepository for ContactStore {
    async fn count(&self) -> AppResult<u64> {
        ContactEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<ContactDetails>> {
        let rows = ContactEntity::find()
            .find_also_related(CategoryEntity)
            .order_by_asc(contact::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        self.enrich(rows).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ContactDetails>> {
        let row = ContactEntity::find_by_id(id)
            .find_also_related(CategoryEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match row {
            Some(row) => Ok(self.enrich(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let count = ContactEntity::find()
            .filter(contact::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn phone_exists(&self, phone_number: &str) -> AppResult<bool> {
        let count = ContactEntity::find()
            .filter(contact::Column::PhoneNumber.eq(phone_number))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn create(&self, draft: ContactDraft) -> AppResult<Contact> {
        self.write(|txn| {
            Box::pin(async move {
                let subcategory_id = link_subcategory(txn, draft.subcategory).await?;

                let active_model = ActiveModel {
                    first_name: Set(draft.first_name),
                    last_name: Set(draft.last_name),
                    email: Set(draft.email),
                    password: Set(draft.password),
                    phone_number: Set(draft.phone_number),
                    date_of_birth: Set(draft.date_of_birth),
                    category_id: Set(draft.category_id),
                    subcategory_id: Set(subcategory_id),
                    ..Default::default()
                };

                let model = active_model.insert(txn).await.map_err(map_write_error)?;
                Ok(Contact::from(model))
            })
        })
        .await
    }

    async fn update(&self, id: i32, draft: ContactDraft) -> AppResult<Contact> {
        self.write(move |txn| {
            Box::pin(async move {
                let existing = ContactEntity::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_not_found(MSG_CONTACT_NOT_FOUND)?;

                let subcategory_id = link_subcategory(txn, draft.subcategory).await?;

                let mut active: ActiveModel = existing.into();
                active.first_name = Set(draft.first_name);
                active.last_name = Set(draft.last_name);
                active.email = Set(draft.email);
                active.password = Set(draft.password);
                active.phone_number = Set(draft.phone_number);
                active.date_of_birth = Set(draft.date_of_birth);
                active.category_id = Set(draft.category_id);
                active.subcategory_id = Set(subcategory_id);

                let model = active.update(txn).await.map_err(map_write_error)?;
                Ok(Contact::from(model))
            })
        })
        .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ContactEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_CONTACT_NOT_FOUND));
        }

        Ok(())
    }
}

/// Resolve the subcategory id for a contact write, inserting a new
/// subcategory on the given connection when requested.
async fn link_subcategory<C>(conn: &C, link: SubcategoryLink) -> AppResult<Option<i32>>
where
    C: ConnectionTrait,
{
    match link {
        SubcategoryLink::Unset => Ok(None),
        SubcategoryLink::Existing(subcategory) => Ok(Some(subcategory.id)),
        SubcategoryLink::Create(record) => {
            let model = new_subcategory_model(record)
                .insert(conn)
                .await
                .map_err(AppError::from)?;
            tracing::info!(
                subcategory_id = model.id,
                name = %model.name,
                "Subcategory created for contact"
            );
            Ok(Some(model.id))
        }
    }
}

/// Report unique index violations on contacts with the same messages as the
/// up-front uniqueness checks.
fn map_write_error(err: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        if detail.contains("email") {
            return AppError::validation(MSG_EMAIL_TAKEN);
        }
        if detail.contains("phone") {
            return AppError::validation(MSG_PHONE_TAKEN);
        }
    }
    AppError::from(err)
}
