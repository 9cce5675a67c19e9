//! In-memory directory store for engine tests.
//!
//! Mirrors the database layout: no foreign keys, unique email and phone
//! number on contacts, serial ids per table.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use common::{AppError, AppResult};
use directory_service_lib::repository::{
    CategoryRepository, ContactRepository, SubcategoryRepository,
};
use directory_service_lib::service::{
    CategoryManager, CategoryService, ContactManager, ContactService, SubcategoryManager,
    SubcategoryService,
};
use directory_service_lib::DirectoryServices;
use domain::{
    Category, Contact, ContactDetails, ContactDraft, ContactRequest, NewSubcategory, Subcategory,
    SubcategoryLink, MSG_CATEGORY_NOT_FOUND, MSG_CONTACT_NOT_FOUND, MSG_EMAIL_TAKEN,
    MSG_PHONE_TAKEN, MSG_SUBCATEGORY_NOT_FOUND,
};

struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn window(&self, offset: u64, limit: u64) -> Vec<&T> {
        self.rows
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .collect()
    }
}

#[derive(Default)]
struct State {
    categories: Table<Category>,
    subcategories: Table<Subcategory>,
    contacts: Table<Contact>,
}

impl State {
    fn details(&self, contact: &Contact) -> ContactDetails {
        ContactDetails {
            contact: contact.clone(),
            category: self.categories.rows.get(&contact.category_id).cloned(),
            subcategory: contact
                .subcategory_id
                .and_then(|id| self.subcategories.rows.get(&id).cloned()),
        }
    }

    fn check_unique(&self, draft: &ContactDraft, skip: Option<i32>) -> AppResult<()> {
        let others = self.contacts.rows.values().filter(|c| Some(c.id) != skip);
        for contact in others {
            if contact.email == draft.email {
                return Err(AppError::validation(MSG_EMAIL_TAKEN));
            }
            if contact.phone_number == draft.phone_number {
                return Err(AppError::validation(MSG_PHONE_TAKEN));
            }
        }
        Ok(())
    }

    /// Apply the subcategory link; returns the id and the row to insert, if any.
    fn link(&mut self, link: SubcategoryLink) -> (Option<i32>, Option<Subcategory>) {
        match link {
            SubcategoryLink::Unset => (None, None),
            SubcategoryLink::Existing(subcategory) => (Some(subcategory.id), None),
            SubcategoryLink::Create(record) => {
                let id = self.subcategories.next_id();
                let row = Subcategory::new(id, record.name, record.category_id);
                (Some(id), Some(row))
            }
        }
    }
}

/// Shared in-memory store implementing every repository trait.
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<Mutex<State>>,
}

impl InMemoryDirectory {
    /// Store holding the built-in categories and work subcategories.
    pub fn seeded() -> Self {
        let directory = Self::default();
        {
            let mut state = directory.lock();
            for name in ["work", "private", "other"] {
                let id = state.categories.next_id();
                state.categories.rows.insert(id, Category::new(id, name));
            }
            for name in ["boss", "client", "colleague"] {
                let id = state.subcategories.next_id();
                state.subcategories.rows.insert(id, Subcategory::new(id, name, 1));
            }
        }
        directory
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("directory state poisoned")
    }

    /// Engines wired to this store.
    pub fn services(&self) -> DirectoryServices {
        let store = Arc::new(self.clone());

        let categories: Arc<dyn CategoryService> = Arc::new(CategoryManager::new(store.clone()));
        let subcategories: Arc<dyn SubcategoryService> =
            Arc::new(SubcategoryManager::new(store.clone(), store.clone()));
        let contacts: Arc<dyn ContactService> = Arc::new(ContactManager::new(
            store,
            categories.clone(),
            subcategories.clone(),
        ));

        DirectoryServices {
            categories,
            subcategories,
            contacts,
        }
    }

    pub fn category_names(&self) -> Vec<String> {
        self.lock()
            .categories
            .rows
            .values()
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn subcategories(&self) -> Vec<Subcategory> {
        self.lock().subcategories.rows.values().cloned().collect()
    }

    pub fn contact_count(&self) -> usize {
        self.lock().contacts.rows.len()
    }

    /// Insert a bare contact row, bypassing the engine.
    pub fn insert_contact(&self, category_id: i32, subcategory_id: Option<i32>) -> i32 {
        let mut state = self.lock();
        let id = state.contacts.next_id();
        state.contacts.rows.insert(
            id,
            Contact {
                id,
                first_name: "Seed".to_string(),
                last_name: "Contact".to_string(),
                email: format!("seed{id}@example.com"),
                password: "secret".to_string(),
                phone_number: format!("900{id}"),
                date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).expect("valid date"),
                category_id,
                subcategory_id,
            },
        );
        id
    }
}

#[async_trait]
impl CategoryRepository for InMemoryDirectory {
    async fn count(&self) -> AppResult<u64> {
        Ok(self.lock().categories.rows.len() as u64)
    }

    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<Category>> {
        Ok(self
            .lock()
            .categories
            .window(offset, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        Ok(self.lock().categories.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .rows
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn create(&self, name: String) -> AppResult<Category> {
        let mut state = self.lock();
        let id = state.categories.next_id();
        let category = Category::new(id, name);
        state.categories.rows.insert(id, category.clone());
        Ok(category)
    }

    async fn update(&self, id: i32, name: String) -> AppResult<Category> {
        let mut state = self.lock();
        let category = state
            .categories
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(MSG_CATEGORY_NOT_FOUND))?;
        category.name = name;
        Ok(category.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.lock()
            .categories
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(MSG_CATEGORY_NOT_FOUND))
    }

    async fn count_contacts(&self, id: i32) -> AppResult<u64> {
        Ok(self
            .lock()
            .contacts
            .rows
            .values()
            .filter(|c| c.category_id == id)
            .count() as u64)
    }
}

#[async_trait]
impl SubcategoryRepository for InMemoryDirectory {
    async fn count(&self) -> AppResult<u64> {
        Ok(self.lock().subcategories.rows.len() as u64)
    }

    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<Subcategory>> {
        Ok(self
            .lock()
            .subcategories
            .window(offset, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Subcategory>> {
        Ok(self.lock().subcategories.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Subcategory>> {
        Ok(self
            .lock()
            .subcategories
            .rows
            .values()
            .find(|s| s.name == name)
            .cloned())
    }

    async fn create(&self, record: NewSubcategory) -> AppResult<Subcategory> {
        let mut state = self.lock();
        let id = state.subcategories.next_id();
        let subcategory = Subcategory::new(id, record.name, record.category_id);
        state.subcategories.rows.insert(id, subcategory.clone());
        Ok(subcategory)
    }

    async fn update(&self, id: i32, record: NewSubcategory) -> AppResult<Subcategory> {
        let mut state = self.lock();
        let subcategory = state
            .subcategories
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(MSG_SUBCATEGORY_NOT_FOUND))?;
        subcategory.name = record.name;
        subcategory.category_id = record.category_id;
        Ok(subcategory.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.lock()
            .subcategories
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(MSG_SUBCATEGORY_NOT_FOUND))
    }

    async fn count_contacts(&self, id: i32) -> AppResult<u64> {
        Ok(self
            .lock()
            .contacts
            .rows
            .values()
            .filter(|c| c.subcategory_id == Some(id))
            .count() as u64)
    }
}

#[async_trait]
impl ContactRepository for InMemoryDirectory {
    async fn count(&self) -> AppResult<u64> {
        Ok(self.lock().contacts.rows.len() as u64)
    }

    async fn page(&self, offset: u64, limit: u64) -> AppResult<Vec<ContactDetails>> {
        let state = self.lock();
        Ok(state
            .contacts
            .window(offset, limit)
            .into_iter()
            .map(|c| state.details(c))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ContactDetails>> {
        let state = self.lock();
        Ok(state.contacts.rows.get(&id).map(|c| state.details(c)))
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.lock().contacts.rows.values().any(|c| c.email == email))
    }

    async fn phone_exists(&self, phone_number: &str) -> AppResult<bool> {
        Ok(self
            .lock()
            .contacts
            .rows
            .values()
            .any(|c| c.phone_number == phone_number))
    }

    async fn create(&self, draft: ContactDraft) -> AppResult<Contact> {
        let mut state = self.lock();
        state.check_unique(&draft, None)?;

        let (subcategory_id, new_subcategory) = state.link(draft.subcategory);
        let id = state.contacts.next_id();
        let contact = Contact {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            password: draft.password,
            phone_number: draft.phone_number,
            date_of_birth: draft.date_of_birth,
            category_id: draft.category_id,
            subcategory_id,
        };

        if let Some(subcategory) = new_subcategory {
            state.subcategories.rows.insert(subcategory.id, subcategory);
        }
        state.contacts.rows.insert(id, contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: i32, draft: ContactDraft) -> AppResult<Contact> {
        let mut state = self.lock();
        if !state.contacts.rows.contains_key(&id) {
            return Err(AppError::not_found(MSG_CONTACT_NOT_FOUND));
        }
        state.check_unique(&draft, Some(id))?;

        let (subcategory_id, new_subcategory) = state.link(draft.subcategory);
        let contact = Contact {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            password: draft.password,
            phone_number: draft.phone_number,
            date_of_birth: draft.date_of_birth,
            category_id: draft.category_id,
            subcategory_id,
        };

        if let Some(subcategory) = new_subcategory {
            state.subcategories.rows.insert(subcategory.id, subcategory);
        }
        state.contacts.rows.insert(id, contact.clone());
        Ok(contact)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.lock()
            .contacts
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(MSG_CONTACT_NOT_FOUND))
    }
}

/// A valid contact request.
pub fn contact_request(
    email: &str,
    phone_number: &str,
    category: &str,
    subcategory: Option<&str>,
) -> ContactRequest {
    ContactRequest {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        phone_number: phone_number.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid date"),
        category_name: category.to_string(),
        subcategory_name: subcategory.map(str::to_string),
    }
}
