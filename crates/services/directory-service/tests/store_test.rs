//! Store tests against an in-memory sqlite database with every migration applied.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use common::{AppError, DatabaseConfig};
use directory_service_lib::infra::Database;
use directory_service_lib::repository::{
    CategoryRepository, CategoryStore, ContactRepository, ContactStore, SubcategoryRepository,
    SubcategoryStore,
};
use directory_service_lib::DirectoryServices;
use domain::{ContactDraft, NewSubcategory, PageQuery, SubcategoryLink};

async fn database() -> Database {
    // One pooled connection keeps the in-memory database alive for the whole test
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    Database::connect(&config).await.unwrap()
}

struct Stores {
    categories: CategoryStore,
    subcategories: SubcategoryStore,
    contacts: ContactStore,
}

impl Stores {
    fn new(conn: DatabaseConnection) -> Self {
        Self {
            categories: CategoryStore::new(conn.clone()),
            subcategories: SubcategoryStore::new(conn.clone()),
            contacts: ContactStore::new(conn),
        }
    }

    async fn category_id(&self, name: &str) -> i32 {
        self.categories.find_by_name(name).await.unwrap().unwrap().id
    }

    async fn subcategory_names(&self) -> Vec<String> {
        self.subcategories
            .page(0, 100)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect()
    }
}

fn draft(email: &str, phone_number: &str, category_id: i32, link: SubcategoryLink) -> ContactDraft {
    ContactDraft {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        phone_number: phone_number.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        category_id,
        subcategory: link,
    }
}

#[tokio::test]
async fn test_seed_data() {
    let stores = Stores::new(database().await.get_connection());

    let categories: Vec<String> = stores
        .categories
        .page(0, 10)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(categories, ["work", "private", "other"]);

    let work_id = stores.category_id("work").await;
    let subcategories = stores.subcategories.page(0, 10).await.unwrap();
    let names: Vec<&str> = subcategories.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["boss", "client", "colleague"]);
    assert!(subcategories.iter().all(|s| s.category_id == work_id));
    assert_eq!(stores.contacts.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_inserts_linked_subcategory() {
    let stores = Stores::new(database().await.get_connection());
    let other_id = stores.category_id("other").await;

    let link = SubcategoryLink::Create(NewSubcategory::new("gym", other_id));
    let contact = stores
        .contacts
        .create(draft("a@example.com", "111", other_id, link))
        .await
        .unwrap();

    let gym = stores.subcategories.find_by_name("gym").await.unwrap().unwrap();
    assert_eq!(gym.category_id, other_id);
    assert_eq!(contact.subcategory_id, Some(gym.id));

    let details = stores.contacts.find_by_id(contact.id).await.unwrap().unwrap();
    assert_eq!(details.category.map(|c| c.name), Some("other".to_string()));
    assert_eq!(details.subcategory.map(|s| s.name), Some("gym".to_string()));
}

#[tokio::test]
async fn test_failed_create_leaves_no_subcategory() {
    let stores = Stores::new(database().await.get_connection());
    let private_id = stores.category_id("private").await;
    let other_id = stores.category_id("other").await;

    stores
        .contacts
        .create(draft("a@example.com", "111", private_id, SubcategoryLink::Unset))
        .await
        .unwrap();

    let link = SubcategoryLink::Create(NewSubcategory::new("newsub", other_id));
    let err = stores
        .contacts
        .create(draft("a@example.com", "222", other_id, link))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.to_string(), "Email is not unique.");
    assert_eq!(stores.subcategory_names().await, ["boss", "client", "colleague"]);
    assert_eq!(stores.contacts.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_email_collision_rolls_back_subcategory() {
    let stores = Stores::new(database().await.get_connection());
    let private_id = stores.category_id("private").await;
    let other_id = stores.category_id("other").await;

    stores
        .contacts
        .create(draft("a@example.com", "111", private_id, SubcategoryLink::Unset))
        .await
        .unwrap();
    let b = stores
        .contacts
        .create(draft("b@example.com", "222", private_id, SubcategoryLink::Unset))
        .await
        .unwrap();

    let link = SubcategoryLink::Create(NewSubcategory::new("newsub", other_id));
    let err = stores
        .contacts
        .update(b.id, draft("a@example.com", "222", other_id, link))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email is not unique.");
    assert!(stores.subcategories.find_by_name("newsub").await.unwrap().is_none());

    let unchanged = stores.contacts.find_by_id(b.id).await.unwrap().unwrap();
    assert_eq!(unchanged.contact.email, "b@example.com");
    assert_eq!(unchanged.contact.category_id, private_id);
}

#[tokio::test]
async fn test_update_phone_collision() {
    let stores = Stores::new(database().await.get_connection());
    let private_id = stores.category_id("private").await;

    stores
        .contacts
        .create(draft("a@example.com", "111", private_id, SubcategoryLink::Unset))
        .await
        .unwrap();
    let b = stores
        .contacts
        .create(draft("b@example.com", "222", private_id, SubcategoryLink::Unset))
        .await
        .unwrap();

    let err = stores
        .contacts
        .update(b.id, draft("b@example.com", "111", private_id, SubcategoryLink::Unset))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.to_string(), "Phone is not unique.");
}

#[tokio::test]
async fn test_update_missing_contact_is_not_found() {
    let stores = Stores::new(database().await.get_connection());
    let private_id = stores.category_id("private").await;

    let err = stores
        .contacts
        .update(42, draft("a@example.com", "111", private_id, SubcategoryLink::Unset))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_page_enriches_contacts() {
    let stores = Stores::new(database().await.get_connection());
    let private_id = stores.category_id("private").await;
    let work_id = stores.category_id("work").await;
    let boss = stores.subcategories.find_by_name("boss").await.unwrap().unwrap();

    stores
        .contacts
        .create(draft("a@example.com", "111", private_id, SubcategoryLink::Unset))
        .await
        .unwrap();
    stores
        .contacts
        .create(draft("b@example.com", "222", work_id, SubcategoryLink::Existing(boss)))
        .await
        .unwrap();

    let page = stores.contacts.page(0, 10).await.unwrap();
    assert_eq!(page.len(), 2);

    assert_eq!(page[0].category.as_ref().map(|c| c.name.as_str()), Some("private"));
    assert!(page[0].subcategory.is_none());
    assert_eq!(page[0].contact.subcategory_id, None);

    assert_eq!(page[1].category.as_ref().map(|c| c.name.as_str()), Some("work"));
    assert_eq!(page[1].subcategory.as_ref().map(|s| s.name.as_str()), Some("boss"));
}

#[tokio::test]
async fn test_count_contacts_and_delete() {
    let stores = Stores::new(database().await.get_connection());
    let work_id = stores.category_id("work").await;
    let boss = stores.subcategories.find_by_name("boss").await.unwrap().unwrap();
    let boss_id = boss.id;

    let contact = stores
        .contacts
        .create(draft("a@example.com", "111", work_id, SubcategoryLink::Existing(boss)))
        .await
        .unwrap();

    assert_eq!(stores.categories.count_contacts(work_id).await.unwrap(), 1);
    assert_eq!(stores.subcategories.count_contacts(boss_id).await.unwrap(), 1);

    stores.contacts.delete(contact.id).await.unwrap();
    assert_eq!(stores.categories.count_contacts(work_id).await.unwrap(), 0);

    let err = stores.contacts.delete(contact.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_engines_on_sqlite() {
    let db = database().await;
    let services = DirectoryServices::new(&db);

    let created = services
        .contacts
        .create(contact_request("a@example.com", "111", "other", Some("gym")))
        .await
        .unwrap();
    assert_eq!(created.subcategory.as_ref().map(|s| s.name.as_str()), Some("gym"));

    let err = services
        .contacts
        .create(contact_request("b@example.com", "111", "private", None))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Phone is not unique.");

    let other_id = created.contact.category_id;
    let err = services.categories.delete(other_id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let gym_id = created.contact.subcategory_id.unwrap();
    let err = services.subcategories.delete(gym_id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let page = services.contacts.list(PageQuery::new(1, 10)).await.unwrap();
    assert_eq!(page.total_items, 1);

    db.ping().await.unwrap();
}

fn contact_request(
    email: &str,
    phone_number: &str,
    category: &str,
    subcategory: Option<&str>,
) -> domain::ContactRequest {
    domain::ContactRequest {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        phone_number: phone_number.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        category_name: category.to_string(),
        subcategory_name: subcategory.map(str::to_string),
    }
}
