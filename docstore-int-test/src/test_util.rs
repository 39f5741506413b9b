use chrono::{DateTime, TimeZone, Utc};
use docstore::collection::{Author, Document};
use docstore::errors::{DocStoreError, DocStoreResult, ErrorKind};
use docstore::store::{DocumentStore, StoreBuilder};

/// Runs `test` against the context produced by `before`, then always runs
/// `after`. Panics with the error of whichever step failed first.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> DocStoreResult<()>,
    B: Fn() -> DocStoreResult<TestContext>,
    A: Fn(TestContext) -> DocStoreResult<()>,
{
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let test_result = test(ctx.clone());
    let after_result = after(ctx);

    if let Err(e) = test_result {
        panic!("Test failed: {:?}", e);
    }
    if let Err(e) = after_result {
        panic!("After run failed: {:?}", e);
    }
}

#[derive(Clone)]
pub struct TestContext {
    name: String,
    store: DocumentStore,
}

impl TestContext {
    pub fn new(name: String, store: DocumentStore) -> Self {
        Self { name, store }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> DocumentStore {
        self.store.clone()
    }
}

pub fn random_store_name() -> String {
    format!("test-{}", uuid::Uuid::new_v4())
}

pub fn create_test_context() -> DocStoreResult<TestContext> {
    let name = random_store_name();
    let store = StoreBuilder::new().name(&name).open()?;
    Ok(TestContext::new(name, store))
}

/// Checks the identifier invariants of the store before the context is
/// dropped: every stored document has an identifier and none is repeated.
pub fn cleanup(ctx: TestContext) -> DocStoreResult<()> {
    let documents = ctx.store().find_all();
    let mut ids = Vec::with_capacity(documents.len());
    for document in &documents {
        match document.id() {
            Some(id) => ids.push(id.to_string()),
            None => {
                return Err(DocStoreError::new(
                    &format!("Store {} holds a document without id: {}", ctx.name(), document),
                    ErrorKind::InternalError,
                ))
            }
        }
    }

    ids.sort();
    ids.dedup();
    if ids.len() != documents.len() {
        return Err(DocStoreError::new(
            &format!("Store {} holds duplicate ids", ctx.name()),
            ErrorKind::InternalError,
        ));
    }
    Ok(())
}

/// Midnight UTC on the given date.
pub fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid date {}-{}-{}", year, month, day))
}

pub fn author(id: &str) -> Author {
    Author::new(id, format!("Author {}", id))
}

pub fn create_document(
    title: &str,
    content: &str,
    author_id: &str,
    created: DateTime<Utc>,
) -> Document {
    Document::new(title, content, author(author_id), created)
}

/// Saves a fixed set of five documents and returns them as stored.
///
/// | id | title            | author | created    |
/// |----|------------------|--------|------------|
/// | 1  | Alpha Report     | a1     | 2024-01-10 |
/// | 2  | Beta Summary     | a2     | 2024-03-15 |
/// | 3  | Alpha Review     | a2     | 2024-06-30 |
/// | 4  | Gamma Notes      | a3     | 2023-12-31 |
/// | 5  | Bonus Appendix   | a1     | 2025-01-01 |
pub fn insert_test_documents(store: &DocumentStore) -> DocStoreResult<Vec<Document>> {
    let documents = vec![
        create_document("Alpha Report", "quarterly results", "a1", timestamp(2024, 1, 10)),
        create_document("Beta Summary", "annual results and outlook", "a2", timestamp(2024, 3, 15)),
        create_document("Alpha Review", "peer review of the quarterly plan", "a2", timestamp(2024, 6, 30)),
        create_document("Gamma Notes", "meeting notes", "a3", timestamp(2023, 12, 31)),
        create_document("Bonus Appendix", "tables and figures", "a1", timestamp(2025, 1, 1)),
    ];

    documents
        .into_iter()
        .map(|document| store.save(document))
        .collect()
}
