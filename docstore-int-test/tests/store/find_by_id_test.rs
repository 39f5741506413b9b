use docstore_int_test::test_util::{
    cleanup, create_document, create_test_context, insert_test_documents, run_test, timestamp,
};

#[test]
fn test_find_by_id_returns_each_saved_document() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let saved = insert_test_documents(&store)?;
            for document in &saved {
                let id = document.id().unwrap_or_default();
                assert_eq!(store.find_by_id(id).as_ref(), Some(document));
            }
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_id_unknown_is_none() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            insert_test_documents(&store)?;
            assert!(store.find_by_id("999").is_none());
            assert!(store.find_by_id("").is_none());
            assert!(store.find_by_id(" 1").is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_id_on_empty_store() {
    run_test(
        create_test_context,
        |ctx| {
            assert!(ctx.store().find_by_id("1").is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_id_sees_latest_version() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.save(create_document("v1", "c", "a1", timestamp(2024, 1, 1)))?;
            store.save(create_document("v2", "c", "a1", timestamp(2024, 1, 1)).with_id("1"))?;
            assert_eq!(store.find_by_id("1").map(|d| d.title), Some("v2".to_string()));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_returned_document_is_a_copy() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.save(create_document("Original", "c", "a1", timestamp(2024, 1, 1)))?;
            if let Some(mut found) = store.find_by_id("1") {
                found.title = "Changed locally".to_string();
            }
            assert_eq!(store.find_by_id("1").map(|d| d.title), Some("Original".to_string()));
            Ok(())
        },
        cleanup,
    )
}
