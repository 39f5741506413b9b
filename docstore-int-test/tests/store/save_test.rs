use docstore::errors::ErrorKind;
use docstore::store::StoreBuilder;
use docstore_int_test::test_util::{
    cleanup, create_document, create_test_context, run_test, timestamp,
};

#[test]
fn test_save_assigns_increasing_ids() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let mut ids = Vec::new();
            for i in 0..5 {
                let saved = store.save(create_document(
                    &format!("Title {}", i),
                    "content",
                    "a1",
                    timestamp(2024, 1, 1),
                ))?;
                ids.push(saved.id.clone().unwrap_or_default());
            }
            assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
            assert_eq!(store.size(), 5);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_save_replaces_existing_document() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let first = store.save(create_document("Draft", "v1", "a1", timestamp(2024, 1, 1)))?;
            store.save(create_document("Other", "x", "a2", timestamp(2024, 1, 2)))?;
            let count_before = store.size();

            let id = first.id.clone().unwrap_or_default();
            let update = create_document("Final", "v2", "a3", timestamp(2024, 1, 1)).with_id(&id);
            let saved = store.save(update.clone())?;

            assert_eq!(saved, update);
            assert_eq!(store.size(), count_before);

            let matching: Vec<_> = store
                .find_all()
                .into_iter()
                .filter(|d| d.id() == Some(id.as_str()))
                .collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0].title, "Final");
            assert_eq!(matching[0].content, "v2");
            assert_eq!(matching[0].author.id, "a3");
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_does_not_consume_ids() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.save(create_document("A", "a", "a1", timestamp(2024, 1, 1)))?;
            store.save(create_document("A'", "a", "a1", timestamp(2024, 1, 1)).with_id("1"))?;
            let next = store.save(create_document("B", "b", "a1", timestamp(2024, 1, 1)))?;
            assert_eq!(next.id.as_deref(), Some("2"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_created_is_preserved_on_both_branches() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let created = timestamp(2020, 2, 29);
            let inserted = store.save(create_document("Leap", "day", "a1", created))?;
            assert_eq!(inserted.created, created);

            let older = timestamp(1999, 12, 31);
            let updated = store.save(create_document("Leap", "day", "a1", older).with_id("1"))?;
            assert_eq!(updated.created, older);
            assert_eq!(store.find_by_id("1").map(|d| d.created), Some(older));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_builder_initial_id() {
    let store = StoreBuilder::new()
        .name("numbered")
        .initial_id(1000)
        .open()
        .unwrap();
    let saved = store
        .save(create_document("A", "a", "a1", timestamp(2024, 1, 1)))
        .unwrap();
    assert_eq!(saved.id.as_deref(), Some("1000"));
}

#[test]
fn test_builder_rejects_zero_initial_id() {
    let result = StoreBuilder::new().initial_id(0).open();
    match result {
        Ok(_) => panic!("zero initial id must be rejected"),
        Err(e) => assert_eq!(e.kind(), &ErrorKind::InvalidConfiguration),
    }
}
