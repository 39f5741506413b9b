use docstore::filter::SearchRequest;
use docstore_int_test::test_util::{
    cleanup, create_document, create_test_context, run_test, timestamp,
};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_multi_threaded_save() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let num_threads = 8;
            let saves_per_thread = 50;
            let barrier = Arc::new(Barrier::new(num_threads));

            let mut handles = vec![];
            for thread_id in 0..num_threads {
                let store = store.clone();
                let barrier = Arc::clone(&barrier);
                handles.push(thread::spawn(move || {
                    barrier.wait();
                    let mut ids = Vec::with_capacity(saves_per_thread);
                    for i in 0..saves_per_thread {
                        let title = format!("thread_{}_seq_{}", thread_id, i);
                        let author = format!("t{}", thread_id);
                        let saved = store
                            .save(create_document(&title, "payload", &author, timestamp(2024, 1, 1)))
                            .map(|d| d.id);
                        ids.push(saved);
                    }
                    ids
                }));
            }

            let mut assigned = HashSet::new();
            for handle in handles {
                let ids = handle.join().map_err(|_| "writer thread panicked")?;
                for id in ids {
                    let id = id?.ok_or("saved document has no id")?;
                    assert!(assigned.insert(id));
                }
            }

            let total = num_threads * saves_per_thread;
            assert_eq!(assigned.len(), total);
            assert_eq!(store.size(), total);
            let expected: HashSet<String> = (1..=total).map(|i| i.to_string()).collect();
            assert_eq!(assigned, expected);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_readers_never_see_duplicates_during_upserts() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            for i in 0..20 {
                store.save(create_document(&format!("doc {}", i), "v0", "a1", timestamp(2024, 1, 1)))?;
            }

            let writer = {
                let store = store.clone();
                thread::spawn(move || {
                    for round in 1..=50 {
                        for id in 1..=20 {
                            let doc = create_document(
                                &format!("doc {}", id),
                                &format!("v{}", round),
                                "a1",
                                timestamp(2024, 1, 1),
                            )
                            .with_id(id.to_string());
                            if store.save(doc).is_err() {
                                return false;
                            }
                        }
                    }
                    true
                })
            };

            let readers: Vec<_> = (0..4)
                .map(|_| {
                    let store = store.clone();
                    thread::spawn(move || {
                        for _ in 0..200 {
                            let snapshot = match store.search(&SearchRequest::new()) {
                                Ok(documents) => documents,
                                Err(_) => return false,
                            };
                            let unique: HashSet<_> =
                                snapshot.iter().filter_map(|d| d.id.clone()).collect();
                            if snapshot.len() != 20 || unique.len() != 20 {
                                return false;
                            }
                        }
                        true
                    })
                })
                .collect();

            assert!(writer.join().map_err(|_| "writer thread panicked")?);
            for reader in readers {
                assert!(reader.join().map_err(|_| "reader thread panicked")?);
            }
            assert_eq!(store.size(), 20);
            assert_eq!(store.find_by_id("7").map(|d| d.content), Some("v50".to_string()));
            Ok(())
        },
        cleanup,
    )
}
