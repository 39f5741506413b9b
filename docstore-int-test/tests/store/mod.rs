mod find_by_id_test;
mod multi_threaded_test;
mod save_test;
