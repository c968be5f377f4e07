//! REST API endpoint tests

mod feed_tests;
mod static_files_tests;
