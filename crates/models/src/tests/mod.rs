
/// CRUD against a live database (needs `DATABASE_URL`)
pub mod crud_tests;
