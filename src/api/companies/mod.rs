// Company resource module
// CRUD over the companies table plus the company-with-invoice-ids view

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::create_companies_router;
