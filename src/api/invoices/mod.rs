// Invoice resource module
// CRUD over the invoices table plus the invoice-with-embedded-company view

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::create_invoices_router;
