pub mod models;
pub mod repositories;
pub mod supabase_repository;
