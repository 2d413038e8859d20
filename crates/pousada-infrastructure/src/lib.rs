//! # Pousada Infrastructure
//!
//! PostgreSQL implementations of the core repository ports (adapters) and
//! the embedded schema migrations.

pub mod database;

pub use database::{
    create_pool, run_migrations, MigrationError, PgAccommodationRepository,
    PgPropertyAccessRepository, PgPropertyRepository, PgReservationRepository, PgRoomRepository,
    PgSeedRepository, PgTenantRepository, PgUserRepository,
};
