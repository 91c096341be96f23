pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_user_table;
mod m20251210_000002_create_class_table;
mod m20251210_000003_create_rsvp_table;
mod m20251210_000004_create_question_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_user_table::Migration),
            Box::new(m20251210_000002_create_class_table::Migration),
            Box::new(m20251210_000003_create_rsvp_table::Migration),
            Box::new(m20251210_000004_create_question_table::Migration),
        ]
    }
}
