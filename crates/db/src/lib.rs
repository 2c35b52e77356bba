use sqlx_migrator::{Info, Migrator};

mod m0001;
mod m0002;
pub mod table;

pub fn migrator<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    m0001::Migration: sqlx_migrator::Migration<DB>,
    m0002::Migration: sqlx_migrator::Migration<DB>,
{
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration), Box::new(m0002::Migration)])?;

    Ok(migrator)
}
