use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub async fn create_user(
    pool: &SqlitePool,
    username: impl Into<String>,
) -> anyhow::Result<String> {
    let id = ulid::Ulid::new().to_string();
    let username = username.into();
    sqlx::query("INSERT INTO user (id, email, username, created_at) VALUES (?, ?, ?, 0)")
        .bind(&id)
        .bind(format!("{username}@foodgram.localhost"))
        .bind(&username)
        .execute(pool)
        .await?;

    Ok(id)
}

#[allow(dead_code)]
pub async fn create_ingredient(
    pool: &SqlitePool,
    name: impl Into<String>,
    unit: impl Into<String>,
) -> anyhow::Result<String> {
    let id = ulid::Ulid::new().to_string();
    sqlx::query("INSERT INTO ingredient (id, name, measurement_unit) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(name.into())
        .bind(unit.into())
        .execute(pool)
        .await?;

    Ok(id)
}

#[allow(dead_code)]
pub async fn create_recipe(
    pool: &SqlitePool,
    author_id: &str,
    name: impl Into<String>,
    ingredients: &[(&str, u32)],
) -> anyhow::Result<String> {
    let id = ulid::Ulid::new().to_string();
    sqlx::query(
        "INSERT INTO recipe (id, author_id, name, text, cooking_time, created_at) VALUES (?, ?, ?, '', 10, 0)",
    )
    .bind(&id)
    .bind(author_id)
    .bind(name.into())
    .execute(pool)
    .await?;

    for (ingredient_id, amount) in ingredients {
        sqlx::query(
            "INSERT INTO recipe_ingredient (id, recipe_id, ingredient_id, amount) VALUES (?, ?, ?, ?)",
        )
        .bind(ulid::Ulid::new().to_string())
        .bind(&id)
        .bind(*ingredient_id)
        .bind(*amount)
        .execute(pool)
        .await?;
    }

    Ok(id)
}
