#![allow(dead_code)]

use axum::Router;
use foodgram::config::{
    Config, DatabaseConfig, ExportConfig, JwtConfig, ObservabilityConfig, ServerConfig,
};
use sqlx::SqlitePool;
use temp_dir::TempDir;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub config: Config,
    _dir: TempDir,
}

impl TestApp {
    pub fn token_for(&self, user_id: &str) -> String {
        foodgram::auth::generate_token(&self.config.jwt, user_id).unwrap()
    }

    pub async fn create_user(&self, username: &str) -> String {
        let id = ulid::Ulid::new().to_string();
        sqlx::query("INSERT INTO user (id, email, username, created_at) VALUES (?, ?, ?, 0)")
            .bind(&id)
            .bind(format!("{username}@foodgram.localhost"))
            .bind(username)
            .execute(&self.pool)
            .await
            .unwrap();

        id
    }

    pub async fn create_ingredient(&self, name: &str, unit: &str) -> String {
        let id = ulid::Ulid::new().to_string();
        sqlx::query("INSERT INTO ingredient (id, name, measurement_unit) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(name)
            .bind(unit)
            .execute(&self.pool)
            .await
            .unwrap();

        id
    }

    pub async fn create_recipe(
        &self,
        author_id: &str,
        name: &str,
        ingredients: &[(&str, u32)],
    ) -> String {
        let id = ulid::Ulid::new().to_string();
        sqlx::query(
            "INSERT INTO recipe (id, author_id, name, text, cooking_time, created_at) VALUES (?, ?, ?, '', 25, 0)",
        )
        .bind(&id)
        .bind(author_id)
        .bind(name)
        .execute(&self.pool)
        .await
        .unwrap();

        for (ingredient_id, amount) in ingredients {
            sqlx::query(
                "INSERT INTO recipe_ingredient (id, recipe_id, ingredient_id, amount) VALUES (?, ?, ?, ?)",
            )
            .bind(ulid::Ulid::new().to_string())
            .bind(&id)
            .bind(*ingredient_id)
            .bind(*amount)
            .execute(&self.pool)
            .await
            .unwrap();
        }

        id
    }
}

pub fn test_config(database_url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 7,
            issuer: "foodgram".to_string(),
            audience: "foodgram-api".to_string(),
        },
        observability: ObservabilityConfig::default(),
        export: ExportConfig::default(),
    }
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_export(ExportConfig::default()).await
}

pub async fn create_test_app_with_export(export: ExportConfig) -> TestApp {
    let dir = TempDir::new().unwrap();
    let path = dir.child("db.sqlite3");
    let mut config = test_config(format!("sqlite:{}", path.display()));
    config.export = export;

    let pool = foodgram::create_pool(&config.database.url, 1).await.unwrap();
    foodgram::cli::run_migrations(&pool).await.unwrap();

    let state = foodgram::AppState::new(config.clone(), pool.clone(), pool.clone()).unwrap();

    TestApp {
        router: foodgram::router(state),
        pool,
        config,
        _dir: dir,
    }
}
