use foodgram_db::table::Favorite;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use ulid::Ulid;

use crate::{CartRecipe, Query, ShoppingError};

/// Writes to the favorite recipes of a user.
#[derive(Clone)]
pub struct Favorites {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl Favorites {
    pub fn new(read_db: sqlx::SqlitePool, write_db: sqlx::SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    pub async fn favorite(
        &self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> Result<CartRecipe, ShoppingError> {
        let user_id = user_id.into();
        let recipe_id = recipe_id.into();

        let Some(recipe) = Query(self.read_db.clone()).find_recipe(&recipe_id).await? else {
            return Err(ShoppingError::RecipeNotFound);
        };

        let statement = sea_query::Query::insert()
            .into_table(Favorite::Table)
            .columns([
                Favorite::Id,
                Favorite::UserId,
                Favorite::RecipeId,
                Favorite::CreatedAt,
            ])
            .values_panic([
                Ulid::new().to_string().into(),
                user_id.to_owned().into(),
                recipe_id.to_owned().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        if let Err(e) = sqlx::query_with(&sql, values).execute(&self.write_db).await {
            return Err(match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    ShoppingError::AlreadyFavorited
                }
                e => e.into(),
            });
        }

        tracing::info!(user_id = %user_id, recipe_id = %recipe_id, "recipe favorited");

        Ok(recipe)
    }

    pub async fn unfavorite(
        &self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> Result<(), ShoppingError> {
        let user_id = user_id.into();
        let recipe_id = recipe_id.into();

        let statement = sea_query::Query::delete()
            .from_table(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(&user_id))
            .and_where(Expr::col(Favorite::RecipeId).eq(&recipe_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ShoppingError::NotFavorited);
        }

        tracing::info!(user_id = %user_id, recipe_id = %recipe_id, "recipe unfavorited");

        Ok(())
    }
}
