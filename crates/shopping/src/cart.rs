use foodgram_db::table::ShoppingCart;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use ulid::Ulid;

use crate::{CartRecipe, Query, ShoppingError};

/// Writes to the shopping cart of a user.
#[derive(Clone)]
pub struct Command {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl Command {
    pub fn new(read_db: sqlx::SqlitePool, write_db: sqlx::SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    pub async fn add_recipe(
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
            .into_table(ShoppingCart::Table)
            .columns([
                ShoppingCart::Id,
                ShoppingCart::UserId,
                ShoppingCart::RecipeId,
                ShoppingCart::CreatedAt,
            ])
            .values_panic([
                Ulid::new().to_string().into(),
                user_id.to_owned().into(),
                recipe_id.to_owned().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        match sqlx::query_with(&sql, values).execute(&self.write_db).await {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(ShoppingError::AlreadyInCart);
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            user_id = %user_id,
            recipe_id = %recipe_id,
            "recipe added to shopping cart"
        );

        Ok(recipe)
    }

    pub async fn remove_recipe(
        &self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> Result<(), ShoppingError> {
        let user_id = user_id.into();
        let recipe_id = recipe_id.into();

        let statement = sea_query::Query::delete()
            .from_table(ShoppingCart::Table)
            .and_where(Expr::col(ShoppingCart::UserId).eq(&user_id))
            .and_where(Expr::col(ShoppingCart::RecipeId).eq(&recipe_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ShoppingError::NotInCart);
        }

        tracing::info!(
            user_id = %user_id,
            recipe_id = %recipe_id,
            "recipe removed from shopping cart"
        );

        Ok(())
    }
}
