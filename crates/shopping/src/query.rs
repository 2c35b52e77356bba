use foodgram_db::table::{Favorite, Ingredient, Recipe, RecipeIngredient, ShoppingCart};
use sea_query::{Expr, ExprTrait, JoinType, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::{CartLine, CartStore, ShoppingError, StoreError};

/// Short recipe representation returned by the cart endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CartRecipe {
    pub id: String,
    pub name: String,
    pub cooking_time: u32,
}

#[derive(FromRow)]
struct CartLineRow {
    name: String,
    measurement_unit: String,
    amount: u32,
}

impl From<CartLineRow> for CartLine {
    fn from(row: CartLineRow) -> Self {
        CartLine {
            name: row.name,
            unit: row.measurement_unit,
            amount: row.amount,
        }
    }
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn find_recipe(
        &self,
        recipe_id: impl Into<String>,
    ) -> Result<Option<CartRecipe>, ShoppingError> {
        let recipe_id = recipe_id.into();
        let statement = sea_query::Query::select()
            .columns([Recipe::Id, Recipe::Name, Recipe::CookingTime])
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&recipe_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, CartRecipe, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn list_recipes(
        &self,
        user_id: impl Into<String>,
    ) -> Result<Vec<CartRecipe>, ShoppingError> {
        let user_id = user_id.into();
        let statement = sea_query::Query::select()
            .columns([
                (Recipe::Table, Recipe::Id),
                (Recipe::Table, Recipe::Name),
                (Recipe::Table, Recipe::CookingTime),
            ])
            .from(ShoppingCart::Table)
            .join(
                JoinType::InnerJoin,
                Recipe::Table,
                Expr::col((Recipe::Table, Recipe::Id))
                    .equals((ShoppingCart::Table, ShoppingCart::RecipeId)),
            )
            .and_where(Expr::col((ShoppingCart::Table, ShoppingCart::UserId)).eq(&user_id))
            .order_by((Recipe::Table, Recipe::Name), Order::Asc)
            .order_by((Recipe::Table, Recipe::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, CartRecipe, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Favorite recipes of `user_id`, ordered by name.
    pub async fn list_favorites(
        &self,
        user_id: impl Into<String>,
    ) -> Result<Vec<CartRecipe>, ShoppingError> {
        let user_id = user_id.into();
        let statement = sea_query::Query::select()
            .columns([
                (Recipe::Table, Recipe::Id),
                (Recipe::Table, Recipe::Name),
                (Recipe::Table, Recipe::CookingTime),
            ])
            .from(Favorite::Table)
            .join(
                JoinType::InnerJoin,
                Recipe::Table,
                Expr::col((Recipe::Table, Recipe::Id))
                    .equals((Favorite::Table, Favorite::RecipeId)),
            )
            .and_where(Expr::col((Favorite::Table, Favorite::UserId)).eq(&user_id))
            .order_by((Recipe::Table, Recipe::Name), Order::Asc)
            .order_by((Recipe::Table, Recipe::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, CartRecipe, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    async fn fetch_cart_lines(&self, user_id: &str) -> Result<Vec<CartLine>, sqlx::Error> {
        let statement = sea_query::Query::select()
            .column((Ingredient::Table, Ingredient::Name))
            .column((Ingredient::Table, Ingredient::MeasurementUnit))
            .column((RecipeIngredient::Table, RecipeIngredient::Amount))
            .from(ShoppingCart::Table)
            .join(
                JoinType::InnerJoin,
                RecipeIngredient::Table,
                Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
                    .equals((ShoppingCart::Table, ShoppingCart::RecipeId)),
            )
            .join(
                JoinType::InnerJoin,
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(Expr::col((ShoppingCart::Table, ShoppingCart::UserId)).eq(user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, CartLineRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(CartLine::from).collect())
    }
}

#[async_trait::async_trait]
impl CartStore for Query {
    async fn list_cart_ingredient_lines(
        &self,
        user_id: &str,
    ) -> Result<Vec<CartLine>, StoreError> {
        Ok(self.fetch_cart_lines(user_id).await?)
    }
}
