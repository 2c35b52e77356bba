use foodgram_shopping::{Command, Favorites, Query, ShoppingError};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_favorite_recipe_is_listed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let author = helpers::create_user(&pool, "author").await?;
    let john = helpers::create_user(&pool, "john").await?;
    let soup = helpers::create_recipe(&pool, &author, "Щи", &[]).await?;
    let salad = helpers::create_recipe(&pool, &author, "Винегрет", &[]).await?;

    let favorites = Favorites::new(pool.clone(), pool.clone());
    favorites.favorite(&john, &soup).await?;
    let summary = favorites.favorite(&john, &salad).await?;
    assert_eq!(summary.name, "Винегрет");

    let names = Query(pool.clone())
        .list_favorites(&john)
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Винегрет", "Щи"]);

    Ok(())
}

#[tokio::test]
async fn test_favorite_twice_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let author = helpers::create_user(&pool, "author").await?;
    let john = helpers::create_user(&pool, "john").await?;
    let recipe = helpers::create_recipe(&pool, &author, "Омлет", &[]).await?;

    let favorites = Favorites::new(pool.clone(), pool.clone());
    favorites.favorite(&john, &recipe).await?;

    let result = favorites.favorite(&john, &recipe).await;
    assert!(matches!(result, Err(ShoppingError::AlreadyFavorited)));

    let result = favorites.favorite(&john, "01ARZ3NDEKTSV4RRFFQ69G5FAV").await;
    assert!(matches!(result, Err(ShoppingError::RecipeNotFound)));

    Ok(())
}

#[tokio::test]
async fn test_unfavorite_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let author = helpers::create_user(&pool, "author").await?;
    let john = helpers::create_user(&pool, "john").await?;
    let recipe = helpers::create_recipe(&pool, &author, "Омлет", &[]).await?;

    let favorites = Favorites::new(pool.clone(), pool.clone());
    favorites.favorite(&john, &recipe).await?;
    favorites.unfavorite(&john, &recipe).await?;

    assert!(Query(pool.clone()).list_favorites(&john).await?.is_empty());

    let result = favorites.unfavorite(&john, &recipe).await;
    assert!(matches!(result, Err(ShoppingError::NotFavorited)));

    Ok(())
}

#[tokio::test]
async fn test_favorites_do_not_touch_shopping_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let author = helpers::create_user(&pool, "author").await?;
    let john = helpers::create_user(&pool, "john").await?;
    let flour = helpers::create_ingredient(&pool, "мука", "г").await?;
    let pancakes = helpers::create_recipe(&pool, &author, "Блины", &[(&flour, 3)]).await?;
    let pie = helpers::create_recipe(&pool, &author, "Пирог", &[(&flour, 5)]).await?;

    Favorites::new(pool.clone(), pool.clone())
        .favorite(&john, &pie)
        .await?;
    Command::new(pool.clone(), pool.clone())
        .add_recipe(&john, &pancakes)
        .await?;

    let cart = Query(pool.clone()).list_recipes(&john).await?;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, pancakes);

    Ok(())
}
