use foodgram_shopping::{Command, Query, ShoppingError};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_add_recipe_returns_summary() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let author = helpers::create_user(&pool, "author").await?;
    let john = helpers::create_user(&pool, "john").await?;
    let recipe = helpers::create_recipe(&pool, &author, "Омлет", &[]).await?;

    let command = Command::new(pool.clone(), pool.clone());
    let summary = command.add_recipe(&john, &recipe).await?;

    assert_eq!(summary.id, recipe);
    assert_eq!(summary.name, "Омлет");
    assert_eq!(summary.cooking_time, 10);

    let recipes = Query(pool.clone()).list_recipes(&john).await?;
    assert_eq!(recipes, vec![summary]);

    Ok(())
}

#[tokio::test]
async fn test_add_recipe_twice_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let author = helpers::create_user(&pool, "author").await?;
    let john = helpers::create_user(&pool, "john").await?;
    let recipe = helpers::create_recipe(&pool, &author, "Омлет", &[]).await?;

    let command = Command::new(pool.clone(), pool.clone());
    command.add_recipe(&john, &recipe).await?;

    let result = command.add_recipe(&john, &recipe).await;
    assert!(matches!(result, Err(ShoppingError::AlreadyInCart)));

    let recipes = Query(pool.clone()).list_recipes(&john).await?;
    assert_eq!(recipes.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_add_unknown_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let john = helpers::create_user(&pool, "john").await?;

    let command = Command::new(pool.clone(), pool.clone());
    let result = command
        .add_recipe(&john, ulid::Ulid::new().to_string())
        .await;

    assert!(matches!(result, Err(ShoppingError::RecipeNotFound)));

    Ok(())
}

#[tokio::test]
async fn test_remove_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let author = helpers::create_user(&pool, "author").await?;
    let john = helpers::create_user(&pool, "john").await?;
    let jane = helpers::create_user(&pool, "jane").await?;
    let recipe = helpers::create_recipe(&pool, &author, "Омлет", &[]).await?;

    let command = Command::new(pool.clone(), pool.clone());
    command.add_recipe(&john, &recipe).await?;
    command.add_recipe(&jane, &recipe).await?;

    command.remove_recipe(&john, &recipe).await?;

    let query = Query(pool.clone());
    assert!(query.list_recipes(&john).await?.is_empty());
    assert_eq!(query.list_recipes(&jane).await?.len(), 1);

    let result = command.remove_recipe(&john, &recipe).await;
    assert!(matches!(result, Err(ShoppingError::NotInCart)));

    Ok(())
}

#[tokio::test]
async fn test_list_recipes_sorted_by_name() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let author = helpers::create_user(&pool, "author").await?;
    let john = helpers::create_user(&pool, "john").await?;

    let command = Command::new(pool.clone(), pool.clone());
    for name in ["Щи", "Винегрет", "Оливье"] {
        let recipe = helpers::create_recipe(&pool, &author, name, &[]).await?;
        command.add_recipe(&john, &recipe).await?;
    }

    let names = Query(pool.clone())
        .list_recipes(&john)
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["Винегрет", "Оливье", "Щи"]);

    Ok(())
}
