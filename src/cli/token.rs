use crate::config::Config;

/// Print a bearer token for an existing user.
pub async fn token(config: Config, user_id: String) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let exists = crate::auth::user_exists(&pool, &user_id).await?;
    pool.close().await;

    if !exists {
        anyhow::bail!("user {user_id} not found");
    }

    let token = crate::auth::generate_token(&config.jwt, &user_id)?;
    tracing::info!(user_id = %user_id, "issued access token");
    println!("{token}");

    Ok(())
}
