use crate::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingError {
    #[error("failed to retrieve shopping cart: {0}")]
    Retrieval(#[source] StoreError),

    #[error("recipe not found")]
    RecipeNotFound,

    #[error("recipe already in shopping cart")]
    AlreadyInCart,

    #[error("recipe not in shopping cart")]
    NotInCart,

    #[error("recipe already in favorites")]
    AlreadyFavorited,

    #[error("recipe not in favorites")]
    NotFavorited,

    #[cfg(feature = "full")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
