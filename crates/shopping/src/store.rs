use crate::CartLine;

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Read access to the recipes a user has put in their shopping cart.
#[async_trait::async_trait]
pub trait CartStore: Send + Sync {
    /// Every ingredient line of every recipe in the cart of `user_id`, flat
    /// and ungrouped. An empty cart yields an empty list.
    async fn list_cart_ingredient_lines(&self, user_id: &str)
    -> Result<Vec<CartLine>, StoreError>;
}
