mod aggregation;
mod error;
mod export;
mod store;

pub use aggregation::*;
pub use error::*;
pub use export::*;
pub use store::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod cart;
        mod favorite;
        mod query;

        pub use cart::*;
        pub use favorite::*;
        pub use query::*;
    }
}
