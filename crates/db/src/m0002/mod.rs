mod favorite;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "foodgram",
    "m0002",
    vec_box![],
    vec_box![favorite::CreateTable, favorite::CreateUk1]
);
