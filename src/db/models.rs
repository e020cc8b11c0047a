use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct KvEntry {
    pub key: String,
    pub value: String,
}
