/// All record identifiers are PostgreSQL BIGSERIAL.
pub type DbId = i64;
