//! Ledger schema bootstrap
//!
//! Idempotent DDL for the four ledger tables. Tests and embedding services
//! call [`ensure_schema`] at startup; there is no migration tooling here.

use sqlx::PgPool;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users_tb (
    user_id     BIGSERIAL PRIMARY KEY,
    username    VARCHAR NOT NULL UNIQUE,
    full_name   VARCHAR NOT NULL,
    email       VARCHAR NOT NULL UNIQUE,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts_tb (
    id          BIGSERIAL PRIMARY KEY,
    owner       VARCHAR NOT NULL REFERENCES users_tb (username),
    balance     BIGINT NOT NULL,
    currency    VARCHAR NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries_tb (
    id          BIGSERIAL PRIMARY KEY,
    account_id  BIGINT NOT NULL REFERENCES accounts_tb (id),
    amount      BIGINT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_TRANSFERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transfers_tb (
    id              BIGSERIAL PRIMARY KEY,
    from_account_id BIGINT NOT NULL REFERENCES accounts_tb (id),
    to_account_id   BIGINT NOT NULL REFERENCES accounts_tb (id),
    amount          BIGINT NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS accounts_tb_owner_idx ON accounts_tb (owner)",
    "CREATE INDEX IF NOT EXISTS entries_tb_account_id_idx ON entries_tb (account_id)",
    "CREATE INDEX IF NOT EXISTS transfers_tb_from_account_id_idx ON transfers_tb (from_account_id)",
    "CREATE INDEX IF NOT EXISTS transfers_tb_to_account_id_idx ON transfers_tb (to_account_id)",
];

/// Create the ledger tables and indexes if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring ledger schema...");

    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_ACCOUNTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_ENTRIES_TABLE).execute(pool).await?;
    sqlx::query(CREATE_TRANSFERS_TABLE).execute(pool).await?;

    for ddl in CREATE_INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!("Ledger schema ready");
    Ok(())
}
