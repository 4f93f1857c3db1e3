//! Database test utilities and shared infrastructure

use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

use crate::database::{self, Db};

const USER: &str = "shopfront_test";
const PASSWORD: &str = "shopfront_test_password";

/// Shared PostgreSQL container that starts once and is reused across all tests
static POSTGRES_CONTAINER: OnceCell<ContainerAsync<PostgresImage>> = OnceCell::const_new();

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(USER)
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

/// Test database
///
/// Each `TestDb` is a uniquely named database with migrations applied,
/// created inside the shared container.
#[derive(Debug, Clone)]
pub(crate) struct TestDb {
    pub pool: PgPool,
    pub name: String,
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        let container = POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();

        let name = format!("shopfront_test_{nanos}");

        let mut conn = PgConnection::connect(&format!(
            "postgresql://{USER}:{PASSWORD}@{host}:{port}/postgres"
        ))
        .await
        .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = database::connect(&format!(
            "postgresql://{USER}:{PASSWORD}@{host}:{port}/{name}"
        ))
        .await
        .expect("Failed to create pool for database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    pub(crate) fn db(&self) -> Db {
        Db::new(self.pool.clone())
    }
}
