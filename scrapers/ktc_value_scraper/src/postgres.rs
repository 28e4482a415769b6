use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Pool, Postgres};
use tracing::info;

use crate::error::SinkError;
use crate::export::RecordSink;
use crate::types::PlayerRecord;

const COLUMNS: [&str; 16] = [
    "first_name",
    "last_name",
    "player_name",
    "position_rank",
    "position",
    "team",
    "value",
    "age",
    "rookie",
    "sf_position_rank",
    "sf_value",
    "rdrft_position_rank",
    "rdrft_value",
    "sfrdrft_position_rank",
    "sfrdrft_value",
    "date",
];

/// Writes straight to the database behind Supabase, one `INSERT` per record.
pub struct PostgresSink {
    pool: Pool<Postgres>,
    statement: String,
}

impl PostgresSink {
    pub async fn connect(database_url: &str, table: &str) -> Result<Self, SinkError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        info!("Connected to Postgres, inserting into {}", table);

        Ok(Self {
            pool,
            statement: insert_statement(table),
        })
    }
}

/// Columns are filled by name from the record's JSON form, so `COLUMNS`
/// only has to agree with the serialized field names.
pub fn insert_statement(table: &str) -> String {
    let table = format!("\"{}\"", table.replace('"', "\"\""));
    let columns = COLUMNS.join(", ");
    format!(
        "INSERT INTO {table} ({columns}) \
         SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1)"
    )
}

#[async_trait]
impl RecordSink for PostgresSink {
    async fn insert(&mut self, record: &PlayerRecord) -> Result<(), SinkError> {
        sqlx::query(&self.statement)
            .bind(Json(record))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), SinkError> {
        self.pool.close().await;
        Ok(())
    }
}
