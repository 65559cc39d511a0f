//! SQLite tool catalog / SQLite 工具目录
//!
//! - `tools` table, tags stored as a JSON array
//! - WAL mode for file databases
//! - Soft delete through `is_active`

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

use super::{tag_filter, CandidateSource};
use crate::error::CatalogError;
use crate::models::{Instructions, ToolRecord, ToolUpdate};

#[derive(Debug, sqlx::FromRow)]
struct ToolRow {
    id: String,
    name: String,
    description: String,
    tags: String,
    instruction_what: Option<String>,
    instruction_why: Option<String>,
    instruction_how: Option<String>,
    component_id: Option<String>,
    category: Option<String>,
    is_active: bool,
}

impl TryFrom<ToolRow> for ToolRecord {
    type Error = CatalogError;

    fn try_from(row: ToolRow) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_str(&row.tags).map_err(|source| CatalogError::Tags {
            id: row.id.clone(),
            source,
        })?;

        let instructions = match (row.instruction_what, row.instruction_why, row.instruction_how) {
            (None, None, None) => None,
            (what, why, how) => Some(Instructions {
                what: what.unwrap_or_default(),
                why: why.unwrap_or_default(),
                how: how.unwrap_or_default(),
            }),
        };

        Ok(ToolRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            tags,
            instructions,
            component_id: row.component_id,
            category: row.category,
            active: row.is_active,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, name, description, tags, instruction_what, instruction_why, \
     instruction_how, component_id, category, is_active FROM tools";

/// SQLite-backed catalog / 数据库工具目录
pub struct SqliteCatalog {
    db: Pool<Sqlite>,
}

impl SqliteCatalog {
    /// Open (or create) a database file / 打开数据库
    pub async fn connect(database_url: &str) -> Result<Self, CatalogError> {
        let db = SqlitePoolOptions::new()
            .max_connections(4)
            .connect(database_url)
            .await?;

        // 启用WAL模式，提高并发性能
        sqlx::query("PRAGMA journal_mode=WAL").execute(&db).await?;
        sqlx::query("PRAGMA busy_timeout=5000").execute(&db).await?;

        tracing::info!("Catalog database opened: {} (WAL mode)", database_url);
        Ok(Self::new(db))
    }

    /// Use an existing pool
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    pub async fn close(&self) {
        self.db.close().await;
    }

    /// Create tables if missing / 初始化表结构
    pub async fn init(&self) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tools (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                tags TEXT NOT NULL DEFAULT '[]',
                instruction_what TEXT,
                instruction_why TEXT,
                instruction_how TEXT,
                component_id TEXT,
                category TEXT,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tools_active ON tools(is_active)")
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Insert a new tool; false when the id is already taken / 新增工具
    ///
    /// A deactivated record still owns its id.
    pub async fn insert(&self, record: &ToolRecord) -> Result<bool, CatalogError> {
        let mut tx = self.db.begin().await?;
        let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM tools WHERE id = ?")
            .bind(&record.id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        Self::upsert_with(&mut *tx, record).await?;
        tx.commit().await?;
        Ok(true)
    }

    /// Apply a partial update to an active tool / 更新工具
    pub async fn update(&self, id: &str, update: ToolUpdate) -> Result<Option<ToolRecord>, CatalogError> {
        let mut tx = self.db.begin().await?;
        let row: Option<ToolRow> = sqlx::query_as(&format!("{} WHERE id = ? AND is_active = 1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        // stored tags stay free of the implicit AI tag
        let mut record = match row {
            Some(row) => ToolRecord::try_from(row)?,
            None => return Ok(None),
        };

        update.apply(&mut record);
        Self::upsert_with(&mut *tx, &record).await?;
        tx.commit().await?;
        Ok(Some(record.with_implicit_tags()))
    }

    /// Insert or update a tool, keeping its creation time / 插入或更新工具
    async fn upsert_with(
        conn: &mut sqlx::SqliteConnection,
        record: &ToolRecord,
    ) -> Result<(), CatalogError> {
        let tags = serde_json::to_string(&record.tags).map_err(|source| CatalogError::Tags {
            id: record.id.clone(),
            source,
        })?;
        let now = Utc::now().to_rfc3339();
        let instructions = record.instructions.as_ref();

        sqlx::query(
            r#"
            INSERT INTO tools (id, name, description, tags, instruction_what, instruction_why,
                instruction_how, component_id, category, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                tags = excluded.tags,
                instruction_what = excluded.instruction_what,
                instruction_why = excluded.instruction_why,
                instruction_how = excluded.instruction_how,
                component_id = excluded.component_id,
                category = excluded.category,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(tags)
        .bind(instructions.map(|i| i.what.as_str()))
        .bind(instructions.map(|i| i.why.as_str()))
        .bind(instructions.map(|i| i.how.as_str()))
        .bind(record.component_id.as_deref())
        .bind(record.category.as_deref())
        .bind(record.active)
        .bind(&now)
        .bind(&now)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Active tool by id / 按ID获取工具
    pub async fn get_by_id(&self, id: &str) -> Result<Option<ToolRecord>, CatalogError> {
        let row: Option<ToolRow> = sqlx::query_as(&format!("{} WHERE id = ? AND is_active = 1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        row.map(|r| ToolRecord::try_from(r).map(ToolRecord::with_implicit_tags))
            .transpose()
    }

    /// Soft delete / 软删除
    pub async fn deactivate(&self, id: &str) -> Result<bool, CatalogError> {
        let result = sqlx::query("UPDATE tools SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1")
            .bind(Utc::now().to_rfc3339())
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Import a JSON array of tool records in one transaction / 导入种子数据
    pub async fn import_seed(&self, path: &Path) -> Result<usize, CatalogError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::SeedIo {
                path: path.to_path_buf(),
                source,
            })?;
        let records: Vec<ToolRecord> =
            serde_json::from_str(&content).map_err(|source| CatalogError::SeedFormat {
                path: path.to_path_buf(),
                source,
            })?;

        let mut tx = self.db.begin().await?;
        for record in &records {
            Self::upsert_with(&mut *tx, record).await?;
        }
        tx.commit().await?;

        tracing::info!("Imported {} tools from {:?}", records.len(), path);
        Ok(records.len())
    }

    pub async fn count_active(&self) -> Result<i64, CatalogError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tools WHERE is_active = 1")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl CandidateSource for SqliteCatalog {
    async fn fetch_active(&self, tag: Option<&str>) -> Result<Vec<ToolRecord>, CatalogError> {
        let rows: Vec<ToolRow> = sqlx::query_as(&format!("{} WHERE is_active = 1 ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.db)
            .await?;

        // Tag filter runs after the implicit AI tag is applied
        let tag = tag_filter(tag);
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let record = ToolRecord::try_from(row)?.with_implicit_tags();
            if tag.map_or(true, |t| record.has_tag(t)) {
                records.push(record);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ALL_TAG;
    use std::io::Write;

    async fn memory_catalog() -> SqliteCatalog {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let catalog = SqliteCatalog::new(pool);
        catalog.init().await.unwrap();
        catalog
    }

    fn gpu_tool() -> ToolRecord {
        ToolRecord::new("gpu-mem", "GPU記憶體計算器")
            .with_tags(["AI", "工具"])
            .with_description("估算GPU記憶體")
            .with_instructions("估算顯存", "避免不足", "輸入參數量")
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let catalog = memory_catalog().await;
        assert!(catalog.insert(&gpu_tool()).await.unwrap());

        let loaded = catalog.get_by_id("gpu-mem").await.unwrap().unwrap();
        assert_eq!(loaded, gpu_tool());
        assert!(catalog.get_by_id("missing").await.unwrap().is_none());

        let renamed = ToolRecord { name: "GPU 計算".to_string(), ..gpu_tool() };
        assert!(!catalog.insert(&renamed).await.unwrap());
        assert_eq!(catalog.count_active().await.unwrap(), 1);
        assert_eq!(catalog.get_by_id("gpu-mem").await.unwrap().unwrap().name, "GPU記憶體計算器");
    }

    #[tokio::test]
    async fn test_update() {
        let catalog = memory_catalog().await;
        catalog
            .insert(&ToolRecord::new("prompt", "寫作助手").with_tags(["寫作"]))
            .await
            .unwrap();

        let update = ToolUpdate {
            name: Some("文案助手".to_string()),
            tags: Some(vec!["寫作".to_string(), "行銷".to_string()]),
            ..ToolUpdate::default()
        };
        let updated = catalog.update("prompt", update).await.unwrap().unwrap();
        assert_eq!(updated.name, "文案助手");
        assert_eq!(updated.tags, vec!["寫作", "行銷", "AI"]);

        // implicit tag is not persisted
        let (tags,): (String,) = sqlx::query_as("SELECT tags FROM tools WHERE id = 'prompt'")
            .fetch_one(&catalog.db)
            .await
            .unwrap();
        assert_eq!(tags, r#"["寫作","行銷"]"#);

        assert!(catalog.update("missing", ToolUpdate::default()).await.unwrap().is_none());
        assert!(catalog.deactivate("prompt").await.unwrap());
        assert!(catalog.update("prompt", ToolUpdate::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_instructions_roundtrip_as_none() {
        let catalog = memory_catalog().await;
        let bare = ToolRecord::new("bare", "Bare").with_component("Custom");
        catalog.insert(&bare).await.unwrap();
        let loaded = catalog.get_by_id("bare").await.unwrap().unwrap();
        assert!(loaded.instructions.is_none());
        assert_eq!(loaded.instruction_why(), "");
    }

    #[tokio::test]
    async fn test_fetch_active_and_tag() {
        let catalog = memory_catalog().await;
        catalog.insert(&gpu_tool()).await.unwrap();
        catalog
            .insert(&ToolRecord::new("metal", "金屬重量計算器").with_tags(["製造"]).with_component("Metal"))
            .await
            .unwrap();
        catalog
            .insert(&ToolRecord::new("prompt", "寫作助手").with_tags(["寫作"]))
            .await
            .unwrap();

        assert_eq!(catalog.fetch_active(None).await.unwrap().len(), 3);

        let ai: Vec<String> = catalog
            .fetch_active(Some("AI"))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ai, vec!["gpu-mem", "prompt"]);

        assert!(catalog.deactivate("prompt").await.unwrap());
        assert!(!catalog.deactivate("prompt").await.unwrap());
        assert_eq!(catalog.fetch_active(Some(ALL_TAG)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_tags_is_an_error() {
        let catalog = memory_catalog().await;
        sqlx::query(
            "INSERT INTO tools (id, name, tags, created_at, updated_at) VALUES ('bad', 'Bad', 'not json', '', '')",
        )
        .execute(&catalog.db)
        .await
        .unwrap();

        let err = catalog.fetch_active(None).await.unwrap_err();
        assert!(matches!(err, CatalogError::Tags { ref id, .. } if id == "bad"));
    }

    #[tokio::test]
    async fn test_import_seed() {
        let catalog = memory_catalog().await;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id":"t1","name":"翻譯助手","tags":["翻譯"],"instructions":{{"what":"翻譯文字"}}}},
                {{"id":"t2","name":"BMI 計算器","componentId":"BmiCalculator","tags":["健康"]}}
            ]"#
        )
        .unwrap();

        let imported = catalog.import_seed(file.path()).await.unwrap();
        assert_eq!(imported, 2);
        let t1 = catalog.get_by_id("t1").await.unwrap().unwrap();
        assert_eq!(t1.instruction_what(), "翻譯文字");
        assert_eq!(t1.tags, vec!["翻譯", "AI"]);
    }

    #[tokio::test]
    async fn test_import_seed_errors() {
        let catalog = memory_catalog().await;
        let missing = catalog.import_seed(Path::new("/nonexistent/seed.json")).await;
        assert!(matches!(missing, Err(CatalogError::SeedIo { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not an array").unwrap();
        let invalid = catalog.import_seed(file.path()).await;
        assert!(matches!(invalid, Err(CatalogError::SeedFormat { .. })));
    }
}
