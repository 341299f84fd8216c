use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::renderer::{generate_sql, Dialect};
use crate::state::QueryBuilderState;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Saved query not found: {id}")]
    NotFound { id: Uuid },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Именованный снимок запроса. `sql` — кэшированный текст на момент
/// сохранения; при загрузке из JSON не перегенерируется.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuery {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: QueryBuilderState,
    pub sql: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Хранилище снимков, порядок — порядок добавления. Меняется только явными
/// действиями: save / update_state / rename / delete.
#[derive(Clone, Debug, Default)]
pub struct SavedQueryStore {
    items: IndexMap<Uuid, SavedQuery>,
}

impl SavedQueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сохраняет состояние под именем; SQL компилируется и замораживается
    /// здесь же.
    pub fn save<S: Into<String>>(
        &mut self,
        name: S,
        description: Option<String>,
        state: QueryBuilderState,
        dialect: Dialect,
    ) -> &SavedQuery {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let sql = generate_sql(&state, dialect);
        let name = name.into();
        tracing::debug!("[STORE] save `{}` as {} ({} bytes sql)", name, id, sql.len());

        let entry = SavedQuery {
            id,
            name,
            description,
            state,
            sql,
            created_at: now,
            updated_at: now,
        };
        self.items.insert(id, entry);
        &self.items[&id]
    }

    /// Заменяет состояние снимка и перекомпилирует его SQL.
    pub fn update_state(
        &mut self,
        id: Uuid,
        state: QueryBuilderState,
        dialect: Dialect,
    ) -> Result<&SavedQuery> {
        let entry = self
            .items
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        entry.sql = generate_sql(&state, dialect);
        entry.state = state;
        entry.updated_at = Utc::now();
        tracing::debug!("[STORE] update {} ({} bytes sql)", id, entry.sql.len());
        Ok(&*entry)
    }

    pub fn rename<S: Into<String>>(&mut self, id: Uuid, name: S) -> Result<()> {
        let entry = self
            .items
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        entry.name = name.into();
        entry.updated_at = Utc::now();
        Ok(())
    }

    /// Удаляет снимок, сохраняя порядок остальных.
    pub fn delete(&mut self, id: Uuid) -> Result<SavedQuery> {
        let removed = self
            .items
            .shift_remove(&id)
            .ok_or(StoreError::NotFound { id })?;
        tracing::debug!("[STORE] delete {} (`{}`)", id, removed.name);
        Ok(removed)
    }

    pub fn get(&self, id: Uuid) -> Option<&SavedQuery> {
        self.items.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedQuery> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Сериализация в JSON-массив в порядке добавления.
    pub fn to_json(&self) -> Result<String> {
        let list: Vec<&SavedQuery> = self.items.values().collect();
        Ok(serde_json::to_string_pretty(&list)?)
    }

    /// Восстановление из JSON; `sql` каждого снимка берётся как есть.
    pub fn from_json(json: &str) -> Result<Self> {
        let list: Vec<SavedQuery> = serde_json::from_str(json)?;
        let mut items = IndexMap::with_capacity(list.len());
        for entry in list {
            items.insert(entry.id, entry);
        }
        Ok(Self { items })
    }
}
