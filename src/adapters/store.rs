use crate::domain::model::Account;
use crate::domain::ports::AccountStore;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Same shape the browser UI kept under its localStorage key: a JSON
/// array of `{id, name}` objects, no schema versioning.
pub const DEFAULT_STORE_FILE: &str = "steam_users.json";

#[derive(Debug, Clone)]
pub struct JsonAccountStore {
    path: PathBuf,
}

impl JsonAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AccountStore for JsonAccountStore {
    fn load(&self) -> Result<Vec<Account>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(accounts)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonAccountStore::new(dir.path().join("missing.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonAccountStore::new(dir.path().join("steam_users.json"));

        let accounts = vec![
            Account::new("76561198000000000", "Alice"),
            Account::new("fizz", "Bob"),
        ];
        store.save(&accounts).unwrap();
        assert_eq!(store.load().unwrap(), accounts);
    }

    #[test]
    fn test_wire_format_is_id_name_objects() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("steam_users.json");
        let store = JsonAccountStore::new(&path);

        store.save(&[Account::new("123", "Alice")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], "123");
        assert_eq!(value[0]["name"], "Alice");
    }

    #[test]
    fn test_load_accepts_hand_written_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("steam_users.json");
        fs::write(&path, r#"[{"id": "76561198", "name": "Carol"}]"#).unwrap();

        let store = JsonAccountStore::new(&path);
        let accounts = store.load().unwrap();
        assert_eq!(accounts, vec![Account::new("76561198", "Carol")]);
    }
}
