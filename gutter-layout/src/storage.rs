use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::errors::StoreError;

/// String keyed persistent preferences (cookies or an equivalent store).
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Store handle shared by every component of one page.
pub type SharedStore = Rc<RefCell<dyn PreferenceStore>>;

/// Wrap a store into a [`SharedStore`].
pub fn shared<S>(store: S) -> SharedStore
where
    S: PreferenceStore + 'static,
{
    Rc::new(RefCell::new(store))
}

/// Volatile store used for tests and pages without persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Preferences persisted as a flat JSON object on disk.
///
/// Every mutation rewrites the file atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store. So does an unreadable JSON
    /// payload, which is logged and overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => {
                match serde_json::from_str::<BTreeMap<String, String>>(
                    &contents,
                ) {
                    Ok(values) => values,
                    Err(err) => {
                        log::warn!(
                            "ignoring invalid preferences at {}: {err}",
                            path.display()
                        );
                        BTreeMap::new()
                    },
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                BTreeMap::new()
            },
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default location: `$HOME/.config/gutter/preferences.json`.
    pub fn default_path() -> PathBuf {
        config_dir().join("preferences.json")
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(&self.values)?;
        write_atomic(&self.path, payload.as_bytes())?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Preferences backed by a `document.cookie` style string.
///
/// Names and values are percent-escaped so keys with spaces and
/// comma-joined values survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    values: BTreeMap<String, String>,
}

impl CookieJar {
    /// Parse `name=value; other=value`. Pairs without `=` are skipped.
    pub fn parse(cookies: &str) -> Self {
        let values = cookies
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = unescape(name.trim());
                if name.is_empty() {
                    return None;
                }
                Some((name, unescape(value.trim())))
            })
            .collect();

        Self { values }
    }

    /// Serialize every cookie back into a `document.cookie` string.
    pub fn cookie_string(&self) -> String {
        self.values
            .iter()
            .map(|(name, value)| format!("{}={}", escape(name), escape(value)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl PreferenceStore for CookieJar {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Render a cookie assignment. Without `days` the cookie lives for the
/// browser session.
pub fn set_cookie(key: &str, value: &str, days: Option<u32>) -> String {
    let mut cookie = format!("{}={}", escape(key), escape(value));
    if let Some(days) = days {
        let seconds = u64::from(days) * 24 * 60 * 60;
        cookie.push_str(&format!("; max-age={seconds}"));
    }
    cookie.push_str("; path=/");
    cookie
}

/// Render the assignment that deletes a cookie.
pub fn expire_cookie(key: &str) -> String {
    format!("{}=; max-age=0; path=/", escape(key))
}

fn escape(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn unescape(encoded: &str) -> String {
    let decoded = urlencoding::decode_binary(encoded.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}

pub(crate) fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("gutter");
    }

    std::env::temp_dir().join("gutter")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
