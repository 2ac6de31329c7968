use crate::store::{StoreError, StoreResult};
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// String key/value storage provided by the host.
///
/// Errors are reported as plain reasons; [`crate::store::LocalStore`] decides
/// which collection they belong to.
pub trait StorageBackend {
    /// Fails when the host has no storage or refuses access to it.
    fn check_available(&self) -> StoreResult<()>;

    fn get_item(&self, key: &str) -> Result<Option<String>, String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    fn remove_item(&self, key: &str) -> Result<(), String>;

    /// Every key currently held, in no particular order.
    fn keys(&self) -> Result<Vec<String>, String>;
}

/// Browser `localStorage`.
#[derive(Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        WebStorage
    }

    fn storage(&self) -> StoreResult<Storage> {
        let window = window()
            .ok_or_else(|| StoreError::StoreUnavailable("no window in this context".to_string()))?;

        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StoreError::StoreUnavailable(
                "localStorage is not supported".to_string(),
            )),
            Err(e) => Err(StoreError::StoreUnavailable(js_error_message(&e))),
        }
    }
}

impl StorageBackend for WebStorage {
    fn check_available(&self) -> StoreResult<()> {
        self.storage().map(|_| ())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        let storage = self.storage().map_err(|e| e.to_string())?;
        storage.get_item(key).map_err(|e| js_error_message(&e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self.storage().map_err(|e| e.to_string())?;
        storage.set_item(key, value).map_err(|e| js_error_message(&e))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        let storage = self.storage().map_err(|e| e.to_string())?;
        storage.remove_item(key).map_err(|e| js_error_message(&e))
    }

    fn keys(&self) -> Result<Vec<String>, String> {
        let storage = self.storage().map_err(|e| e.to_string())?;
        let len = storage.length().map_err(|e| js_error_message(&e))?;

        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Some(key) = storage.key(i).map_err(|e| js_error_message(&e))? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

// DOMException (e.g. QuotaExceededError) carries its text in `message`
fn js_error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

impl<B: StorageBackend + ?Sized> StorageBackend for std::rc::Rc<B> {
    fn check_available(&self) -> StoreResult<()> {
        (**self).check_available()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, String> {
        (**self).keys()
    }
}
