use crate::models::AppSnapshot;
use crate::store::{LocalStore, WebStorage};
use crate::sync::Synchronizer;
use std::rc::Rc;
use yew::prelude::*;

pub type AppSync = Synchronizer<LocalStore<WebStorage>>;

/// Handed to every page through a `ContextProvider`. Pages read `snapshot`
/// and route all changes through `sync`, then call `refresh` so the newest
/// published snapshot is rendered.
#[derive(Clone)]
pub struct AppContext {
    pub snapshot: Rc<AppSnapshot>,
    pub sync: Rc<AppSync>,
    pub refresh: Callback<()>,
    pub load_error: Option<String>,
    pub open_login: Callback<()>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.snapshot, &other.snapshot)
            && Rc::ptr_eq(&self.sync, &other.sync)
            && self.load_error == other.load_error
    }
}
