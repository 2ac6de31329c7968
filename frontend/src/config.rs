use crate::env_variable_utils::{
    get_admin_email, get_admin_password, get_app_name, get_store_name, is_debug_mode,
};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref APP_NAME: String = get_app_name();
    pub static ref STORE_NAME: String = get_store_name();
    pub static ref ADMIN_EMAIL: String = get_admin_email();
    pub static ref ADMIN_PASSWORD: String = get_admin_password();
    pub static ref DEBUG_MODE: bool = is_debug_mode();
}
