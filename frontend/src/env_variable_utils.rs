use web_sys::window;

/// Reads `window.ENV_CONFIG[key]`, injected by the hosting page.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Chemicalbook India".to_string())
}

pub fn get_store_name() -> String {
    get_env_var("STORE_NAME").unwrap_or_else(|| "ChemicalbookIndiaDB".to_string())
}

pub fn get_admin_email() -> String {
    get_env_var("ADMIN_EMAIL").unwrap_or_else(|| "admin@chemicalbook.in".to_string())
}

pub fn get_admin_password() -> String {
    get_env_var("ADMIN_PASSWORD").unwrap_or_else(|| "changeme".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
