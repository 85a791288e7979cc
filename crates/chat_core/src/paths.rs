use std::path::PathBuf;

/// Application directory (~/.menu-chat)
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".menu-chat")
}

/// Path of the JSON config file inside the application directory
pub fn config_json_path() -> PathBuf {
    app_dir().join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_json_lives_in_app_dir() {
        let path = config_json_path();
        assert!(path.ends_with(".menu-chat/config.json"));
        assert_eq!(path.parent(), Some(app_dir().as_path()));
    }
}
