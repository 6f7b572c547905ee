use super::models::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Normalize inconsistent settings in place and report what was adjusted or
/// is missing.
pub fn apply_guard_rails(config: &mut Config) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if config.database.url.is_none() {
        warnings.push_with_hint(
            "No database URL configured",
            "Set DATABASE_URL, or DATABASE_HOST / DATABASE_USER / DATABASE_NAME, or [database].url in the config file",
        );
    }

    let db = &mut config.database;
    if db.max_connections == 0 {
        db.max_connections = 1;
        warnings.push("database.max_connections was 0; using 1");
    }
    if db.min_connections > db.max_connections {
        warnings.push(format!(
            "database.min_connections ({}) exceeds max_connections ({}); clamping",
            db.min_connections, db.max_connections
        ));
        db.min_connections = db.max_connections;
    }

    let pagination = &mut config.pagination;
    if pagination.max_per_page == 0 {
        pagination.max_per_page = 1;
        warnings.push("pagination.max_per_page was 0; using 1");
    }
    if pagination.default_per_page == 0 {
        pagination.default_per_page = 1;
        warnings.push("pagination.default_per_page was 0; using 1");
    }
    if pagination.default_per_page > pagination.max_per_page {
        warnings.push_with_hint(
            format!(
                "pagination.default_per_page ({}) exceeds max_per_page ({}); clamping",
                pagination.default_per_page, pagination.max_per_page
            ),
            "Raise max_per_page or lower default_per_page",
        );
        pagination.default_per_page = pagination.max_per_page;
    }

    warnings
}
