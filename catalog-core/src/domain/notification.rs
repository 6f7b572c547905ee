use serde::Serialize;

/// One failed rule, tagged with the context (usually the entity name) that
/// reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationError {
    pub context: String,
    pub message: String,
}

/// Collects validation failures so an entity can report all of them at once
/// instead of stopping at the first broken rule.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    errors: Vec<NotificationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[NotificationError] {
        &self.errors
    }

    pub fn add_error(
        &mut self,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.errors.push(NotificationError {
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render errors as `"{context}: {message},"` pairs, optionally keeping
    /// only those reported under `context`.
    pub fn messages(&self, context: Option<&str>) -> String {
        self.errors
            .iter()
            .filter(|error| context.is_none_or(|ctx| error.context == ctx))
            .map(|error| format!("{}: {},", error.context, error.message))
            .collect()
    }
}
