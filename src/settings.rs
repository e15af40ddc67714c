// Account settings: API keys and notification preferences

use crate::display::mask_key;
use crate::models::ApiKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

/// Length of the random part of a generated key
const KEY_LENGTH: usize = 24;

/// Key environment, which decides the key prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Live,
    Test,
}

impl KeyKind {
    pub fn prefix(self) -> &'static str {
        match self {
            KeyKind::Live => "wh_live_",
            KeyKind::Test => "wh_test_",
        }
    }
}

/// Fresh secret: prefix plus 24 lowercase alphanumerics
pub fn generate_key(kind: KeyKind) -> String {
    let random = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    format!("{}{}", kind.prefix(), &random[..KEY_LENGTH])
}

/// The user's API keys and which of them are currently revealed
#[derive(Debug, Clone, Default)]
pub struct ApiKeyRing {
    keys: Vec<ApiKey>,
    revealed: HashSet<String>,
}

impl ApiKeyRing {
    pub fn new(keys: Vec<ApiKey>) -> Self {
        Self {
            keys,
            revealed: HashSet::new(),
        }
    }

    /// Production and development keys, as a new account starts with
    pub fn starter(today: NaiveDate) -> Self {
        let mut ring = Self::default();
        ring.push("Production Key", KeyKind::Live, today);
        ring.push("Development Key", KeyKind::Test, today);
        ring
    }

    pub fn keys(&self) -> &[ApiKey] {
        &self.keys
    }

    /// Add a live key; new keys start revealed so they can be copied once
    pub fn generate(&mut self, today: NaiveDate) -> &ApiKey {
        let name = format!("API Key {}", self.keys.len() + 1);
        let id = self.push(&name, KeyKind::Live, today);
        self.revealed.insert(id);
        info!(name = %name, "API key generated");
        &self.keys[self.keys.len() - 1]
    }

    /// Permanently remove a key
    pub fn revoke(&mut self, id: &str) -> Option<ApiKey> {
        let pos = self.keys.iter().position(|k| k.id == id)?;
        self.revealed.remove(id);
        let key = self.keys.remove(pos);
        info!(name = %key.name, "API key revoked");
        Some(key)
    }

    /// Flip visibility; returns whether the key is now revealed
    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        if self.revealed.remove(id) {
            false
        } else {
            self.revealed.insert(id.to_string());
            true
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Key text as it should be shown right now
    pub fn display(&self, key: &ApiKey) -> String {
        if self.is_revealed(&key.id) {
            key.key.clone()
        } else {
            mask_key(&key.key)
        }
    }

    fn push(&mut self, name: &str, kind: KeyKind, today: NaiveDate) -> String {
        let id = Uuid::now_v7().to_string();
        self.keys.push(ApiKey {
            id: id.clone(),
            name: name.to_string(),
            key: generate_key(kind),
            created: today,
        });
        id
    }
}

/// Email notification switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub failed_webhook: bool,
    pub weekly_digest: bool,
    pub security_alerts: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    FailedWebhook,
    WeeklyDigest,
    SecurityAlerts,
}

impl Notification {
    pub fn label(self) -> &'static str {
        match self {
            Notification::FailedWebhook => "Failed webhook",
            Notification::WeeklyDigest => "Weekly digest",
            Notification::SecurityAlerts => "Security alerts",
        }
    }
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            failed_webhook: true,
            weekly_digest: true,
            security_alerts: true,
        }
    }
}

impl NotificationPrefs {
    pub fn get(&self, which: Notification) -> bool {
        match which {
            Notification::FailedWebhook => self.failed_webhook,
            Notification::WeeklyDigest => self.weekly_digest,
            Notification::SecurityAlerts => self.security_alerts,
        }
    }

    /// Flip one switch and return its new value
    pub fn toggle(&mut self, which: Notification) -> bool {
        let slot = match which {
            Notification::FailedWebhook => &mut self.failed_webhook,
            Notification::WeeklyDigest => &mut self.weekly_digest,
            Notification::SecurityAlerts => &mut self.security_alerts,
        };
        *slot = !*slot;
        info!(notification = which.label(), enabled = *slot, "Notification toggled");
        *slot
    }
}
