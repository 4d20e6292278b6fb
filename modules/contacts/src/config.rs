use serde::{Deserialize, Serialize};

/// Configuration for the contacts module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactsConfig {
    /// Populate the store with sample contacts on startup.
    #[serde(default = "default_seed")]
    pub seed: bool,
    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            id_length: default_id_length(),
        }
    }
}

impl ContactsConfig {
    /// Reject settings the module cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.id_length == 0 {
            anyhow::bail!("contacts id_length must be at least 1");
        }
        Ok(())
    }
}

fn default_seed() -> bool {
    true
}

fn default_id_length() -> usize {
    12
}
