use serde::{Deserialize, Serialize};

/// Configuration for the task_manager module (`modules.task_manager`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskManagerConfig {
    #[serde(default = "default_page_limit")]
    pub default_page_limit: u64,
    #[serde(default = "default_max_page_limit")]
    pub max_page_limit: u64,
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for TaskManagerConfig {
    fn default() -> Self {
        Self {
            default_page_limit: default_page_limit(),
            max_page_limit: default_max_page_limit(),
            min_password_length: default_min_password_length(),
        }
    }
}

fn default_page_limit() -> u64 {
    100
}

fn default_max_page_limit() -> u64 {
    1000
}

fn default_min_password_length() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: TaskManagerConfig =
            serde_json::from_value(serde_json::json!({ "max_page_limit": 50 })).unwrap();
        assert_eq!(cfg.default_page_limit, 100);
        assert_eq!(cfg.max_page_limit, 50);
        assert_eq!(cfg.min_password_length, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<TaskManagerConfig, _> =
            serde_json::from_value(serde_json::json!({ "page_size": 5 }));
        assert!(res.is_err());
    }
}
