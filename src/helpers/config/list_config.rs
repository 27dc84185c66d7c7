use super::*;

/// Tuning for a single handler list
#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    /// After a raise, the snapshot buffer is shrunk if its capacity is above this
    pub scratch_shrink_threshold: usize,
    /// If to log at debug level when dead handlers are pruned
    pub log_pruning: bool,
}

impl ListConfig {
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        (
            "scratch_shrink_threshold",
            "capacity above which a handler list frees its snapshot buffer after a raise",
        ),
        (
            "log_pruning",
            "log when dead handlers are dropped from a list",
        ),
    ];

    pub fn apply(&mut self, setting: &Setting) -> Result<(), Box<dyn Error>> {
        match setting.name.as_str() {
            "scratch_shrink_threshold" => self.scratch_shrink_threshold = setting.as_count(0)?,
            "log_pruning" => self.log_pruning = setting.as_bool()?,
            _ => return Err(setting.unknown()),
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            scratch_shrink_threshold: 64,
            log_pruning: true,
        }
    }
}
