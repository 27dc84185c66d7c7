use super::*;

/// Configuration for the whole weak-events-demo program
#[derive(Debug, Clone, PartialEq)]
pub struct MasterConfig {
    /// If to exit with success without running (for example, after showing --help)
    pub happy_exit: bool,
    /// How many receivers the demo subscribes
    pub receivers: usize,
    pub list: ListConfig,
}

impl MasterConfig {
    pub const OPTIONS: &'static [(&'static str, &'static str)] =
        &[("receivers", "number of receivers the demo subscribes")];

    pub fn apply(&mut self, setting: &Setting) -> Result<(), Box<dyn Error>> {
        match setting.name.as_str() {
            "receivers" => self.receivers = setting.as_count(1)?,
            _ => self.list.apply(setting)?,
        }
        Ok(())
    }
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            happy_exit: false,
            receivers: 3,
            list: ListConfig::default(),
        }
    }
}

/// One line per option, for --help
pub fn help_text() -> String {
    MasterConfig::OPTIONS
        .iter()
        .chain(ListConfig::OPTIONS)
        .map(|(name, help)| format!("  --{}: {}", name.replace('_', "-"), help))
        .collect::<Vec<_>>()
        .join("\n")
}
