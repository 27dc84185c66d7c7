use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
        }
    }
}

/// One option set by the user
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    /// Lower case with underscores
    pub name: String,
    pub value: SettingValue,
    /// Where it was set, for error messages
    pub source: String,
}

impl Setting {
    pub fn new(name: &str, value: SettingValue, source: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            source: source.to_string(),
        }
    }

    pub fn as_bool(&self) -> Result<bool, Box<dyn Error>> {
        match self.value {
            SettingValue::Bool(value) => Ok(value),
            _ => Err(self.expected("true or false")),
        }
    }

    /// A whole number of at least `min`
    pub fn as_count(&self, min: usize) -> Result<usize, Box<dyn Error>> {
        match self.value {
            SettingValue::Int(value) if value >= min as i64 => Ok(value as usize),
            _ => Err(self.expected(&format!("a whole number of at least {}", min))),
        }
    }

    pub fn unknown(&self) -> Box<dyn Error> {
        format!("{} (from {}) is not a valid option", self.name, self.source).into()
    }

    fn expected(&self, what: &str) -> Box<dyn Error> {
        format!(
            "{} (from {}) should be {}, not {}",
            self.name, self.source, what, self.value
        )
        .into()
    }
}
