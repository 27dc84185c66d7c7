use super::*;

pub const CONFIG_PATH: &str = "weak_events.toml";

/// Every top level key of the file. Values must be booleans or integers.
pub fn settings_from_toml(path: &str, fs: &Filesystem) -> Result<Vec<Setting>, Box<dyn Error>> {
    let table = match fs.read_to_string(path)?.parse::<toml::Value>()? {
        toml::Value::Table(table) => table,
        _ => return Err(format!("top level of {} is not a table", path).into()),
    };
    table
        .into_iter()
        .map(|(name, value)| -> Result<Setting, Box<dyn Error>> {
            let value = match value {
                toml::Value::Boolean(value) => SettingValue::Bool(value),
                toml::Value::Integer(value) => SettingValue::Int(value),
                other => {
                    return Err(format!(
                        "{} in {} should be a boolean or an integer, not {}",
                        name, path, other
                    )
                    .into())
                }
            };
            Ok(Setting::new(&name, value, path))
        })
        .collect()
}
