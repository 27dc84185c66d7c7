use super::*;

/// Get the configuration for the demo program from weak_events.toml (if it exists) and the command
/// line arguments, which win over the file.
pub fn build_config(args: &[String]) -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(args, &real_filesystem())
}

pub fn build_config_with(args: &[String], fs: &Filesystem) -> Result<MasterConfig, Box<dyn Error>> {
    let mut conf = MasterConfig::default();
    let from_args = match settings_from_args(args)? {
        Some(settings) => settings,
        None => {
            println!("Options:\n{}", help_text());
            conf.happy_exit = true;
            return Ok(conf);
        }
    };
    let from_file = if fs.is_file(CONFIG_PATH) {
        settings_from_toml(CONFIG_PATH, fs)?
    } else {
        Vec::new()
    };
    for setting in from_file.iter().chain(&from_args) {
        conf.apply(setting)?;
    }
    Ok(conf)
}
