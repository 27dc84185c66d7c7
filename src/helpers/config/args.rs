use super::*;

const SOURCE: &str = "command line";

fn parse_value(option: &str, value: Option<&str>) -> Result<SettingValue, Box<dyn Error>> {
    match value {
        None | Some("true") => Ok(SettingValue::Bool(true)),
        Some("false") => Ok(SettingValue::Bool(false)),
        Some(value) => value
            .parse()
            .map(SettingValue::Int)
            .map_err(|_| -> Box<dyn Error> {
                format!("{} is not a valid value for {}", value, option).into()
            }),
    }
}

/// Options are `--name value` or a bare `--name` for true. Dashes in names become underscores.
/// Returns None if --help was given. The first argument is the program name and is skipped.
pub fn settings_from_args(args: &[String]) -> Result<Option<Vec<Setting>>, Box<dyn Error>> {
    let mut settings = Vec::new();
    let mut args = args.iter().skip(1).peekable();
    while let Some(option) = args.next() {
        if option == "--help" || option == "-h" {
            return Ok(None);
        }
        let name = match option.strip_prefix("--") {
            Some(name) => name.replace('-', "_"),
            None => return Err(format!("expected an --option, found {}", option).into()),
        };
        let value = args.next_if(|arg| !arg.starts_with('-'));
        settings.push(Setting::new(
            &name,
            parse_value(option, value.map(String::as_str))?,
            SOURCE,
        ));
    }
    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("demo")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_no_settings() {
        assert_eq!(settings_from_args(&args(&[])).unwrap(), Some(vec![]));
    }

    #[test]
    fn parses_values_and_flags() {
        let settings = settings_from_args(&args(&["--foo-bar", "12", "--baz", "--qux", "false"]))
            .unwrap()
            .unwrap();
        assert_eq!(
            settings,
            vec![
                Setting::new("foo_bar", SettingValue::Int(12), SOURCE),
                Setting::new("baz", SettingValue::Bool(true), SOURCE),
                Setting::new("qux", SettingValue::Bool(false), SOURCE),
            ]
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(settings_from_args(&args(&["--foo", "1", "-h"])).unwrap(), None);
    }

    #[test]
    fn stray_value_is_an_error() {
        assert!(settings_from_args(&args(&["--foo", "1", "2"])).is_err());
        assert!(settings_from_args(&args(&["1"])).is_err());
    }

    #[test]
    fn garbage_value_is_an_error() {
        assert!(settings_from_args(&args(&["--foo", "many"])).is_err());
    }
}
