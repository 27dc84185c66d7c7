//! Configuration for the demo program: defaults, then weak_events.toml, then command line
//! arguments

use super::*;

mod args;
mod build_config;
mod list_config;
mod master_config;
mod setting;
mod toml_file;

pub use build_config::{build_config, build_config_with};
pub use list_config::ListConfig;
pub use master_config::MasterConfig;
pub use setting::{Setting, SettingValue};

use args::*;
use master_config::help_text;
use toml_file::*;
