use failure::Error;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use toml;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Config {
    pub help: Option<HelpConfig>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct HelpConfig {
    pub file: Option<String>,
}

impl HelpConfig {
    fn from_env_vars(file_var: &str) -> HelpConfig {
        let mut hc = HelpConfig { file: None };
        if let Ok(path) = env::var(file_var) {
            hc.file = Some(path);
        };
        hc
    }
}

impl Config {
    /// Load a config from the environment. A config object will be constructed
    /// from a combination of environment variables and/or config files on disk.
    /// Environment variables supercede values in files.
    pub fn load(path: Option<&str>) -> Result<Config, Error> {
        let mut conf = Config { help: None };

        // try config file
        match path {
            // custom path to config file, passed as a flag
            Some(path) => {
                if let Ok(found) = Config::from_toml_file(path) {
                    conf = found;
                }
            }
            // default path
            None => {
                let base_dir = env::var("HOME")?;
                let joined_path = Path::join(Path::new(&base_dir), ".config/data-date/conf.toml");
                if let Ok(found) = Config::from_toml_file(joined_path) {
                    conf = found;
                }
            }
        }
        let from_env = HelpConfig::from_env_vars("DATA_DATE_HELP_FILE");
        if from_env.file.is_some() || conf.help.is_none() {
            conf.help = Some(from_env);
        }
        Ok(conf)
    }

    /// Deserialize a config from a toml file without applying environment variables.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut f = File::open(path)?;
        let mut buffer = String::new();
        f.read_to_string(&mut buffer)?;
        Ok(toml::from_str::<Config>(buffer.as_str())?)
    }
}
