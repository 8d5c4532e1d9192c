use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";

/// Sections `Config` reads, with the string keys each one accepts.
const SECTIONS: &[(&str, &[&str])] = &[("classes", &["prefix"]), ("logging", &["level"])];

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let content = fs::read_to_string(CONFIG_PATH).expect("failed to read default_config.toml");
    let config = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("invalid default_config.toml: {e}"));

    // `Config::compiled_default` falls back to defaults on a bad file, so
    // shape mistakes have to surface here.
    for (name, value) in &config {
        let Some((_, keys)) = SECTIONS.iter().find(|(section, _)| *section == name.as_str()) else {
            panic!("default_config.toml: unknown section [{name}]");
        };
        let Some(section) = value.as_table() else {
            panic!("default_config.toml: [{name}] must be a table");
        };
        for (key, value) in section {
            if !keys.contains(&key.as_str()) {
                panic!("default_config.toml: unknown key {name}.{key}");
            }
            if !value.is_str() {
                panic!("default_config.toml: {name}.{key} must be a string");
            }
        }
    }
}
