use std::fs;

pub fn get() -> String {
    let config_path = match std::env::var("QB_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "quillbase.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        panic!("quillbase.yml file specified in QB_CONFIG_PATH environment variable or current directory must exist")
    }

    config_path
}
