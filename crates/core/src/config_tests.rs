use super::*;

#[test]
fn parses_minimal_config() {
    let yaml = "version: \"1\"\nhooks: []\n";
    let cfg: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.version, "1");
    assert!(cfg.hooks.is_empty());
}

#[test]
fn defaults_default_to_empty() {
    let yaml = "version: \"1\"\nhooks: []\n";
    let cfg: Config = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.defaults.model.is_none());
    assert!(cfg.defaults.on_failure.is_none());
}
