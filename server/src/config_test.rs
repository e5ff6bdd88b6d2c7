use super::*;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config.port, 3000);
    assert_eq!(config.site_root, None);
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_site_root() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("SITE_ROOT", "dist/site")])).expect("config");
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_root, Some(PathBuf::from("dist/site")));
}

#[test]
fn blank_site_root_is_ignored() {
    let config = ServerConfig::from_lookup(lookup(&[("SITE_ROOT", "  ")])).expect("config");
    assert_eq!(config.site_root, None);
}

#[test]
fn rejects_non_numeric_port() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
}

#[test]
fn rejects_zero_and_out_of_range_ports() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "0")])).is_err());
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
