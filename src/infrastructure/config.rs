use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: String,
}

/// The fixed known-site set: static configuration, not derived from the
/// dataset. Populates the site selector and validates records during load.
#[derive(Debug, Deserialize, Clone)]
pub struct SitesConfig {
    #[serde(default)]
    pub sites: Vec<SiteConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub id: String,
    pub label: String,
}

impl SitesConfig {
    pub fn contains(&self, id: &str) -> bool {
        self.sites.iter().any(|site| site.id == id)
    }
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/launchdash"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_sites_config() -> anyhow::Result<SitesConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/sites"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sites_config_contains() {
        let sites = SitesConfig {
            sites: vec![
                SiteConfig {
                    id: "CCAFS LC-40".to_string(),
                    label: "CCAFS LC-40".to_string(),
                },
                SiteConfig {
                    id: "KSC LC-39A".to_string(),
                    label: "KSC LC-39A".to_string(),
                },
            ],
        };

        assert!(sites.contains("CCAFS LC-40"));
        assert!(!sites.contains("CCAFS SLC-40"));
    }
}
