use genes_domain::AboutInfo;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct AboutResponse {
    pub name: String,
    pub version: String,
    pub copyright: String,
}

impl From<AboutInfo> for AboutResponse {
    fn from(info: AboutInfo) -> Self {
        Self {
            name: info.name.to_string(),
            version: info.version.to_string(),
            copyright: info.copyright.to_string(),
        }
    }
}
