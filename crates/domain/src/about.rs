use serde::Serialize;

/// Static service identification returned by `/about`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub copyright: &'static str,
}

impl AboutInfo {
    pub const fn current() -> Self {
        Self {
            name: "genes",
            version: env!("CARGO_PKG_VERSION"),
            copyright: "Copyright (C) 2018-2019 Antony Holmes",
        }
    }
}
