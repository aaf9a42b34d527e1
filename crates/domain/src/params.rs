use std::collections::HashMap;

/// Declares the request parameters an endpoint understands, each with the
/// value to use when the client omits it or sends it blank.
#[derive(Debug, Clone, Default)]
pub struct ParamResolver {
    declared: Vec<(&'static str, String)>,
}

impl ParamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, default: impl ToString) -> Self {
        self.declared.push((name, default.to_string()));
        self
    }

    /// Produces a value for every declared name. Undeclared request
    /// parameters are dropped.
    pub fn resolve(&self, raw: &HashMap<String, String>) -> ResolvedParams {
        let values = self
            .declared
            .iter()
            .map(|(name, default)| {
                let value = raw
                    .get(*name)
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .unwrap_or(default.as_str());
                (*name, value.to_string())
            })
            .collect();

        ResolvedParams { values }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParams {
    values: HashMap<&'static str, String>,
}

impl ResolvedParams {
    /// Value of a declared parameter; empty for names never declared.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
