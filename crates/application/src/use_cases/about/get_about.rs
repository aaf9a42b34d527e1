use genes_domain::AboutInfo;

pub struct GetAboutUseCase;

impl GetAboutUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Fixed identification; no request input influences it.
    pub fn execute(&self) -> AboutInfo {
        AboutInfo::current()
    }
}

impl Default for GetAboutUseCase {
    fn default() -> Self {
        Self::new()
    }
}
