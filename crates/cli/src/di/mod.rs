use genes_api::AppState;
use genes_application::services::CachedResponder;
use genes_application::use_cases::{
    FindGenesUseCase, GetAboutUseCase, ListDatabasesUseCase, SearchGenesUseCase,
};
use genes_domain::Config;
use genes_infrastructure::cache::{CacheSweeper, InMemoryResponseCache};
use genes_infrastructure::catalog::FsDatabaseCatalog;
use genes_infrastructure::tracks::GtfTrackReader;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Long-lived adapters shared by every request.
pub struct Services {
    pub cache: Arc<InMemoryResponseCache>,
    pub reader: Arc<GtfTrackReader>,
    pub catalog: Arc<FsDatabaseCatalog>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        info!(
            data_dir = %config.data.data_dir.display(),
            annotation_file = %config.data.annotation_file,
            "Initializing track services"
        );

        Self {
            cache: Arc::new(InMemoryResponseCache::new(config.cache.max_entries)),
            reader: Arc::new(GtfTrackReader::new(&config.data.annotation_file)),
            catalog: Arc::new(FsDatabaseCatalog::new(&config.data.data_dir)),
        }
    }

    pub fn start_sweeper(&self, config: &Config) -> JoinHandle<()> {
        CacheSweeper::new(Arc::clone(&self.cache), config.cache.sweep_interval_secs).start()
    }
}

pub struct UseCases {
    pub get_about: Arc<GetAboutUseCase>,
    pub find_genes: Arc<FindGenesUseCase>,
    pub search_genes: Arc<SearchGenesUseCase>,
    pub list_databases: Arc<ListDatabasesUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, services: &Services) -> Self {
        let responder = Arc::new(CachedResponder::new(
            services.cache.clone(),
            config.cache.ttl(),
        ));
        let data_root = &config.data.data_dir;

        Self {
            get_about: Arc::new(GetAboutUseCase::new()),
            find_genes: Arc::new(FindGenesUseCase::new(
                services.reader.clone(),
                responder.clone(),
                data_root,
            )),
            search_genes: Arc::new(SearchGenesUseCase::new(
                services.reader.clone(),
                responder.clone(),
                data_root,
            )),
            list_databases: Arc::new(ListDatabasesUseCase::new(
                services.catalog.clone(),
                responder,
            )),
        }
    }

    pub fn into_state(self, config: &Config) -> AppState {
        AppState {
            get_about: self.get_about,
            find_genes: self.find_genes,
            search_genes: self.search_genes,
            list_databases: self.list_databases,
            defaults: Arc::new(config.defaults.clone()),
        }
    }
}
