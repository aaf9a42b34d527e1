use genes_application::use_cases::{
    FindGenesUseCase, GetAboutUseCase, ListDatabasesUseCase, SearchGenesUseCase,
};
use genes_domain::QueryDefaults;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_about: Arc<GetAboutUseCase>,
    pub find_genes: Arc<FindGenesUseCase>,
    pub search_genes: Arc<SearchGenesUseCase>,
    pub list_databases: Arc<ListDatabasesUseCase>,
    pub defaults: Arc<QueryDefaults>,
}
