mod get_about;

pub use get_about::GetAboutUseCase;
