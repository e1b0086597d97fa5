/// Errors that can occur while selecting a frontend.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("{0} is not a supported destination OS/application.")]
    Unknown(String),
}
