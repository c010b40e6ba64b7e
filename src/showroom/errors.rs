use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShowroomError {
    #[error("No factory registered under '{0}'")]
    UnknownFactory(String),
}
