use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: f64, height: f64 },

    #[error("data series must contain at least one value")]
    EmptySeries,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("graph is already initialized")]
    AlreadyInitialized,

    #[error("graph has not been initialized")]
    NotInitialized,

    #[error("graph has been torn down")]
    TornDown,
}
