use empire_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("world map has no tiles")]
    EmptyMap,
}

pub type EngineResult<T> = Result<T, EngineError>;
