use thiserror::Error;
#[derive(Debug, Error)]
pub enum SpotMapError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Map container #{0} not found")]
    MissingContainer(String),
    #[error("WebAssembly error: {0}")]
    Wasm(String),
}
