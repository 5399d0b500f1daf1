//! Extractors that reject with the crate's JSON [`AppError`](crate::errors::AppError) body.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
