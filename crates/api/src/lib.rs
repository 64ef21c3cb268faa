mod client;
mod error;

pub use client::{store_detail_path, StoreApi};
pub use error::{ApiError, ApiErrorKind};
