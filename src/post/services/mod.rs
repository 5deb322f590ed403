//! Application services for post records.

mod service;

pub use service::{
    CreatePostRequest, PostService, PostServiceError, PostServiceResult, UpdatePostRequest,
};
