pub mod content_response;
pub mod repository;
pub mod search_response;
pub mod tree_response;
