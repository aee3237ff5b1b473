//! Pure helper functions
//!
//! Small utilities shared across the resource accessors: URI construction
//! and pagination URL inspection.

pub mod uri;

pub use uri::{
    build_user_uri, extract_page_number, project_id_from_uri, uri_in_listing, video_id_from_uri,
};
