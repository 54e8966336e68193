pub mod api_utils;
pub mod components;
pub mod data_source;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
