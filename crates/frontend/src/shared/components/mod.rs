pub mod collection_list;
pub mod message;
