pub mod backoff;
pub mod reqwest;
pub mod slug;
pub mod time;
