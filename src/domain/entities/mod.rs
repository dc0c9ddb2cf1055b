mod link;

pub use link::{Link, LinkMapping};
