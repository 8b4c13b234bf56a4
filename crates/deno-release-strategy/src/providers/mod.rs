mod git;

pub use git::Git2ContentSource;
