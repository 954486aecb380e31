pub mod github;
pub mod highlight;
pub mod presenter;
pub mod prompt;
pub mod run;
