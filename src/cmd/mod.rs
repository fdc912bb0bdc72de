pub mod batch;
pub mod run;
pub mod savings;
