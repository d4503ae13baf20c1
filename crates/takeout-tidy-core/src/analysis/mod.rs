pub mod compare;
pub mod coverage;
pub mod descriptor;
pub mod duplicates;
pub mod relocate;
pub mod untitled;
