pub mod taxonomy;
pub mod verb_filter;
pub mod vocabulary;
