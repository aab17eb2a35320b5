pub mod annotator;
pub mod lemmatizer;
pub mod lexicon;
pub mod model;
pub mod tagger;
pub mod token;
pub mod tokenizer;
