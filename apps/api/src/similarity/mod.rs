// Similarity scorers. Lexical is pure and synchronous; semantic goes through
// the injected `Embedder`, which may be remote.

pub mod embedder;
pub mod lexical;
pub mod semantic;
