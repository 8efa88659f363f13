mod error;
pub use error::SimilarityError;

mod vector_pair;
pub use vector_pair::VectorPair;

mod similarity;
pub use similarity::{SimilarityResult, cosine_similarity};
