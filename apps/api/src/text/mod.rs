// Text preprocessing between extraction and inference:
// pure normalization plus fixed-length vectorization.

pub mod normalize;
pub mod vectorize;

pub use normalize::normalize;
pub use vectorize::{FeatureVector, SequenceVectorizer, PAD_ID};
