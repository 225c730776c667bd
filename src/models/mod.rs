pub mod accessory;
pub mod answers;
pub mod product;
pub mod submission;

pub use accessory::Accessory;
pub use answers::{AnswerSet, Budget, ColorChoice, Facet, Occasion, RawAnswers, SizeCode};
pub use product::{DressLength, Product, ProductVariant};
pub use submission::Submission;
