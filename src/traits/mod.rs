pub mod stylized;
pub mod transformer;

pub use stylized::Stylized;
pub use transformer::CaseTransformer;
