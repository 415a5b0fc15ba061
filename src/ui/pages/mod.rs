pub mod analysis;
pub mod home;
pub mod prediction;

pub use analysis::AnalysisPage;
pub use home::HomePage;
pub use prediction::PredictionPage;
