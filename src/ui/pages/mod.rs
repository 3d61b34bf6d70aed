pub mod documents;
pub mod insurance;
pub mod settings;

pub use documents::DocumentsPage;
pub use insurance::InsurancePage;
pub use settings::SettingsPage;
