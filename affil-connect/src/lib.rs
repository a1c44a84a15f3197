pub mod app_config;
pub mod clickbank;
pub mod openai;
pub mod social;
pub mod telegram;

pub use clickbank::{ClickBankClient, MockCatalogSource};
pub use openai::{OpenAiGenerator, SimulatedScriptGenerator};
pub use telegram::{LogNotifier, TelegramNotifier};
