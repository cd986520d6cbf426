//! Response generation backends for Persona Reflect.
//!
//! - [`TemplateGenerator`]: canned responses after a simulated delay
//! - [`GeminiApiGenerator`]: real responses from the Gemini REST API
//!
//! Both implement [`ResponseGenerator`], the only seam between the journal
//! state machine and a text-generation backend.

pub mod config;
pub mod factory;
pub mod gemini_api_generator;
pub mod generator;
pub mod personas;
pub mod template_generator;

pub use factory::build_generator;
pub use gemini_api_generator::GeminiApiGenerator;
pub use generator::ResponseGenerator;
pub use template_generator::TemplateGenerator;
