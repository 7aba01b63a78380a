pub mod openai;
pub mod registry;
pub mod traits;
pub mod wheel_size;

pub use openai::OpenAiClient;
pub use registry::DataGovRegistry;
pub use traits::{CompletionSource, TireSpecSource, VehicleRegistry};
pub use wheel_size::WheelSizeClient;
