mod model_loader;

pub use model_loader::{LoadedModel, ModelLoader, ModelReport, collect_model_paths};
