//! Model name entity

use serde::{Deserialize, Serialize};

/// The models the `/models/{model_name}` route knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub fn message(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            ModelName::Resnet => "Have some residuals",
        }
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelName::Alexnet => write!(f, "alexnet"),
            ModelName::Resnet => write!(f, "resnet"),
            ModelName::Lenet => write!(f, "lenet"),
        }
    }
}
