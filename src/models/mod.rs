pub mod activation;

pub use activation::{effect_for, ActivationEffect, ActivationOutcome};
