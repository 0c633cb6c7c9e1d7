pub mod defaults;
pub mod detect;
