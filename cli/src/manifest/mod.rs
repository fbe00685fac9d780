pub use doze_toml::{DozeToml, DEFAULT_GLOBAL};

mod doze_toml;
