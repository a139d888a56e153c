mod key;
mod key_combo;
mod modifiers;
mod performer;

pub use key::{parse_key, Key};
pub use key_combo::KeyCombo;
pub use modifiers::{Modifier, Modifiers};
pub use performer::Performer;
