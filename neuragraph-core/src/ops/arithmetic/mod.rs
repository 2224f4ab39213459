// Export foundational arithmetic operations directly
pub mod add;
pub mod mul;
pub mod sub;

pub use add::{add, list_add};
pub use mul::mul;
pub use sub::sub;
