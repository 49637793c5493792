pub mod file;
pub mod form_data;

pub mod prelude {
    pub use crate::file::File;
    pub use crate::form_data::{FormData, FormValue};
}

pub use prelude::*;
